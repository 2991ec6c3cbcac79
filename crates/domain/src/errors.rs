use thiserror::Error;

/// Failure taxonomy for the dispatch workflows. Validation failures are
/// never retried; only scheduler and gateway calls go through the retry
/// policy before surfacing here.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Missing environment variables: {0}")]
    Configuration(String),

    #[error("Invalid request: {0}")]
    Input(String),

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Error starting worker task after {attempts} attempts: {last_error}")]
    RetriesExhausted { attempts: u32, last_error: String },

    #[error("Auto scaling endpoint unavailable after {attempts} attempts: {last_error}")]
    GatewayUnavailable { attempts: u32, last_error: String },

    #[error("Internal server error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn internal_message_keeps_the_cause_chain() {
        let error = DispatchError::Internal(anyhow!("connection reset").context("probe failed"));
        let message = error.to_string();
        assert!(message.contains("probe failed"));
        assert!(message.contains("connection reset"));
    }
}
