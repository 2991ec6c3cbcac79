use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Per-request correlation identifier. Discarded once the request
/// completes; it only exists so log lines can be tied together.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    pub execution_id: Uuid,
    pub started_at: DateTime<Utc>,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self {
            execution_id: Uuid::new_v4(),
            started_at: Utc::now(),
        }
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain-text execution log accumulated during a launch request and
/// uploaded best-effort to the log bucket at the end.
#[derive(Debug)]
pub struct ExecutionLog {
    execution_id: Uuid,
    lines: Vec<String>,
}

impl ExecutionLog {
    pub fn new(context: &ExecutionContext) -> Self {
        let mut log = Self {
            execution_id: context.execution_id,
            lines: Vec::new(),
        };
        log.push(format!("Execution ID: {}", context.execution_id));
        log.push(format!("Timestamp: {}", context.started_at.to_rfc3339()));
        log
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn storage_key(&self) -> String {
        format!("execution_logs/{}.log", self.execution_id)
    }

    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_starts_with_execution_header() {
        let context = ExecutionContext::new();
        let log = ExecutionLog::new(&context);

        let text = log.to_text();
        assert!(text.starts_with(&format!("Execution ID: {}", context.execution_id)));
        assert!(text.contains("Timestamp: "));
    }

    #[test]
    fn storage_key_is_scoped_to_execution_id() {
        let context = ExecutionContext::new();
        let log = ExecutionLog::new(&context);
        assert_eq!(
            log.storage_key(),
            format!("execution_logs/{}.log", context.execution_id)
        );
    }
}
