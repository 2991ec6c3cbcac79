use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use domain::errors::DispatchError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

/// HTTP-facing wrapper over the dispatch taxonomy. This is an internal
/// tool, so error detail is echoed to the caller as debug context.
#[derive(Debug)]
pub struct AppError(pub DispatchError);

impl From<DispatchError> for AppError {
    fn from(error: DispatchError) -> Self {
        Self(error)
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            DispatchError::Input(_) | DispatchError::UnsupportedPlatform(_) => {
                StatusCode::BAD_REQUEST
            }
            DispatchError::Configuration(_)
            | DispatchError::RetriesExhausted { .. }
            | DispatchError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DispatchError::GatewayUnavailable { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            code: status.as_u16(),
            message: self.0.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn maps_taxonomy_to_status_codes() {
        let cases = [
            (
                AppError(DispatchError::Input("Missing required fields".to_string())),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError(DispatchError::UnsupportedPlatform("webex".to_string())),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError(DispatchError::Configuration("SUBNET_ID".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError(DispatchError::RetriesExhausted {
                    attempts: 3,
                    last_error: "down".to_string(),
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError(DispatchError::GatewayUnavailable {
                    attempts: 3,
                    last_error: "503".to_string(),
                }),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError(DispatchError::Internal(anyhow!("boom"))),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected);
        }
    }
}
