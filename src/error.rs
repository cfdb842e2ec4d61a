use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Every failure a handler can surface. Only the kind reaches the client;
/// internal detail goes to the log.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("unauthorized: {0}")]
    Unauthorized(&'static str),
    #[error("{operation} failed: {detail}")]
    Internal {
        operation: &'static str,
        detail: String,
    },
}

impl AppError {
    pub fn internal(operation: &'static str, err: impl std::fmt::Display) -> Self {
        AppError::Internal {
            operation,
            detail: err.to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message.to_string()),
            AppError::Internal { operation, detail } => {
                tracing::error!("[{}] {}", operation, detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("{} failed", operation),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: status.canonical_reason().unwrap_or("Error"),
            message,
        });

        (status, body).into_response()
    }
}
