use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// All errors a request handler can surface.
///
/// Handlers return `Result<T, AppError>`; axum converts the `Err` arm into an
/// HTTP response through the `IntoResponse` impl below. Store-level failures
/// are logged and collapsed into a generic 500 so no internal detail leaks.
#[derive(Debug, Error)]
pub enum AppError {
    /// Referenced row does not exist (HTTP 404).
    #[error("Resource not found")]
    NotFound,

    /// Missing or invalid request field (HTTP 400).
    #[error("{0}")]
    Validation(String),

    /// No valid session (HTTP 401). Also used for failed logins.
    #[error("{0}")]
    Unauthorized(String),

    /// Session exists but the role is insufficient (HTTP 403).
    #[error("{0}")]
    Forbidden(String),

    /// Unexpected server-side failure (HTTP 500).
    #[error("Internal error: {0}")]
    Internal(String),

    /// Database failure (HTTP 500). `#[from]` lets `?` convert sqlx errors.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

impl AppError {
    /// 400 naming the missing request field.
    pub fn missing_field(field: &str) -> Self {
        AppError::Validation(format!("{field} is required"))
    }
}
