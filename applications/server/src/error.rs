/// Server error types
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use pulse_core::PulseError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Rate limit exceeded, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Store error: {0}")]
    Store(#[from] PulseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

impl From<pulse_storage::StorageError> for ServerError {
    fn from(err: pulse_storage::StorageError) -> Self {
        ServerError::Store(err.into())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::RateLimited { retry_after_secs } => {
                let body = Json(json!({
                    "error": "Rate limit exceeded. Please try again later.",
                }));
                return (
                    StatusCode::TOO_MANY_REQUESTS,
                    [(header::RETRY_AFTER, retry_after_secs.to_string())],
                    body,
                )
                    .into_response();
            }
            ServerError::Store(ref e) => {
                tracing::error!("Store error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ServerError::Jwt(ref e) => {
                tracing::warn!("JWT rejected: {:?}", e);
                (StatusCode::UNAUTHORIZED, "Invalid token".to_string())
            }
            ServerError::Bcrypt(ref e) => {
                tracing::error!("Bcrypt error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
