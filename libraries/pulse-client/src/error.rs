//! Error types for the Pulse client.

use thiserror::Error;

/// Errors that can occur when talking to a Pulse reporting server.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// The requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request was rejected with 400
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Authentication required but no token available
    #[error("Authentication required")]
    AuthRequired,

    /// Authentication failed (invalid credentials or expired token)
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),

    /// Rate limited by server
    #[error("Rate limited, retry after {retry_after_secs} seconds")]
    RateLimited { retry_after_secs: u64 },
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
