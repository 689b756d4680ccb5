/// Core error types for Pulse
use thiserror::Error;

/// Result type alias using `PulseError`
pub type Result<T> = std::result::Result<T, PulseError>;

/// Core error type for Pulse
#[derive(Error, Debug)]
pub enum PulseError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Duplicate entry
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl PulseError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for PulseError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
