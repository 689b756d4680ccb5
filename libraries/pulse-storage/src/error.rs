/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// A row with the same key already exists
    #[error("Duplicate {entity}: {id}")]
    Duplicate { entity: String, id: String },

    /// A stored value no longer matches the domain model
    #[error("Corrupt {entity} row: {reason}")]
    Corrupt { entity: String, reason: String },

    /// Record rejected before it reached the database
    #[error("Invalid record: {0}")]
    Invalid(String),

    /// Migration error
    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// Create a corrupt row error
    pub fn corrupt(entity: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Corrupt {
            entity: entity.into(),
            reason: reason.to_string(),
        }
    }

    /// Classify an insert failure, turning primary key clashes into `Duplicate`
    pub(crate) fn from_insert(entity: &str, id: &str, err: sqlx::Error) -> Self {
        let unique = err
            .as_database_error()
            .is_some_and(|db| db.is_unique_violation());
        if unique {
            Self::Duplicate {
                entity: entity.to_string(),
                id: id.to_string(),
            }
        } else {
            Self::Database(err)
        }
    }
}

impl From<StorageError> for pulse_core::PulseError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Duplicate { entity, id } => {
                pulse_core::PulseError::Duplicate(format!("{entity} {id}"))
            }
            StorageError::Invalid(msg) => pulse_core::PulseError::InvalidInput(msg),
            other => pulse_core::PulseError::storage(other.to_string()),
        }
    }
}

impl From<pulse_core::PulseError> for StorageError {
    fn from(err: pulse_core::PulseError) -> Self {
        Self::Invalid(err.to_string())
    }
}
