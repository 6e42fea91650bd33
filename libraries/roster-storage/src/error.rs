/// Storage-specific errors
use thiserror::Error;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database connection error
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Schema bootstrap error
    #[error("Schema error: {0}")]
    Schema(String),

    /// Unique constraint violated (SQLSTATE 23505)
    #[error("{0}")]
    Duplicate(String),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.is_unique_violation() {
                return Self::Duplicate(db.message().to_string());
            }
        }
        Self::Database(err)
    }
}

impl From<StorageError> for roster_core::RosterError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Duplicate(msg) => roster_core::RosterError::duplicate(msg),
            other => roster_core::RosterError::storage(other.to_string()),
        }
    }
}
