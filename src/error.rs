//! Error types for ProjectHub.

use thiserror::Error;

/// Common error type for ProjectHub.
#[derive(Error, Debug)]
pub enum HubError {
    /// Database error.
    ///
    /// Errors from sqlx are converted into this variant.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// A stored file is missing from disk although its record exists.
    #[error("file does not exist: {0}")]
    FileMissing(String),

    /// Unique constraint violation (duplicate name, username, ...).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for HubError {
    fn from(e: sqlx::Error) -> Self {
        HubError::Database(e.to_string())
    }
}

/// Result type alias for ProjectHub operations.
pub type Result<T> = std::result::Result<T, HubError>;
