//! Common error types for CCNotes

use thiserror::Error;

/// Common result type for CCNotes operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across CCNotes crates
#[derive(Error, Debug)]
pub enum Error {
    /// Storage unreachable or a read/write failed (wraps sqlx::Error)
    #[cfg(feature = "sqlx")]
    #[error("Persistence error: {0}")]
    Persistence(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Build a `NotFound` for an entity kind and id, e.g. `note 42`
    pub fn not_found(kind: &str, id: i64) -> Self {
        Error::NotFound(format!("{} {}", kind, id))
    }

    /// True when the error means the requested record does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}
