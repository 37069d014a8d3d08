//! Error types for the SQLite stores.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the database layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A row held a value that does not decode.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Another thread panicked while holding the connection.
    #[error("connection lock poisoned")]
    Poisoned,
}

/// Result type for server registry operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// Errors raised by [`crate::ServerRegistry`]. A failed operation never
/// leaves a partial write behind.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The URL does not point at a repository service path.
    #[error("invalid server url: {0}")]
    InvalidUrl(String),

    /// Another server already uses this name.
    #[error("a server named {0:?} already exists")]
    DuplicateName(String),

    /// No server with this id.
    #[error("server not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl From<rusqlite::Error> for ServerError {
    fn from(e: rusqlite::Error) -> Self {
        ServerError::Storage(StoreError::Database(e))
    }
}
