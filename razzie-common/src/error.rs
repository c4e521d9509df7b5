//! Common error types for the razzie service

use thiserror::Error;

/// Common result type for razzie operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error kinds shared by the storage and API layers
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Seed CSV could not be read or parsed
    #[error("CSV ingest error: {0}")]
    Ingest(#[from] csv::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested record not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
