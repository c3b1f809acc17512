//! Structured error types for the pawhub library.
//!
//! Uses `thiserror` for composable errors; the binary wraps these with
//! `anyhow` for reporting.

use thiserror::Error;

use crate::db::StoreError;

/// Main error type for pawhub operations
#[derive(Error, Debug)]
pub enum Error {
    /// Store access failed (connection, constraint, query)
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Pool creation or connection failed
    #[error("database connection error: {0}")]
    Connect(#[from] sqlx::Error),

    /// Listener bind or serve failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pawhub operations
pub type Result<T> = std::result::Result<T, Error>;
