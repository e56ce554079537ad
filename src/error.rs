//! Error types for trip-ledger
//!
//! Defines the crate's error hierarchy using thiserror. "Not found" is
//! deliberately absent from this enum: lookups return `Option` and
//! mutations report whether they matched, so callers can branch without
//! error-handling machinery. Errors here mean the backing store itself
//! failed.

use thiserror::Error;

/// The main error type for trip-ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors (corrupt files, failed writes, poisoned locks)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for trip-ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
