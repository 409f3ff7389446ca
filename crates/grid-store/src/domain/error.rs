//! Storage Errors
//!
//! Failures of the key-value provider. None of these reach the store's
//! callers: the store logs them and keeps its in-memory state.

use std::fmt;

/// Common result type for key-value operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Key-value storage errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No storage in this environment (no window, storage disabled)
    Unavailable,
    /// Write rejected for lack of space
    QuotaExceeded(String),
    /// Value could not be encoded or decoded
    Serialization(String),
    /// Anything else the backend reports
    Backend(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "Storage unavailable"),
            StorageError::QuotaExceeded(msg) => write!(f, "Quota exceeded: {}", msg),
            StorageError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            StorageError::Backend(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}
