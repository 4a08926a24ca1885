//! Error types for the storage layer.

use serde::{Deserialize, Serialize};

/// Errors from key-value storage operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageError {
    /// Key not found (only returned by operations that require the key)
    NotFound,

    /// The backend exists but cannot be reached (private browsing, no window)
    Unavailable(String),

    /// I/O error from the underlying medium
    Io(String),

    /// Key cannot be mapped onto the backend
    InvalidKey(String),

    /// Stored bytes could not be decoded
    Serialization(String),
}

impl StorageError {
    /// Create an I/O error with message.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Create an unavailable-backend error with message.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Create an invalid key error with message.
    pub fn invalid_key(msg: impl Into<String>) -> Self {
        Self::InvalidKey(msg.into())
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "key not found"),
            Self::Unavailable(msg) => write!(f, "storage unavailable: {}", msg),
            Self::Io(msg) => write!(f, "storage i/o error: {}", msg),
            Self::InvalidKey(key) => write!(f, "invalid storage key: {}", key),
            Self::Serialization(msg) => write!(f, "stored value is not valid: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::NotFound,
            _ => StorageError::Io(e.to_string()),
        }
    }
}

impl From<std::string::FromUtf8Error> for StorageError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        StorageError::Serialization(e.to_string())
    }
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
