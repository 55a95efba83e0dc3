//! Store error types.

use thiserror::Error;

/// Errors that can occur when using the store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the backing storage.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Failed to perform a store operation.
    #[error("Store operation failed: {0}")]
    StoreError(String),

    /// Key contains characters the backend cannot represent.
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::StoreError(e.to_string())
    }
}
