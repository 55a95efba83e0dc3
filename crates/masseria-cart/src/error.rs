//! Cart error types.

use masseria_fetch::FetchError;
use masseria_store::StoreError;
use thiserror::Error;

/// Errors that can occur in cart operations.
#[derive(Error, Debug)]
pub enum CartError {
    /// No line item at the given position.
    #[error("No item at index {index} (cart has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Quantity below one.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity above the per-item limit.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Negative or non-finite unit price.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// A required form field is missing or empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A form field holds a value outside its allowed set.
    #[error("Invalid value for {field}: {value}")]
    InvalidField { field: &'static str, value: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Storage failure.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// HTTP failure.
    #[error("Request error: {0}")]
    Fetch(#[from] FetchError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CartError {
    fn from(e: serde_json::Error) -> Self {
        CartError::SerializationError(e.to_string())
    }
}
