//! Key-value store wrapper with automatic serialization.

use crate::{Backend, StoreError};
use serde::{de::DeserializeOwned, Serialize};

/// Type-safe store over a [`Backend`].
///
/// Values are written as JSON text, so the stored blob for a key is the
/// same text a browser's local storage would hold.
#[derive(Debug)]
pub struct Store<B> {
    backend: B,
}

impl<B: Backend> Store<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let items: Option<Vec<StoredItem>> = store.get("carrito")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.backend.get(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Get the raw text stored under `key`.
    pub fn get_text(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .backend
            .get(key)?
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
    }

    /// Serialize `value` and store it under `key`, replacing any previous value.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        self.backend.set(key, &bytes)?;
        tracing::trace!(key, bytes = bytes.len(), "stored value");
        Ok(())
    }
}
