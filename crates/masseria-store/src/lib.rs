//! Durable key-value storage for the Masseria cart.
//!
//! A [`Store`] serializes values to JSON text and hands the bytes to a
//! [`Backend`]. [`FileBackend`] keeps one file per key in a directory and
//! plays the role of the browser's local storage; [`MemoryBackend`] is used
//! in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use masseria_store::{FileBackend, Store};
//!
//! let store = Store::new(FileBackend::open(".masseria")?);
//! store.set("carrito", &items)?;
//! let items: Option<Vec<StoredItem>> = store.get("carrito")?;
//! ```

mod backend;
mod error;
mod kv;

pub use backend::{Backend, FileBackend, MemoryBackend};
pub use error::StoreError;
pub use kv::Store;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Backend, FileBackend, MemoryBackend, Store, StoreError};
}
