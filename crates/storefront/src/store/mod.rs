//! Persistence port for the storefront.
//!
//! The storefront persists opaque JSON strings under fixed keys. The
//! [`KeyValueStore`] trait is the only way in or out; the typed
//! [`Storage`](crate::storage::Storage) façade is built on top of it and is
//! handed to every consumer explicitly.
//!
//! # Backends
//!
//! - [`MemoryStore`] - process-local map, used by tests and `FLORA_STORAGE=memory`
//! - [`FileStore`] - one JSON file per key under a data directory
//! - [`UnavailableStore`] - no persistent storage at all; reads are absent
//!   and writes are dropped

mod file;
mod memory;
mod unavailable;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use unavailable::UnavailableStore;

/// Errors raised by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Record could not be encoded for writing.
    #[error("failed to encode record {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A synchronous string key-value store.
///
/// Implementations must be shareable across threads: the florist chat writes
/// its delayed reply from a Tokio task.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
