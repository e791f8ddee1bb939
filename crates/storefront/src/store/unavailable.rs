//! Backend for environments without persistent storage.

use super::{KeyValueStore, StorageError};

/// A store that holds nothing.
///
/// Every read is absent and every write is silently dropped, so the façade
/// serves defaults (empty cart, no user, freshly built catalog) each time.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}
