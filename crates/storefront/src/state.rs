//! Application state shared by storefront front ends.

use crate::config::StorefrontConfig;
use crate::services::chat::FloristChat;
use crate::storage::Storage;
use crate::store::StorageError;
use flora_core::OrderId;

/// Configuration plus the opened storage façade.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: StorefrontConfig,
    pub storage: Storage,
}

impl AppState {
    /// Open the configured storage backend.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be opened.
    pub fn new(config: StorefrontConfig) -> Result<Self, StorageError> {
        let storage = config.open_storage()?;
        tracing::info!(backend = ?config.storage, "Storage opened");
        Ok(Self { config, storage })
    }

    /// Open a florist conversation using the configured reply delay.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::NoRuntime` outside a Tokio runtime.
    pub fn florist_chat(&self, order_id: Option<OrderId>) -> crate::Result<FloristChat> {
        FloristChat::open(self.storage.clone(), order_id, self.config.florist_reply_delay)
    }
}
