//! Integration tests for Flora.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p flora-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart` - Cart merging, quantities and totals through the façade
//! - `persistence` - File backend durability, seeding and damaged data
//! - `checkout` - Orders, wishlist and reviews end to end
//! - `florist_chat` - Reply scheduling and cancellation

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use flora_core::{ProductId, PromoCode};
use flora_storefront::models::CartItem;
use flora_storefront::services::CardDetails;
use flora_storefront::{FileStore, Storage, StorageError};
use secrecy::SecretString;
use tempfile::TempDir;

/// A storefront backed by files in a private temporary directory.
///
/// The directory lives as long as the context, so storage can be reopened
/// from the same files to check what survived.
pub struct TestContext {
    dir: TempDir,
    pub storage: Storage,
}

impl TestContext {
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created.
    pub fn new() -> Result<Self, StorageError> {
        let dir = TempDir::new().map_err(|source| StorageError::Io {
            path: std::env::temp_dir(),
            source,
        })?;
        let storage = Storage::new(FileStore::open(dir.path())?);
        Ok(Self { dir, storage })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// A second façade over the same files, as after a restart.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be opened.
    pub fn reopen(&self) -> Result<Storage, StorageError> {
        Ok(Storage::new(FileStore::open(self.dir.path())?))
    }

    /// Add `quantity` of catalog product `id` to the cart.
    ///
    /// # Panics
    ///
    /// Panics if the product is not in the catalog.
    pub fn add(&self, id: &str, quantity: u32) {
        let Some(product) = self.storage.product(&ProductId::new(id)) else {
            panic!("product {id} not in catalog");
        };
        self.storage.add_to_cart(CartItem::new(product, quantity));
    }

    /// Cart total with an optional promo code, as a display string.
    #[must_use]
    pub fn total(&self, promo: Option<PromoCode>) -> String {
        self.storage.cart_totals(promo).total.to_string()
    }
}

/// A card that passes validation.
#[must_use]
pub fn test_card() -> CardDetails {
    CardDetails {
        method: "Master Card".to_string(),
        holder_name: "Ivan Ivanov".to_string(),
        number: SecretString::from("5555 5555 5555 4444"),
        expiration_date: "08/30".to_string(),
        security_code: SecretString::from("321"),
        save_card: false,
    }
}
