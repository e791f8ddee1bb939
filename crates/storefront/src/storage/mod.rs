//! Typed façade over the key-value persistence port.
//!
//! [`Storage`] is the single access layer for every persisted record. It
//! encodes and decodes JSON at the boundary and never fails a read: missing
//! keys, malformed JSON, records of the wrong shape and backend read errors
//! all come back as the type's empty default (logged at `warn`). Writes are
//! fire-and-forget; a backend write failure is logged and otherwise ignored.
//!
//! Collection mutators always read the whole collection, apply one change,
//! and write the whole collection back. Every clone of a [`Storage`] shares
//! one write lock, held across that read and write, so concurrent mutators
//! (florist replies landing on different runtime workers, say) never
//! overwrite each other's changes.
//!
//! # Example
//!
//! ```rust
//! use flora_storefront::Storage;
//! use flora_core::ProductId;
//!
//! let storage = Storage::in_memory();
//! let id = ProductId::new("3");
//! storage.toggle_wishlist(&id);
//! assert!(storage.is_in_wishlist(&id));
//! storage.toggle_wishlist(&id);
//! assert!(storage.wishlist().is_empty());
//! ```

pub mod keys;

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use flora_core::{OrderId, OrderStatus, ProductId, PromoCode};

use crate::catalog;
use crate::models::{CartItem, CartTotals, ChatMessage, Order, Product, Review, User};
use crate::store::{KeyValueStore, MemoryStore, StorageError};

/// Maximum number of remembered search queries.
pub const RECENT_SEARCH_LIMIT: usize = 5;

/// Cloneable handle to the storefront's persisted state.
#[derive(Clone)]
pub struct Storage {
    backend: Arc<dyn KeyValueStore>,
    writes: Arc<Mutex<()>>,
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}

impl Storage {
    /// Wrap a backend.
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self::from_shared(Arc::new(backend))
    }

    /// Wrap an already shared backend.
    #[must_use]
    pub fn from_shared(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            writes: Arc::new(Mutex::new(())),
        }
    }

    /// Storage over a fresh [`MemoryStore`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    // =========================================================================
    // Generic access
    // =========================================================================

    /// Decode the record under `key`, or `None` if it is missing or invalid.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get_item(key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(key, error = %e, "Storage read failed, using default");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "Discarding malformed record");
                None
            }
        }
    }

    /// Decode the record under `key`, or the type's default.
    #[must_use]
    pub fn get_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.get(key).unwrap_or_default()
    }

    /// Encode and persist `value` under `key`.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_set(key, value) {
            warn!(key, error = %e, "Storage write failed");
        }
    }

    /// Delete the record under `key`.
    pub fn remove(&self, key: &str) {
        if let Err(e) = self.backend.remove_item(key) {
            warn!(key, error = %e, "Storage delete failed");
        }
    }

    /// Run a read-modify-write under the shared write lock.
    fn exclusive<R>(&self, update: impl FnOnce() -> R) -> R {
        let _guard = self.writes.lock().unwrap_or_else(PoisonError::into_inner);
        update()
    }

    fn try_set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.backend.set_item(key, &json)
    }

    // =========================================================================
    // User
    // =========================================================================

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.get(keys::USER)
    }

    /// Replace the stored user; `None` removes the record.
    pub fn set_user(&self, user: Option<&User>) {
        match user {
            Some(user) => self.set(keys::USER, user),
            None => self.remove(keys::USER),
        }
    }

    // =========================================================================
    // Cart
    // =========================================================================

    #[must_use]
    pub fn cart(&self) -> Vec<CartItem> {
        self.get_or_default(keys::CART)
    }

    pub fn set_cart(&self, cart: &[CartItem]) {
        self.set(keys::CART, cart);
    }

    /// Add a line, merging into an existing line for the same product.
    ///
    /// A zero quantity is ignored so that every stored line keeps
    /// `quantity >= 1`.
    #[instrument(skip(self, item), fields(product_id = %item.product.id, quantity = item.quantity))]
    pub fn add_to_cart(&self, item: CartItem) {
        if item.quantity == 0 {
            debug!("Ignoring zero-quantity cart add");
            return;
        }
        self.exclusive(|| {
            let mut cart = self.cart();
            if let Some(line) = cart.iter_mut().find(|l| l.product.id == item.product.id) {
                line.quantity = line.quantity.saturating_add(item.quantity);
            } else {
                cart.push(item);
            }
            self.set_cart(&cart);
        });
    }

    #[instrument(skip(self))]
    pub fn remove_from_cart(&self, product_id: &ProductId) {
        self.exclusive(|| {
            let mut cart = self.cart();
            cart.retain(|l| &l.product.id != product_id);
            self.set_cart(&cart);
        });
    }

    /// Set the quantity of an existing line; zero removes the line. Unknown
    /// product ids are ignored.
    #[instrument(skip(self))]
    pub fn update_cart_item_quantity(&self, product_id: &ProductId, quantity: u32) {
        self.exclusive(|| {
            let mut cart = self.cart();
            let Some(line) = cart.iter_mut().find(|l| &l.product.id == product_id) else {
                debug!("No cart line for product");
                return;
            };
            if quantity == 0 {
                cart.retain(|l| &l.product.id != product_id);
            } else {
                line.quantity = quantity;
            }
            self.set_cart(&cart);
        });
    }

    pub fn clear_cart(&self) {
        self.exclusive(|| self.remove(keys::CART));
    }

    /// Totals of the current cart with an optional session promo code.
    #[must_use]
    pub fn cart_totals(&self, promo: Option<PromoCode>) -> CartTotals {
        CartTotals::compute(&self.cart(), promo)
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// All orders, newest first.
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        self.get_or_default(keys::ORDERS)
    }

    #[must_use]
    pub fn order(&self, id: &OrderId) -> Option<Order> {
        self.orders().into_iter().find(|o| &o.id == id)
    }

    /// Prepend `order` to the order list.
    ///
    /// Order ids are unique: returns false and stores nothing if an order
    /// with the same id already exists.
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub fn add_order(&self, order: Order) -> bool {
        self.exclusive(|| {
            let mut orders = self.orders();
            if orders.iter().any(|o| o.id == order.id) {
                debug!("Order id already taken");
                return false;
            }
            orders.insert(0, order);
            self.set(keys::ORDERS, &orders);
            true
        })
    }

    /// Set the status of a stored order. Returns false if no order has `id`.
    #[instrument(skip(self))]
    pub fn update_order_status(&self, id: &OrderId, status: OrderStatus) -> bool {
        self.exclusive(|| {
            let mut orders = self.orders();
            let Some(order) = orders.iter_mut().find(|o| &o.id == id) else {
                return false;
            };
            order.status = status;
            self.set(keys::ORDERS, &orders);
            true
        })
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    #[must_use]
    pub fn wishlist(&self) -> Vec<ProductId> {
        self.get_or_default(keys::WISHLIST)
    }

    #[must_use]
    pub fn is_in_wishlist(&self, product_id: &ProductId) -> bool {
        self.wishlist().contains(product_id)
    }

    /// Remove `product_id` if present, add it otherwise. Returns whether the
    /// product is wishlisted afterwards.
    #[instrument(skip(self))]
    pub fn toggle_wishlist(&self, product_id: &ProductId) -> bool {
        self.exclusive(|| {
            let mut wishlist = self.wishlist();
            let added = if let Some(pos) = wishlist.iter().position(|id| id == product_id) {
                wishlist.remove(pos);
                false
            } else {
                wishlist.push(product_id.clone());
                true
            };
            self.set(keys::WISHLIST, &wishlist);
            added
        })
    }

    /// Wishlisted products in catalog order.
    #[must_use]
    pub fn wishlist_products(&self) -> Vec<Product> {
        let ids = self.wishlist();
        self.products()
            .into_iter()
            .filter(|p| ids.contains(&p.id))
            .collect()
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// The product catalog, seeding the reference catalog on first use.
    ///
    /// Once a decodable catalog is stored it is returned as is; seeding never
    /// runs again.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        if let Some(products) = self.get(keys::PRODUCTS) {
            return products;
        }
        let products = catalog::reference_catalog();
        debug!(count = products.len(), "Seeding product catalog");
        self.set(keys::PRODUCTS, &products);
        products
    }

    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<Product> {
        self.products().into_iter().find(|p| &p.id == id)
    }

    // =========================================================================
    // Reviews
    // =========================================================================

    /// Reviews newest first, optionally only those for `product_id`.
    #[must_use]
    pub fn reviews(&self, product_id: Option<&ProductId>) -> Vec<Review> {
        let reviews: Vec<Review> = self.get_or_default(keys::REVIEWS);
        match product_id {
            Some(id) => reviews.into_iter().filter(|r| &r.product_id == id).collect(),
            None => reviews,
        }
    }

    #[instrument(skip(self, review), fields(product_id = %review.product_id))]
    pub fn add_review(&self, review: Review) {
        self.exclusive(|| {
            let mut reviews = self.reviews(None);
            reviews.insert(0, review);
            self.set(keys::REVIEWS, &reviews);
        });
    }

    // =========================================================================
    // Chat history
    // =========================================================================

    /// Messages stored under a chat key, oldest first.
    #[must_use]
    pub fn chat_history(&self, key: &str) -> Vec<ChatMessage> {
        self.get_or_default(key)
    }

    pub fn set_chat_history(&self, key: &str, messages: &[ChatMessage]) {
        self.set(key, messages);
    }

    /// Append one message to a chat history.
    pub fn append_chat_message(&self, key: &str, message: ChatMessage) {
        self.exclusive(|| {
            let mut messages = self.chat_history(key);
            messages.push(message);
            self.set_chat_history(key, &messages);
        });
    }

    /// Write `first` as the only message of a chat history that is missing,
    /// empty or unreadable. Returns false if the history already has messages.
    pub fn start_chat_history(&self, key: &str, first: ChatMessage) -> bool {
        self.exclusive(|| {
            if !self.chat_history(key).is_empty() {
                return false;
            }
            self.set_chat_history(key, &[first]);
            true
        })
    }

    // =========================================================================
    // Recent searches
    // =========================================================================

    /// Remembered search queries, most recent first.
    #[must_use]
    pub fn recent_searches(&self) -> Vec<String> {
        self.get_or_default(keys::RECENT_SEARCHES)
    }

    /// Remember a search query. Blank queries are ignored; repeating a query
    /// moves it to the front; only the latest [`RECENT_SEARCH_LIMIT`] are kept.
    ///
    /// The list is most recent first and evicts the oldest query, unlike an
    /// append-and-keep-first list that stops recording new queries once full.
    pub fn record_search(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        self.exclusive(|| {
            let mut recent = self.recent_searches();
            recent.retain(|q| q != query);
            recent.insert(0, query.to_string());
            recent.truncate(RECENT_SEARCH_LIMIT);
            self.set(keys::RECENT_SEARCHES, &recent);
        });
    }

    pub fn clear_recent_searches(&self) {
        self.exclusive(|| self.remove(keys::RECENT_SEARCHES));
    }
}
