//! Flora Storefront library.
//!
//! Everything the storefront knows lives in a local key-value store. This
//! crate provides:
//!
//! - [`store`] - the persistence port (`KeyValueStore`) and its backends
//! - [`storage`] - the typed façade over the port (cart, orders, wishlist,
//!   catalog, reviews, chat history, recent searches)
//! - [`models`] - the persisted record types and derived totals
//! - [`catalog`] - the reference catalog seeded on first use
//! - [`services`] - sign-in, checkout, search, reviews, bouquet builder and
//!   the florist chat
//! - [`config`] / [`state`] - environment configuration and the assembled
//!   application state

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod store;

pub use error::{Result, StorefrontError};
pub use storage::Storage;
pub use store::{FileStore, KeyValueStore, MemoryStore, StorageError, UnavailableStore};
