//! Domain models for the storefront.
//!
//! Every type here is a plain serde record persisted as JSON (camelCase
//! field names) by the [`Storage`](crate::storage::Storage) façade.

pub mod cart;
pub mod chat;
pub mod order;
pub mod product;
pub mod review;
pub mod user;

pub use cart::{CartItem, CartTotals, DELIVERY_FEE_UNITS};
pub use chat::ChatMessage;
pub use order::{BillingInfo, DeliverySlot, Order, PaymentInfo};
pub use product::{Category, Product};
pub use review::{Review, average_rating};
pub use user::User;
