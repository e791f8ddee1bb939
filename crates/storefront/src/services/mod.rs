//! Business logic services for the storefront.
//!
//! Every service borrows or clones the [`Storage`](crate::storage::Storage)
//! façade; none keeps state of its own apart from the florist chat's pending
//! replies.
//!
//! # Services
//!
//! - `auth` - Mock sign-in, sign-out and profile updates
//! - `search` - Catalog search and filtering
//! - `checkout` - Turning the cart into an order
//! - `reviews` - Product reviews and ratings
//! - `bouquet` - The custom bouquet builder
//! - `chat` - The simulated florist chat

pub mod auth;
pub mod bouquet;
pub mod chat;
pub mod checkout;
pub mod reviews;
pub mod search;

pub use auth::AuthService;
pub use bouquet::{BouquetSize, CustomBouquet, StemFlower};
pub use chat::FloristChat;
pub use checkout::{CardDetails, CheckoutDetails, CheckoutService};
pub use reviews::ReviewService;
pub use search::{ProductFilter, search_products};
