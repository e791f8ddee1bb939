//! Unified error handling for storefront services.
//!
//! Storage reads never fail (they fall back to defaults), so the errors here
//! are about invalid input to a service call: an empty cart at checkout, an
//! unknown product, a malformed email or card, and so on.

use thiserror::Error;

use flora_core::{EmailError, ProductId, RatingError};

use crate::store::StorageError;

/// Storefront service error.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Storage backend could not be opened.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Email failed validation.
    #[error("invalid email: {0}")]
    Email(#[from] EmailError),

    /// Review rating out of range.
    #[error("invalid rating: {0}")]
    Rating(#[from] RatingError),

    /// Referenced product is not in the catalog.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// Checkout attempted with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// A required field was blank.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// Payment card details failed validation.
    #[error("invalid card: {0}")]
    InvalidCard(&'static str),

    /// Requested delivery slot is not allowed.
    #[error("invalid delivery slot: {0}")]
    InvalidDeliverySlot(String),

    /// A background task was requested outside a Tokio runtime.
    #[error("no async runtime available: {0}")]
    NoRuntime(String),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
