//! Core types for Flora.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod price;
pub mod promo;
pub mod rating;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use price::Price;
pub use promo::PromoCode;
pub use rating::{RatingError, ReviewRating};
pub use status::*;
