//! Star rating attached to a customer review.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when building a [`ReviewRating`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingError {
    #[error("rating must be between 1 and 5 stars (got {got})")]
    OutOfRange { got: u8 },
}

/// A whole-star review rating from 1 to 5.
///
/// Deserialization goes through [`ReviewRating::new`], so a stored review with
/// a rating outside the range fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ReviewRating(u8);

impl ReviewRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] unless `stars` is within 1..=5.
    pub const fn new(stars: u8) -> Result<Self, RatingError> {
        if stars >= Self::MIN && stars <= Self::MAX {
            Ok(Self(stars))
        } else {
            Err(RatingError::OutOfRange { got: stars })
        }
    }

    #[must_use]
    pub const fn stars(self) -> u8 {
        self.0
    }
}

impl Default for ReviewRating {
    /// New reviews start at five stars.
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl TryFrom<u8> for ReviewRating {
    type Error = RatingError;

    fn try_from(stars: u8) -> Result<Self, Self::Error> {
        Self::new(stars)
    }
}

impl From<ReviewRating> for u8 {
    fn from(rating: ReviewRating) -> Self {
        rating.0
    }
}

impl fmt::Display for ReviewRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}
