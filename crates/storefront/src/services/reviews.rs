//! Product reviews.

use chrono::Utc;
use tracing::{info, instrument};

use flora_core::{ProductId, ReviewId, ReviewRating, UserId};

use crate::error::{Result, StorefrontError};
use crate::models::{Review, average_rating};
use crate::services::auth::DEMO_USER_ID;
use crate::storage::Storage;

/// Display name of reviews left without signing in.
pub const ANONYMOUS_NAME: &str = "You";

/// Review service.
pub struct ReviewService<'a> {
    storage: &'a Storage,
}

impl<'a> ReviewService<'a> {
    #[must_use]
    pub const fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Reviews of a product, newest first.
    #[must_use]
    pub fn for_product(&self, product_id: &ProductId) -> Vec<Review> {
        self.storage.reviews(Some(product_id))
    }

    /// Mean review rating of a product, falling back to its catalog rating.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::ProductNotFound` for an unknown product.
    pub fn rating(&self, product_id: &ProductId) -> Result<f64> {
        let product = self
            .storage
            .product(product_id)
            .ok_or_else(|| StorefrontError::ProductNotFound(product_id.clone()))?;
        Ok(average_rating(&product, &self.for_product(product_id)))
    }

    /// Leave a review on a catalog product.
    ///
    /// Reviews are written as the signed-in user, or anonymously as
    /// [`ANONYMOUS_NAME`] when nobody is signed in, and are never verified.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::ProductNotFound` for an unknown product and
    /// `StorefrontError::MissingField` for blank text.
    #[instrument(skip(self, text))]
    pub fn submit_review(
        &self,
        product_id: &ProductId,
        rating: ReviewRating,
        text: &str,
    ) -> Result<Review> {
        if self.storage.product(product_id).is_none() {
            return Err(StorefrontError::ProductNotFound(product_id.clone()));
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(StorefrontError::MissingField("review text"));
        }

        let (user_id, user_name) = self.storage.user().map_or_else(
            || (UserId::new(DEMO_USER_ID), ANONYMOUS_NAME.to_string()),
            |u| (u.id, u.name),
        );

        let review = Review {
            id: ReviewId::new(uuid::Uuid::new_v4().to_string()),
            product_id: product_id.clone(),
            user_id,
            user_name,
            rating,
            text: text.to_string(),
            date: Utc::now(),
            verified: Some(false),
        };
        self.storage.add_review(review.clone());
        info!(review_id = %review.id, stars = rating.stars(), "Review added");
        Ok(review)
    }
}
