//! Product reviews.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use flora_core::{ProductId, ReviewId, ReviewRating, UserId};

use super::Product;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub user_id: UserId,
    pub user_name: String,
    pub rating: ReviewRating,
    pub text: String,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

/// Rating shown for a product: the mean of its reviews, or the product's
/// static rating when it has none.
///
/// `reviews` is expected to be already filtered to `product`.
#[must_use]
pub fn average_rating(product: &Product, reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return product.rating;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating.stars())).sum();
    #[allow(clippy::cast_precision_loss)] // review counts stay far below 2^52
    let count = reviews.len() as f64;
    f64::from(sum) / count
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::Category;
    use flora_core::Price;

    fn product(rating: f64) -> Product {
        Product {
            id: ProductId::new("1"),
            name: "White Dawn".to_string(),
            price: Price::from_units(86),
            image: "🌼".to_string(),
            category: Category::Bouquets,
            occasion: Vec::new(),
            flowers: Vec::new(),
            rating,
            reviews_count: 24,
            description: String::new(),
            seller: None,
            size: None,
        }
    }

    fn review(stars: u8) -> Review {
        Review {
            id: ReviewId::new(format!("r{stars}")),
            product_id: ProductId::new("1"),
            user_id: UserId::new("1"),
            user_name: "You".to_string(),
            rating: ReviewRating::new(stars).unwrap(),
            text: "Lovely".to_string(),
            date: Utc::now(),
            verified: None,
        }
    }

    #[test]
    fn test_falls_back_to_static_rating() {
        assert!((average_rating(&product(4.9), &[]) - 4.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mean_of_reviews() {
        let reviews = [review(5), review(4), review(3)];
        assert!((average_rating(&product(4.9), &reviews) - 4.0).abs() < f64::EPSILON);
    }
}
