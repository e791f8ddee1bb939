//! Catalog products.

use serde::{Deserialize, Serialize};

use flora_core::{Price, ProductId};

/// Catalog section a product belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Bouquets,
    Indoor,
    Accessories,
    Gifts,
    /// Bouquets assembled in the bouquet builder.
    Custom,
}

impl Category {
    /// Sections listed in the catalog (custom bouquets are never listed).
    pub const LISTED: [Self; 4] = [Self::Bouquets, Self::Indoor, Self::Accessories, Self::Gifts];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bouquets => "Bouquets",
            Self::Indoor => "Indoor",
            Self::Accessories => "Accessories",
            Self::Gifts => "Gifts",
            Self::Custom => "Custom",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bouquets" => Ok(Self::Bouquets),
            "indoor" => Ok(Self::Indoor),
            "accessories" => Ok(Self::Accessories),
            "gifts" => Ok(Self::Gifts),
            "custom" => Ok(Self::Custom),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

/// A catalog product.
///
/// Reference data: seeded once and never modified by storefront flows. Cart
/// lines and orders embed a full copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Emoji glyph or image URL.
    pub image: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub occasion: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flowers: Vec<String>,
    /// Static rating from 0 to 5.
    pub rating: f64,
    pub reviews_count: u32,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl Product {
    #[must_use]
    pub fn has_occasion(&self, occasion: &str) -> bool {
        self.occasion.iter().any(|o| o.eq_ignore_ascii_case(occasion))
    }

    #[must_use]
    pub fn has_flower(&self, flower: &str) -> bool {
        self.flowers.iter().any(|f| f.eq_ignore_ascii_case(flower))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default_when_absent() {
        let json = r#"{
            "id": "99",
            "name": "Test",
            "price": 10,
            "image": "🌷",
            "category": "Gifts",
            "rating": 4.5,
            "reviewsCount": 3,
            "description": "d"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.occasion.is_empty());
        assert!(product.seller.is_none());
        assert_eq!(product.category, Category::Gifts);
        assert_eq!(product.price, flora_core::Price::from_units(10));
    }

    #[test]
    fn test_price_written_as_number() {
        let product = crate::catalog::reference_catalog().remove(0);
        let json = serde_json::to_value(&product).unwrap();
        assert!(json["price"].is_number());
        assert_eq!(json["price"].as_f64(), Some(86.0));
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("indoor".parse::<Category>().unwrap(), Category::Indoor);
        assert!("plants".parse::<Category>().is_err());
    }
}
