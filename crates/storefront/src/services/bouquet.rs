//! Custom bouquet builder.
//!
//! A bouquet has a size (base price and stem capacity) and a count per stem
//! type. Each count is clamped to the size's capacity. The finished bouquet
//! becomes a one-off `Custom` product in the cart.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use flora_core::{Price, ProductId};

use crate::models::{CartItem, Category, Product};

const CUSTOM_NAME: &str = "Custom Bouquet";
const CUSTOM_IMAGE: &str = "💐";
const CUSTOM_DESCRIPTION: &str = "Custom made bouquet";
const CUSTOM_RATING: f64 = 5.0;

/// Bouquet size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BouquetSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl BouquetSize {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    #[must_use]
    pub fn base_price(self) -> Price {
        match self {
            Self::Small => Price::from_units(30),
            Self::Medium => Price::from_units(50),
            Self::Large => Price::from_units(80),
        }
    }

    /// Maximum count of any one stem type.
    #[must_use]
    pub const fn capacity(self) -> u32 {
        match self {
            Self::Small => 5,
            Self::Medium => 10,
            Self::Large => 15,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

impl std::fmt::Display for BouquetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BouquetSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(format!("invalid bouquet size: {s}")),
        }
    }
}

/// Stem types offered by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StemFlower {
    Roses,
    Lilies,
    Tulips,
    Peonies,
    Hyacinths,
}

impl StemFlower {
    pub const ALL: [Self; 5] = [
        Self::Roses,
        Self::Lilies,
        Self::Tulips,
        Self::Peonies,
        Self::Hyacinths,
    ];

    /// Price of a single stem.
    #[must_use]
    pub fn stem_price(self) -> Price {
        match self {
            Self::Roses => Price::from_units(5),
            Self::Lilies | Self::Hyacinths => Price::from_units(4),
            Self::Tulips => Price::from_units(3),
            Self::Peonies => Price::from_units(6),
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Roses => "🌹",
            Self::Lilies => "🌺",
            Self::Tulips => "🌷",
            Self::Peonies => "🌸",
            Self::Hyacinths => "🌼",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Roses => "Roses",
            Self::Lilies => "Lilies",
            Self::Tulips => "Tulips",
            Self::Peonies => "Peonies",
            Self::Hyacinths => "Hyacinths",
        }
    }
}

impl std::fmt::Display for StemFlower {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StemFlower {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("invalid flower: {s}"))
    }
}

/// A bouquet being assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomBouquet {
    size: BouquetSize,
    stems: BTreeMap<StemFlower, u32>,
}

impl CustomBouquet {
    #[must_use]
    pub fn new(size: BouquetSize) -> Self {
        Self {
            size,
            stems: BTreeMap::new(),
        }
    }

    #[must_use]
    pub const fn size(&self) -> BouquetSize {
        self.size
    }

    /// Switch size. Picking a new size starts over with no stems.
    pub fn set_size(&mut self, size: BouquetSize) {
        self.size = size;
        self.stems.clear();
    }

    /// Set how many stems of `flower` to use, clamped to the size's capacity.
    /// Returns the count actually kept.
    pub fn set_stems(&mut self, flower: StemFlower, count: u32) -> u32 {
        let count = count.min(self.size.capacity());
        if count == 0 {
            self.stems.remove(&flower);
        } else {
            self.stems.insert(flower, count);
        }
        count
    }

    #[must_use]
    pub fn stems(&self, flower: StemFlower) -> u32 {
        self.stems.get(&flower).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total_stems(&self) -> u32 {
        self.stems.values().sum()
    }

    /// Capacity left before the bouquet is full.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.size.capacity().saturating_sub(self.total_stems())
    }

    /// Base price plus the price of every stem.
    #[must_use]
    pub fn price(&self) -> Price {
        self.size.base_price()
            + self
                .stems
                .iter()
                .map(|(flower, count)| flower.stem_price() * *count)
                .sum::<Price>()
    }

    /// The bouquet as a one-off catalog product created at `now`.
    #[must_use]
    pub fn to_product(&self, now: DateTime<Utc>) -> Product {
        Product {
            id: ProductId::new(format!("custom-{}", now.timestamp_millis())),
            name: CUSTOM_NAME.to_string(),
            price: self.price(),
            image: CUSTOM_IMAGE.to_string(),
            category: Category::Custom,
            occasion: Vec::new(),
            flowers: self.stems.keys().map(|f| f.as_str().to_string()).collect(),
            rating: CUSTOM_RATING,
            reviews_count: 0,
            description: CUSTOM_DESCRIPTION.to_string(),
            seller: None,
            size: Some(self.size.as_str().to_string()),
        }
    }

    /// A single cart line for this bouquet, with an optional card message.
    #[must_use]
    pub fn to_cart_item(&self, message: Option<&str>, now: DateTime<Utc>) -> CartItem {
        let item = CartItem::new(self.to_product(now), 1);
        match message.map(str::trim).filter(|m| !m.is_empty()) {
            Some(message) => item.with_message(message),
            None => item,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_clamp_to_capacity() {
        let mut bouquet = CustomBouquet::new(BouquetSize::Small);
        assert_eq!(bouquet.set_stems(StemFlower::Roses, 9), 5);
        assert_eq!(bouquet.stems(StemFlower::Roses), 5);
        assert_eq!(bouquet.remaining(), 0);

        bouquet.set_stems(StemFlower::Roses, 0);
        assert_eq!(bouquet.total_stems(), 0);
    }

    #[test]
    fn test_price_is_base_plus_stems() {
        let mut bouquet = CustomBouquet::new(BouquetSize::Medium);
        assert_eq!(bouquet.price(), Price::from_units(50));

        bouquet.set_stems(StemFlower::Roses, 3);
        bouquet.set_stems(StemFlower::Peonies, 2);
        assert_eq!(bouquet.price(), Price::from_units(50 + 15 + 12));
    }

    #[test]
    fn test_changing_size_resets_stems() {
        let mut bouquet = CustomBouquet::new(BouquetSize::Large);
        bouquet.set_stems(StemFlower::Tulips, 12);
        bouquet.set_size(BouquetSize::Small);
        assert_eq!(bouquet.total_stems(), 0);
        assert_eq!(bouquet.price(), Price::from_units(30));
    }

    #[test]
    fn test_cart_item() {
        let now = DateTime::from_timestamp_millis(1_718_000_000_000).unwrap();
        let mut bouquet = CustomBouquet::default();
        bouquet.set_stems(StemFlower::Lilies, 4);
        let item = bouquet.to_cart_item(Some(" Happy birthday! "), now);

        assert_eq!(item.quantity, 1);
        assert_eq!(item.custom_message.as_deref(), Some("Happy birthday!"));
        assert_eq!(item.product.id.as_str(), "custom-1718000000000");
        assert_eq!(item.product.category, Category::Custom);
        assert_eq!(item.product.price, Price::from_units(66));
        assert_eq!(item.product.flowers, vec!["Lilies".to_string()]);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("large".parse::<BouquetSize>().unwrap(), BouquetSize::Large);
        assert_eq!("PEONIES".parse::<StemFlower>().unwrap(), StemFlower::Peonies);
        assert!("daisies".parse::<StemFlower>().is_err());
    }
}
