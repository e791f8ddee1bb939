//! Cart lines and derived totals.

use serde::{Deserialize, Serialize};

use flora_core::{Price, PromoCode};

use super::Product;

/// Flat delivery fee charged whenever the cart is not empty.
pub const DELIVERY_FEE_UNITS: u32 = 15;

/// One line of the cart: a product snapshot and how many of it.
///
/// Lines are identified by the embedded product's id; the storage façade
/// merges repeated adds into one line and keeps `quantity >= 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
}

impl CartItem {
    #[must_use]
    pub const fn new(product: Product, quantity: u32) -> Self {
        Self {
            product,
            quantity,
            custom_message: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.custom_message = Some(message.into());
        self
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price * self.quantity
    }
}

/// Money summary of a set of cart lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub subtotal: Price,
    pub delivery_fee: Price,
    pub discount: Price,
    pub total: Price,
}

impl CartTotals {
    /// Compute totals for `items`, applying `promo` if one was entered.
    ///
    /// - subtotal = Σ unit price × quantity
    /// - delivery fee = [`DELIVERY_FEE_UNITS`] when subtotal > 0, else 0
    /// - discount = promo percentage of the subtotal
    /// - total = subtotal + delivery fee − discount
    #[must_use]
    pub fn compute(items: &[CartItem], promo: Option<PromoCode>) -> Self {
        let subtotal: Price = items.iter().map(CartItem::line_total).sum();
        let delivery_fee = if subtotal.is_positive() {
            Price::from_units(DELIVERY_FEE_UNITS)
        } else {
            Price::ZERO
        };
        let discount = promo.map_or(Price::ZERO, |code| {
            subtotal.percent(code.discount_percent())
        });

        Self {
            subtotal,
            delivery_fee,
            discount,
            total: subtotal + delivery_fee - discount,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::Category;
    use flora_core::ProductId;

    fn product(id: &str, price: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::from_units(price),
            image: "💐".to_string(),
            category: Category::Bouquets,
            occasion: Vec::new(),
            flowers: Vec::new(),
            rating: 4.5,
            reviews_count: 0,
            description: String::new(),
            seller: None,
            size: None,
        }
    }

    #[test]
    fn test_totals_without_discount() {
        let items = [
            CartItem::new(product("a", 50), 2),
            CartItem::new(product("b", 30), 1),
        ];
        let totals = CartTotals::compute(&items, None);
        assert_eq!(totals.subtotal, Price::from_units(130));
        assert_eq!(totals.delivery_fee, Price::from_units(15));
        assert_eq!(totals.discount, Price::ZERO);
        assert_eq!(totals.total, Price::from_units(145));
    }

    #[test]
    fn test_totals_with_flower20() {
        let items = [
            CartItem::new(product("a", 50), 2),
            CartItem::new(product("b", 30), 1),
        ];
        let totals = CartTotals::compute(&items, PromoCode::parse("FLOWER20"));
        assert_eq!(totals.discount, Price::from_units(26));
        assert_eq!(totals.total.to_string(), "119.00");
    }

    #[test]
    fn test_empty_cart_has_no_delivery_fee() {
        let totals = CartTotals::compute(&[], Some(PromoCode::Welcome10));
        assert_eq!(totals.delivery_fee, Price::ZERO);
        assert_eq!(totals.total, Price::ZERO);
    }

    #[test]
    fn test_custom_message_wire_name() {
        let item = CartItem::new(product("a", 1), 1).with_message("Happy birthday");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["customMessage"], "Happy birthday");
    }
}
