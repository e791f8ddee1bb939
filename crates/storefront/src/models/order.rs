//! Placed orders.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use flora_core::{OrderId, OrderStatus, Price, UserId};

use super::CartItem;

/// Billing contact captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub state: String,
    pub address: String,
    pub postal_code: String,
}

/// Payment snapshot stored with an order.
///
/// Only the last four card digits are kept; the full number and security
/// code never reach storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub method: String,
    pub card_name: String,
    pub card_last4: String,
    pub expiration_date: String,
    #[serde(default)]
    pub save_card: bool,
}

impl PaymentInfo {
    /// Card number as shown on receipts, e.g. `•••• 4242`.
    #[must_use]
    pub fn masked_card(&self) -> String {
        format!("•••• {}", self.card_last4)
    }
}

/// Requested delivery date and time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliverySlot {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl DeliverySlot {
    /// Midday, the slot used when the customer picks no time.
    pub const DEFAULT_TIME: NaiveTime = match NaiveTime::from_hms_opt(12, 0, 0) {
        Some(t) => t,
        None => NaiveTime::MIN,
    };

    /// Earliest allowed slot: tomorrow at midday.
    #[must_use]
    pub fn earliest_after(today: NaiveDate) -> Self {
        Self {
            date: today.checked_add_days(Days::new(1)).unwrap_or(today),
            time: Self::DEFAULT_TIME,
        }
    }
}

/// An order created at checkout.
///
/// Immutable once stored, except for `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    /// Cart lines as they were at purchase time.
    pub items: Vec<CartItem>,
    pub subtotal: Price,
    pub delivery_fee: Price,
    pub total: Price,
    pub delivery_date: NaiveDate,
    pub delivery_time: NaiveTime,
    pub billing: BillingInfo,
    pub payment: PaymentInfo,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_message: Option<String>,
}

impl Order {
    /// Id in the `order-<unix millis>` form.
    #[must_use]
    pub fn id_at(created_at: DateTime<Utc>) -> OrderId {
        OrderId::new(format!("order-{}", created_at.timestamp_millis()))
    }

    /// Last eight characters of the id, as printed on the tracking view.
    #[must_use]
    pub fn short_id(&self) -> &str {
        let id = self.id.as_str();
        let start = id
            .char_indices()
            .rev()
            .nth(7)
            .map_or(0, |(idx, _)| idx);
        id.get(start..).unwrap_or(id)
    }

    /// Units across all lines, saturating at `u32::MAX`.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |count: u32, item| count.saturating_add(item.quantity))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_earliest_slot_is_tomorrow_noon() {
        let today = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        let slot = DeliverySlot::earliest_after(today);
        assert_eq!(slot.date, NaiveDate::from_ymd_opt(2027, 1, 1).unwrap());
        assert_eq!(slot.time.to_string(), "12:00:00");
    }

    #[test]
    fn test_id_format() {
        let created_at = DateTime::from_timestamp_millis(1_718_000_123_456).unwrap();
        let id = Order::id_at(created_at);
        assert_eq!(id.as_str(), "order-1718000123456");
    }

    #[test]
    fn test_short_id_takes_last_eight_chars() {
        let mut order = sample_order();
        assert_eq!(order.short_id(), "00123456");
        order.id = OrderId::new("x1");
        assert_eq!(order.short_id(), "x1");
    }

    fn sample_order() -> Order {
        let created_at = DateTime::from_timestamp_millis(1_718_000_123_456).unwrap();
        let slot = DeliverySlot::earliest_after(created_at.date_naive());
        Order {
            id: Order::id_at(created_at),
            user_id: UserId::new("1"),
            items: Vec::new(),
            subtotal: Price::ZERO,
            delivery_fee: Price::ZERO,
            total: Price::ZERO,
            delivery_date: slot.date,
            delivery_time: slot.time,
            billing: BillingInfo::default(),
            payment: PaymentInfo {
                method: "Master Card".to_string(),
                card_name: String::new(),
                card_last4: "0000".to_string(),
                expiration_date: "01/30".to_string(),
                save_card: false,
            },
            status: OrderStatus::Confirmed,
            created_at,
            card_message: None,
        }
    }

    fn line(quantity: u32) -> CartItem {
        let mut product = crate::catalog::reference_catalog().remove(0);
        product.price = Price::from_units(86);
        CartItem::new(product, quantity)
    }

    #[test]
    fn test_item_count_saturates() {
        let mut order = sample_order();
        order.items = vec![line(2), line(3)];
        assert_eq!(order.item_count(), 5);

        order.items = vec![line(u32::MAX), line(u32::MAX)];
        assert_eq!(order.item_count(), u32::MAX);
    }

    #[test]
    fn test_amounts_are_json_numbers() {
        let mut order = sample_order();
        order.items = vec![line(2)];
        order.subtotal = Price::from_units(172);
        order.delivery_fee = Price::from_units(15);
        order.total = Price::from_units(187);

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["subtotal"], serde_json::json!(172.0));
        assert_eq!(json["deliveryFee"], serde_json::json!(15.0));
        assert_eq!(json["total"], serde_json::json!(187.0));
        assert_eq!(json["items"][0]["quantity"], 2);
        assert_eq!(json["items"][0]["product"]["price"], serde_json::json!(86.0));

        let back: Order = serde_json::from_value(json).unwrap();
        assert_eq!(back, order);
    }

    #[test]
    fn test_masked_card() {
        let payment = PaymentInfo {
            method: "Master Card".to_string(),
            card_name: "Ivan Ivanov".to_string(),
            card_last4: "4242".to_string(),
            expiration_date: "12/29".to_string(),
            save_card: false,
        };
        assert_eq!(payment.masked_card(), "•••• 4242");
    }
}
