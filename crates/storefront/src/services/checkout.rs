//! Checkout and mock payment.
//!
//! Checkout turns the current cart into an [`Order`]: the cart lines are
//! copied into the order, totals are computed, the order is prepended to the
//! order list and the cart is cleared. No payment is actually taken.

use chrono::{DateTime, TimeDelta, Utc};
use secrecy::{ExposeSecret, SecretString};
use tracing::{info, instrument};

use flora_core::{OrderStatus, UserId};

use crate::error::{Result, StorefrontError};
use crate::models::{BillingInfo, CartTotals, DeliverySlot, Order, PaymentInfo, User};
use crate::services::auth::DEMO_USER_ID;
use crate::storage::Storage;

/// Payment method shown on the payment step.
pub const DEFAULT_PAYMENT_METHOD: &str = "Master Card";
const DEFAULT_COUNTRY: &str = "Russia";

/// Delivery and billing details from the checkout step.
#[derive(Debug, Clone, Default)]
pub struct CheckoutDetails {
    pub billing: BillingInfo,
    /// `None` means the earliest slot (tomorrow at midday).
    pub delivery: Option<DeliverySlot>,
    pub card_message: Option<String>,
}

impl CheckoutDetails {
    /// Details with billing contact prefilled from the signed-in user.
    #[must_use]
    pub fn prefilled(user: Option<&User>) -> Self {
        let billing = BillingInfo {
            full_name: user.map(|u| u.name.clone()).unwrap_or_default(),
            email: user.map(|u| u.email.to_string()).unwrap_or_default(),
            phone: user.and_then(|u| u.phone.clone()).unwrap_or_default(),
            country: DEFAULT_COUNTRY.to_string(),
            ..BillingInfo::default()
        };
        Self {
            billing,
            ..Self::default()
        }
    }
}

/// Card details entered on the payment step.
///
/// The number and security code are secrets: they are checked and then
/// dropped, and only the last four digits are stored with the order.
#[derive(Debug, Clone)]
pub struct CardDetails {
    pub method: String,
    pub holder_name: String,
    pub number: SecretString,
    /// `MM/YY`
    pub expiration_date: String,
    pub security_code: SecretString,
    pub save_card: bool,
}

impl CardDetails {
    /// Validate the card and reduce it to the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::MissingField` for a blank holder name and
    /// `StorefrontError::InvalidCard` for a malformed number, expiration date
    /// or security code.
    pub fn to_payment_info(&self) -> Result<PaymentInfo> {
        if self.holder_name.trim().is_empty() {
            return Err(StorefrontError::MissingField("card holder name"));
        }

        let digits: String = self
            .number
            .expose_secret()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if !(13..=19).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(StorefrontError::InvalidCard("card number must be 13 to 19 digits"));
        }

        if !is_valid_expiration(self.expiration_date.trim()) {
            return Err(StorefrontError::InvalidCard("expiration date must be MM/YY"));
        }

        let code = self.security_code.expose_secret();
        if !(3..=4).contains(&code.len()) || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(StorefrontError::InvalidCard("security code must be 3 or 4 digits"));
        }

        let last4 = digits.get(digits.len() - 4..).unwrap_or_default().to_string();
        let method = if self.method.trim().is_empty() {
            DEFAULT_PAYMENT_METHOD.to_string()
        } else {
            self.method.clone()
        };

        Ok(PaymentInfo {
            method,
            card_name: self.holder_name.trim().to_string(),
            card_last4: last4,
            expiration_date: self.expiration_date.trim().to_string(),
            save_card: self.save_card,
        })
    }
}

fn is_valid_expiration(s: &str) -> bool {
    let Some((month, year)) = s.split_once('/') else {
        return false;
    };
    month.len() == 2
        && year.len() == 2
        && year.chars().all(|c| c.is_ascii_digit())
        && month.parse::<u8>().is_ok_and(|m| (1..=12).contains(&m))
}

/// Checkout service.
pub struct CheckoutService<'a> {
    storage: &'a Storage,
}

impl<'a> CheckoutService<'a> {
    #[must_use]
    pub const fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Place an order for the current cart.
    ///
    /// # Errors
    ///
    /// See [`Self::place_order_at`].
    pub fn place_order(&self, details: CheckoutDetails, card: &CardDetails) -> Result<Order> {
        self.place_order_at(details, card, Utc::now())
    }

    /// Place an order for the current cart as of `now`.
    ///
    /// The order is created `confirmed`, carries a copy of the cart lines,
    /// and its totals include the delivery fee but no promo discount.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::EmptyCart` if the cart has no lines,
    /// `StorefrontError::MissingField` for blank billing fields,
    /// `StorefrontError::InvalidDeliverySlot` for a slot not after today, and
    /// card validation errors from [`CardDetails::to_payment_info`].
    #[instrument(skip(self, details, card))]
    pub fn place_order_at(
        &self,
        details: CheckoutDetails,
        card: &CardDetails,
        now: DateTime<Utc>,
    ) -> Result<Order> {
        let items = self.storage.cart();
        if items.is_empty() {
            return Err(StorefrontError::EmptyCart);
        }

        validate_billing(&details.billing)?;

        let today = now.date_naive();
        let slot = details
            .delivery
            .unwrap_or_else(|| DeliverySlot::earliest_after(today));
        if slot.date <= today {
            return Err(StorefrontError::InvalidDeliverySlot(format!(
                "delivery date {} must be after {today}",
                slot.date
            )));
        }

        let payment = card.to_payment_info()?;
        let totals = CartTotals::compute(&items, None);
        let user_id = self
            .storage
            .user()
            .map_or_else(|| UserId::new(DEMO_USER_ID), |u| u.id);

        let mut order = Order {
            id: Order::id_at(now),
            user_id,
            items,
            subtotal: totals.subtotal,
            delivery_fee: totals.delivery_fee,
            total: totals.total,
            delivery_date: slot.date,
            delivery_time: slot.time,
            billing: details.billing,
            payment,
            status: OrderStatus::Confirmed,
            created_at: now,
            card_message: details
                .card_message
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty()),
        };

        // Ids are `order-<millis>`; a taken id moves on to the next millisecond.
        let mut stamp = now;
        while !self.storage.add_order(order.clone()) {
            stamp += TimeDelta::milliseconds(1);
            order.id = Order::id_at(stamp);
        }
        self.storage.clear_cart();
        info!(order_id = %order.id, total = %order.total, "Order placed");
        Ok(order)
    }
}

fn validate_billing(billing: &BillingInfo) -> Result<()> {
    let required = [
        (billing.full_name.as_str(), "full name"),
        (billing.phone.as_str(), "phone"),
        (billing.address.as_str(), "address"),
    ];
    for (value, field) in required {
        if value.trim().is_empty() {
            return Err(StorefrontError::MissingField(field));
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;
    use crate::models::CartItem;

    fn card() -> CardDetails {
        CardDetails {
            method: String::new(),
            holder_name: "Ivan Ivanov".to_string(),
            number: SecretString::from("4242 4242 4242 4242"),
            expiration_date: "12/29".to_string(),
            security_code: SecretString::from("123"),
            save_card: true,
        }
    }

    fn details() -> CheckoutDetails {
        CheckoutDetails {
            billing: BillingInfo {
                full_name: "Ivan Ivanov".to_string(),
                email: "ivan@example.com".to_string(),
                phone: "+79001234567".to_string(),
                country: "Russia".to_string(),
                state: "Moscow".to_string(),
                address: "Tverskaya 1".to_string(),
                postal_code: "125009".to_string(),
            },
            delivery: None,
            card_message: Some("  With love  ".to_string()),
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp_millis(1_790_000_000_000).unwrap()
    }

    fn storage_with_cart() -> Storage {
        let storage = Storage::in_memory();
        let products = storage.products();
        storage.add_to_cart(CartItem::new(products[0].clone(), 2));
        storage
    }

    #[test]
    fn test_card_snapshot_keeps_last_four_only() {
        let payment = card().to_payment_info().unwrap();
        assert_eq!(payment.card_last4, "4242");
        assert_eq!(payment.method, DEFAULT_PAYMENT_METHOD);
        let json = serde_json::to_string(&payment).unwrap();
        assert!(!json.contains("4242 4242"));
        assert!(!json.contains("123"));
    }

    #[test]
    fn test_card_validation() {
        let mut bad = card();
        bad.number = SecretString::from("1234");
        assert!(matches!(bad.to_payment_info(), Err(StorefrontError::InvalidCard(_))));

        let mut bad = card();
        bad.expiration_date = "13/29".to_string();
        assert!(matches!(bad.to_payment_info(), Err(StorefrontError::InvalidCard(_))));

        let mut bad = card();
        bad.security_code = SecretString::from("12a");
        assert!(matches!(bad.to_payment_info(), Err(StorefrontError::InvalidCard(_))));

        let mut bad = card();
        bad.holder_name = String::new();
        assert!(matches!(bad.to_payment_info(), Err(StorefrontError::MissingField(_))));
    }

    #[test]
    fn test_place_order_snapshots_and_clears_cart() {
        let storage = storage_with_cart();
        let order = CheckoutService::new(&storage)
            .place_order_at(details(), &card(), now())
            .unwrap();

        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.total, order.subtotal + order.delivery_fee);
        assert_eq!(order.card_message.as_deref(), Some("With love"));
        assert_eq!(order.user_id.as_str(), DEMO_USER_ID);
        assert_eq!(order.delivery_time, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        assert!(order.delivery_date > now().date_naive());

        assert!(storage.cart().is_empty());
        assert_eq!(storage.orders(), vec![order]);
    }

    #[test]
    fn test_same_millisecond_checkouts_get_distinct_ids() {
        let storage = storage_with_cart();
        let checkout = CheckoutService::new(&storage);
        let first = checkout.place_order_at(details(), &card(), now()).unwrap();
        storage.add_to_cart(CartItem::new(storage.products()[1].clone(), 1));
        let second = checkout.place_order_at(details(), &card(), now()).unwrap();

        assert_eq!(first.id, Order::id_at(now()));
        assert_eq!(second.id, Order::id_at(now() + TimeDelta::milliseconds(1)));
        assert_eq!(second.created_at, now());

        assert!(storage.update_order_status(&second.id, OrderStatus::Delivered));
        assert_eq!(storage.order(&first.id).unwrap().status, OrderStatus::Confirmed);
        assert_eq!(storage.order(&second.id).unwrap().status, OrderStatus::Delivered);
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let storage = Storage::in_memory();
        let result = CheckoutService::new(&storage).place_order_at(details(), &card(), now());
        assert!(matches!(result, Err(StorefrontError::EmptyCart)));
    }

    #[test]
    fn test_past_delivery_date_is_rejected() {
        let storage = storage_with_cart();
        let mut details = details();
        details.delivery = Some(DeliverySlot {
            date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            time: DeliverySlot::DEFAULT_TIME,
        });
        let result = CheckoutService::new(&storage).place_order_at(details, &card(), now());
        assert!(matches!(result, Err(StorefrontError::InvalidDeliverySlot(_))));
        assert_eq!(storage.cart().len(), 1, "cart must survive a failed checkout");
    }

    #[test]
    fn test_missing_billing_field() {
        let storage = storage_with_cart();
        let mut details = details();
        details.billing.address = "  ".to_string();
        let result = CheckoutService::new(&storage).place_order_at(details, &card(), now());
        assert!(matches!(result, Err(StorefrontError::MissingField("address"))));
    }

    #[test]
    fn test_prefilled_from_user() {
        let storage = Storage::in_memory();
        let user = crate::services::auth::AuthService::new(&storage)
            .sign_in("anna@example.com", "pw")
            .unwrap();
        let details = CheckoutDetails::prefilled(Some(&user));
        assert_eq!(details.billing.email, "anna@example.com");
        assert_eq!(details.billing.country, DEFAULT_COUNTRY);
        assert!(details.delivery.is_none());
    }
}
