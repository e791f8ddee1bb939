//! Currency-agnostic price representation using decimal arithmetic.
//!
//! Catalog prices, cart lines and order totals are all plain amounts in the
//! store's single currency, so `Price` carries no currency code. Arithmetic is
//! exact (`rust_decimal`), which keeps percentage discounts such as
//! `130 × 20% = 26` free of float drift. On the wire a price is a plain JSON
//! number.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul, Sub};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An amount of money in the store currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Price {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of currency units.
    #[must_use]
    pub fn from_units(units: u32) -> Self {
        Self(Decimal::from(units))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is strictly greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// The given whole-number percentage of this price.
    #[must_use]
    pub fn percent(&self, percent: u32) -> Self {
        Self(self.0 * Decimal::from(percent) / Decimal::ONE_HUNDRED)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Price {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

/// Line price: unit price times quantity.
impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_line_arithmetic() {
        let subtotal: Price = [Price::from_units(50) * 2, Price::from_units(30) * 1]
            .into_iter()
            .sum();
        assert_eq!(subtotal, Price::from_units(130));
    }

    #[test]
    fn test_percent_is_exact() {
        let discount = Price::from_units(130).percent(20);
        assert_eq!(discount, Price::from_units(26));
        assert_eq!(Price::from_units(99).percent(10).to_string(), "9.90");
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Price::from_units(119).to_string(), "119.00");
        assert_eq!(Price::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_serialized_as_number() {
        assert_eq!(serde_json::to_string(&Price::from_units(86)).unwrap(), "86.0");
        assert_eq!(serde_json::to_string(&Price::from_units(99).percent(10)).unwrap(), "9.9");
    }

    #[test]
    fn test_deserialized_from_number() {
        let whole: Price = serde_json::from_str("86").unwrap();
        assert_eq!(whole, Price::from_units(86));
        let fractional: Price = serde_json::from_str("119.5").unwrap();
        assert_eq!(fractional, Price::new(Decimal::new(1195, 1)));
    }

    #[test]
    fn test_is_positive() {
        assert!(Price::from_units(1).is_positive());
        assert!(!Price::ZERO.is_positive());
    }
}
