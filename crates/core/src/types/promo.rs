//! Promotional codes accepted in the cart.

use serde::{Deserialize, Serialize};

/// A recognised promo code.
///
/// Codes are hard-coded; a matching code grants a flat percentage off the
/// cart subtotal for the current session only and is never persisted with
/// the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromoCode {
    /// `WELCOME10`: 10% off.
    Welcome10,
    /// `FLOWER20`: 20% off.
    Flower20,
}

impl PromoCode {
    /// Match user input against the known codes, ignoring case and
    /// surrounding whitespace. Unknown input yields `None`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_uppercase().as_str() {
            "WELCOME10" => Some(Self::Welcome10),
            "FLOWER20" => Some(Self::Flower20),
            _ => None,
        }
    }

    /// Discount granted by this code, in whole percent.
    #[must_use]
    pub const fn discount_percent(self) -> u32 {
        match self {
            Self::Welcome10 => 10,
            Self::Flower20 => 20,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Welcome10 => "WELCOME10",
            Self::Flower20 => "FLOWER20",
        }
    }
}

impl std::fmt::Display for PromoCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
