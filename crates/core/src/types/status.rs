//! Status enums for orders and chat messages.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an order.
///
/// Orders are created as [`OrderStatus::Confirmed`]. Nothing inside the
/// storefront advances the status afterwards; changes come from outside
/// (the florist side) through the storage façade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Delivering,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Linear progression shown on the order tracking view.
    pub const TRACKING_STEPS: [Self; 4] = [
        Self::Confirmed,
        Self::Preparing,
        Self::Delivering,
        Self::Delivered,
    ];

    /// Short human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Awaiting confirmation",
            Self::Confirmed => "Confirmed",
            Self::Preparing => "Preparing",
            Self::Delivering => "On the way",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }

    /// One-sentence explanation for the customer.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Pending => "We are checking the details of your order.",
            Self::Confirmed => "Your order is confirmed and handed over for assembly.",
            Self::Preparing => "Our florists are arranging and packing your order.",
            Self::Delivering => "The courier is on the way and will arrive soon.",
            Self::Delivered => "Your order has been delivered. We hope you love it!",
            Self::Cancelled => {
                "Your order was cancelled. If this is a mistake, please contact support."
            }
        }
    }

    /// Zero-based position in [`Self::TRACKING_STEPS`], or `None` for
    /// statuses outside the progression (pending, cancelled).
    #[must_use]
    pub fn tracking_step(self) -> Option<usize> {
        Self::TRACKING_STEPS.iter().position(|s| *s == self)
    }

    /// Tracking progress in percent (25, 50, 75, 100), or 0 when the status
    /// is outside the progression.
    #[must_use]
    pub fn progress_percent(self) -> u8 {
        self.tracking_step().map_or(0, |step| {
            // TRACKING_STEPS has four entries, so this never exceeds 100.
            #[allow(clippy::cast_possible_truncation)]
            let percent = ((step + 1) * 100 / Self::TRACKING_STEPS.len()) as u8;
            percent
        })
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::Delivering => "delivering",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "preparing" => Ok(Self::Preparing),
            "delivering" => Ok(Self::Delivering),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatSender {
    User,
    Florist,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_tracking_steps() {
        assert_eq!(OrderStatus::Confirmed.tracking_step(), Some(0));
        assert_eq!(OrderStatus::Delivered.tracking_step(), Some(3));
        assert_eq!(OrderStatus::Pending.tracking_step(), None);
        assert_eq!(OrderStatus::Cancelled.tracking_step(), None);
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(OrderStatus::Confirmed.progress_percent(), 25);
        assert_eq!(OrderStatus::Delivering.progress_percent(), 75);
        assert_eq!(OrderStatus::Delivered.progress_percent(), 100);
        assert_eq!(OrderStatus::Cancelled.progress_percent(), 0);
    }

    #[test]
    fn test_display_matches_serde() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Preparing,
            OrderStatus::Delivering,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
            assert_eq!(status.to_string().parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("shipped".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_chat_sender_wire_format() {
        assert_eq!(
            serde_json::to_string(&ChatSender::Florist).unwrap(),
            "\"florist\""
        );
    }
}
