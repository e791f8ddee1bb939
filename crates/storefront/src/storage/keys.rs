//! Keys under which storefront records are persisted.

use flora_core::OrderId;

/// The signed-in user.
pub const USER: &str = "flowers_user";

/// Cart lines.
pub const CART: &str = "flowers_cart";

/// Placed orders, newest first.
pub const ORDERS: &str = "flowers_orders";

/// Wishlisted product ids.
pub const WISHLIST: &str = "flowers_wishlist";

/// The seeded product catalog.
pub const PRODUCTS: &str = "flowers_products";

/// Reviews for all products, newest first.
pub const REVIEWS: &str = "flowers_reviews";

/// Prefix of every florist chat history key.
pub const CHAT_HISTORY: &str = "flowers_chat_history";

/// Recent catalog search queries.
pub const RECENT_SEARCHES: &str = "recent_searches";

/// Chat history key, scoped to an order when one is given.
#[must_use]
pub fn chat_history(order_id: Option<&OrderId>) -> String {
    order_id.map_or_else(
        || CHAT_HISTORY.to_string(),
        |id| format!("{CHAT_HISTORY}:{id}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_history_key() {
        assert_eq!(chat_history(None), "flowers_chat_history");
        assert_eq!(
            chat_history(Some(&OrderId::new("order-7"))),
            "flowers_chat_history:order-7"
        );
    }
}
