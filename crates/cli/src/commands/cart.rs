//! Cart, wishlist and bouquet builder commands.

use std::io::Write;

use chrono::Utc;
use flora_core::{ProductId, PromoCode};
use flora_storefront::models::CartItem;
use flora_storefront::services::{BouquetSize, CustomBouquet, StemFlower};
use flora_storefront::state::AppState;

use super::catalog::write_product_line;
use super::{CommandError, CommandResult};

/// Print the cart and its totals, applying `promo` if given.
///
/// # Errors
///
/// Returns `CommandError::InvalidArgument` for an unknown promo code.
pub fn show(state: &AppState, promo: Option<&str>, out: &mut impl Write) -> CommandResult {
    let promo = promo
        .map(|code| {
            PromoCode::parse(code).ok_or_else(|| CommandError::InvalidArgument {
                what: "promo code",
                value: code.to_string(),
            })
        })
        .transpose()?;

    let items = state.storage.cart();
    if items.is_empty() {
        writeln!(out, "Your cart is empty")?;
        return Ok(());
    }
    for item in &items {
        writeln!(
            out,
            "{:>14}  {} {:<32} {:>3} × {:>8} = {:>8}",
            item.product.id,
            item.product.image,
            item.product.name,
            item.quantity,
            item.product.price,
            item.line_total()
        )?;
        if let Some(message) = &item.custom_message {
            writeln!(out, "{:>16}✉ {message}", "")?;
        }
    }

    let totals = state.storage.cart_totals(promo);
    writeln!(out)?;
    writeln!(out, "Subtotal: {:>10}", totals.subtotal)?;
    writeln!(out, "Delivery: {:>10}", totals.delivery_fee)?;
    if let Some(code) = promo {
        writeln!(out, "Discount: {:>10}  ({code})", totals.discount)?;
    }
    writeln!(out, "Total:    {:>10}", totals.total)?;
    Ok(())
}

/// Add a catalog product to the cart.
///
/// # Errors
///
/// Returns `CommandError::NotFound` for an unknown product.
pub fn add(
    state: &AppState,
    id: &str,
    quantity: u32,
    message: Option<&str>,
    out: &mut impl Write,
) -> CommandResult {
    let id = ProductId::new(id);
    let product = state
        .storage
        .product(&id)
        .ok_or_else(|| CommandError::NotFound(format!("Product {id}")))?;
    let name = product.name.clone();
    let item = match message {
        Some(message) => CartItem::new(product, quantity).with_message(message),
        None => CartItem::new(product, quantity),
    };
    state.storage.add_to_cart(item);
    writeln!(out, "Added {quantity} × {name}")?;
    Ok(())
}

/// Set the quantity of a cart line; zero removes it.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn set_quantity(state: &AppState, id: &str, quantity: u32, out: &mut impl Write) -> CommandResult {
    state
        .storage
        .update_cart_item_quantity(&ProductId::new(id), quantity);
    writeln!(out, "Cart updated")?;
    Ok(())
}

/// # Errors
///
/// Returns an error if output fails.
pub fn remove(state: &AppState, id: &str, out: &mut impl Write) -> CommandResult {
    state.storage.remove_from_cart(&ProductId::new(id));
    writeln!(out, "Removed {id}")?;
    Ok(())
}

/// # Errors
///
/// Returns an error if output fails.
pub fn clear(state: &AppState, out: &mut impl Write) -> CommandResult {
    state.storage.clear_cart();
    writeln!(out, "Cart cleared")?;
    Ok(())
}

/// Print wishlisted products.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn wishlist(state: &AppState, out: &mut impl Write) -> CommandResult {
    let products = state.storage.wishlist_products();
    if products.is_empty() {
        writeln!(out, "Your wishlist is empty")?;
    }
    for product in &products {
        write_product_line(out, product)?;
    }
    Ok(())
}

/// Add a product to the wishlist, or remove it if already there.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn toggle_wishlist(state: &AppState, id: &str, out: &mut impl Write) -> CommandResult {
    if state.storage.toggle_wishlist(&ProductId::new(id)) {
        writeln!(out, "♥ Added {id} to your wishlist")?;
    } else {
        writeln!(out, "Removed {id} from your wishlist")?;
    }
    Ok(())
}

/// Build a custom bouquet from `flower=count` pairs and add it to the cart.
///
/// # Errors
///
/// Returns `CommandError::InvalidArgument` for an unknown size, flower or
/// malformed pair.
pub fn bouquet(
    state: &AppState,
    size: &str,
    stems: &[String],
    message: Option<&str>,
    out: &mut impl Write,
) -> CommandResult {
    let size = size
        .parse::<BouquetSize>()
        .map_err(|_| CommandError::InvalidArgument { what: "bouquet size", value: size.to_string() })?;
    let mut bouquet = CustomBouquet::new(size);

    for pair in stems {
        let invalid = || CommandError::InvalidArgument { what: "stems", value: pair.clone() };
        let (flower, count) = pair.split_once('=').ok_or_else(invalid)?;
        let flower = flower.parse::<StemFlower>().map_err(|_| invalid())?;
        let count = count.trim().parse::<u32>().map_err(|_| invalid())?;
        let kept = bouquet.set_stems(flower, count);
        if kept < count {
            writeln!(out, "{size} bouquets hold at most {kept} {flower}")?;
        }
    }

    let item = bouquet.to_cart_item(message, Utc::now());
    writeln!(
        out,
        "Added {} bouquet with {} stems for {}",
        size,
        bouquet.total_stems(),
        item.product.price
    )?;
    state.storage.add_to_cart(item);
    Ok(())
}
