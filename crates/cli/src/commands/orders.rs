//! Checkout and order tracking commands.

use std::io::Write;

use chrono::{NaiveDate, NaiveTime};
use flora_core::{OrderId, OrderStatus};
use flora_storefront::models::DeliverySlot;
use flora_storefront::services::{CardDetails, CheckoutDetails, CheckoutService};
use flora_storefront::state::AppState;
use secrecy::SecretString;

use super::{CommandError, CommandResult};

/// Values collected by `flora checkout`.
///
/// Blank billing fields fall back to the signed-in profile.
#[derive(Debug, Default)]
pub struct CheckoutArgs {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub address: String,
    pub postal_code: Option<String>,
    /// `YYYY-MM-DD`
    pub date: Option<String>,
    /// `HH:MM`
    pub time: Option<String>,
    pub card_message: Option<String>,
    pub card_name: String,
    pub card_number: String,
    pub expiration_date: String,
    pub security_code: String,
    pub save_card: bool,
}

impl CheckoutArgs {
    fn delivery(&self) -> Result<Option<DeliverySlot>, CommandError> {
        let Some(date) = &self.date else {
            return Ok(None);
        };
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
            CommandError::InvalidArgument { what: "delivery date", value: date.clone() }
        })?;
        let time = match &self.time {
            Some(time) => NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| {
                CommandError::InvalidArgument { what: "delivery time", value: time.clone() }
            })?,
            None => DeliverySlot::DEFAULT_TIME,
        };
        Ok(Some(DeliverySlot { date, time }))
    }
}

/// Place an order for everything in the cart.
///
/// # Errors
///
/// Returns an error for an empty cart, missing billing fields, a malformed
/// card or an invalid delivery slot.
pub fn checkout(state: &AppState, args: CheckoutArgs, out: &mut impl Write) -> CommandResult {
    let mut details = CheckoutDetails::prefilled(state.storage.user().as_ref());
    details.delivery = args.delivery()?;

    let billing = &mut details.billing;
    let overrides = [
        (&mut billing.full_name, args.full_name),
        (&mut billing.email, args.email),
        (&mut billing.phone, args.phone),
        (&mut billing.country, args.country),
        (&mut billing.state, args.state),
        (&mut billing.postal_code, args.postal_code),
    ];
    for (field, value) in overrides {
        if let Some(value) = value {
            *field = value;
        }
    }
    billing.address = args.address;
    details.card_message = args.card_message;

    let card = CardDetails {
        method: String::new(),
        holder_name: args.card_name,
        number: SecretString::from(args.card_number),
        expiration_date: args.expiration_date,
        security_code: SecretString::from(args.security_code),
        save_card: args.save_card,
    };

    let order = CheckoutService::new(&state.storage).place_order(details, &card)?;
    writeln!(out, "Order #{} confirmed", order.short_id())?;
    writeln!(out, "Total:    {}", order.total)?;
    writeln!(out, "Delivery: {} at {}", order.delivery_date, order.delivery_time.format("%H:%M"))?;
    writeln!(out, "Paid with {} {}", order.payment.method, order.payment.masked_card())?;
    Ok(())
}

/// List placed orders, newest first.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn list(state: &AppState, out: &mut impl Write) -> CommandResult {
    let orders = state.storage.orders();
    if orders.is_empty() {
        writeln!(out, "No orders yet")?;
    }
    for order in &orders {
        writeln!(
            out,
            "{}  {}  {:>3} items  {:>8}  {}",
            order.id,
            order.created_at.format("%Y-%m-%d"),
            order.item_count(),
            order.total,
            order.status.label()
        )?;
    }
    Ok(())
}

/// Show an order and its delivery progress.
///
/// # Errors
///
/// Returns `CommandError::NotFound` for an unknown order.
pub fn show(state: &AppState, id: &str, out: &mut impl Write) -> CommandResult {
    let id = OrderId::new(id);
    let order = state
        .storage
        .order(&id)
        .ok_or_else(|| CommandError::NotFound(format!("Order {id}")))?;

    writeln!(out, "Order #{}  {}", order.short_id(), order.status.label())?;
    writeln!(out, "{}", order.status.description())?;
    writeln!(out)?;

    let current = order.status.tracking_step();
    for (index, step) in OrderStatus::TRACKING_STEPS.iter().enumerate() {
        let mark = match current {
            Some(done) if index <= done => "●",
            _ => "○",
        };
        writeln!(out, "  {mark} {}", step.label())?;
    }
    writeln!(out)?;

    for item in &order.items {
        writeln!(
            out,
            "  {} {} × {}  {}",
            item.product.image,
            item.quantity,
            item.product.name,
            item.line_total()
        )?;
    }
    if let Some(message) = &order.card_message {
        writeln!(out, "  ✉ {message}")?;
    }
    writeln!(out)?;
    writeln!(out, "Subtotal: {}", order.subtotal)?;
    writeln!(out, "Delivery: {}", order.delivery_fee)?;
    writeln!(out, "Total:    {}", order.total)?;
    writeln!(
        out,
        "Delivery on {} at {} to {}",
        order.delivery_date,
        order.delivery_time.format("%H:%M"),
        order.billing.address
    )?;
    Ok(())
}

/// Move an order to another status, as the shop would.
///
/// # Errors
///
/// Returns `CommandError::InvalidArgument` for an unknown status and
/// `CommandError::NotFound` for an unknown order.
pub fn set_status(state: &AppState, id: &str, status: &str, out: &mut impl Write) -> CommandResult {
    let status = status
        .parse::<OrderStatus>()
        .map_err(|_| CommandError::InvalidArgument { what: "order status", value: status.to_string() })?;
    if !state.storage.update_order_status(&OrderId::new(id), status) {
        return Err(CommandError::NotFound(format!("Order {id}")));
    }
    writeln!(out, "Order {id} is now {}", status.label())?;
    Ok(())
}
