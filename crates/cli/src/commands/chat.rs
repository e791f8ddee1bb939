//! Florist chat command.

use std::io::Write;

use flora_core::{ChatSender, OrderId};
use flora_storefront::state::AppState;
use tracing::debug;

use super::CommandResult;

/// Send `messages` to the florist, wait for the replies, then print the
/// conversation.
///
/// # Errors
///
/// Returns an error outside a Tokio runtime or if output fails.
pub async fn chat(
    state: &AppState,
    order_id: Option<&str>,
    messages: &[String],
    out: &mut impl Write,
) -> CommandResult {
    let mut chat = state.florist_chat(order_id.map(OrderId::new))?;

    if let Some(id) = order_id {
        writeln!(out, "Discussing order {id}")?;
    }

    for text in messages {
        chat.send(text);
    }
    debug!(pending = chat.pending_replies(), "Waiting for florist");
    chat.wait_for_replies().await;

    for message in chat.messages() {
        let who = match message.sender {
            ChatSender::User => "You",
            ChatSender::Florist => "Florist",
        };
        writeln!(
            out,
            "[{}] {who}: {}",
            message.timestamp.format("%H:%M"),
            message.text
        )?;
    }
    chat.close();
    Ok(())
}
