//! Simulated florist chat.
//!
//! A conversation is a chat history in storage, either the general one or
//! one scoped to an order. Every customer message schedules a canned florist
//! reply after a delay. Pending replies are tasks in a [`JoinSet`] owned by the
//! conversation, so closing or dropping the conversation aborts them and no
//! reply lands after it is gone.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinSet;
use tracing::{debug, instrument};

use flora_core::{ChatSender, OrderId};

use crate::error::{Result, StorefrontError};
use crate::models::ChatMessage;
use crate::storage::{Storage, keys};

/// Greeting written into an empty conversation.
pub const WELCOME_TEXT: &str = "Hello! How can I help you with your order?";

/// The florist's automatic answer to every message.
pub const REPLY_TEXT: &str =
    "Thank you for your message! I will check the details and get back to you shortly.";

/// An open conversation with the florist.
pub struct FloristChat {
    storage: Storage,
    key: String,
    reply_delay: Duration,
    runtime: Handle,
    pending: JoinSet<()>,
}

impl std::fmt::Debug for FloristChat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FloristChat")
            .field("key", &self.key)
            .field("reply_delay", &self.reply_delay)
            .field("pending", &self.pending.len())
            .finish_non_exhaustive()
    }
}

impl FloristChat {
    /// Open the conversation for `order_id`, or the general one.
    ///
    /// A missing, empty or unreadable history starts over with a welcome
    /// message from the florist.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::NoRuntime` when called outside a Tokio
    /// runtime, since replies are scheduled on it.
    #[instrument(skip(storage))]
    pub fn open(
        storage: Storage,
        order_id: Option<OrderId>,
        reply_delay: Duration,
    ) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|e| StorefrontError::NoRuntime(e.to_string()))?;
        let key = keys::chat_history(order_id.as_ref());

        if storage.start_chat_history(&key, ChatMessage::now(ChatSender::Florist, WELCOME_TEXT)) {
            debug!(%key, "Starting new conversation");
        }

        Ok(Self {
            storage,
            key,
            reply_delay,
            runtime,
            pending: JoinSet::new(),
        })
    }

    /// Storage key of this conversation.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The conversation so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.storage.chat_history(&self.key)
    }

    /// Send a customer message and schedule the florist's reply.
    ///
    /// Blank messages are ignored and return `None`.
    pub fn send(&mut self, text: &str) -> Option<ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        // Drop handles of replies that already landed.
        while self.pending.try_join_next().is_some() {}

        let message = ChatMessage::now(ChatSender::User, text);
        self.storage.append_chat_message(&self.key, message.clone());

        let storage = self.storage.clone();
        let key = self.key.clone();
        let delay = self.reply_delay;
        self.pending.spawn_on(
            async move {
                tokio::time::sleep(delay).await;
                storage.append_chat_message(&key, ChatMessage::now(ChatSender::Florist, REPLY_TEXT));
                debug!(%key, "Florist replied");
            },
            &self.runtime,
        );

        Some(message)
    }

    /// Replies scheduled but not yet written.
    #[must_use]
    pub fn pending_replies(&self) -> usize {
        self.pending.len()
    }

    /// Wait until every scheduled reply has been written.
    pub async fn wait_for_replies(&mut self) {
        while self.pending.join_next().await.is_some() {}
    }

    /// Close the conversation, discarding replies that have not landed yet.
    pub fn close(mut self) {
        let aborted = self.pending.len();
        self.pending.abort_all();
        if aborted > 0 {
            debug!(key = %self.key, aborted, "Conversation closed with pending replies");
        }
    }
}
