//! Florist chat messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use flora_core::{ChatMessageId, ChatSender};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: ChatMessageId,
    pub sender: ChatSender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// A new message stamped now with a random id.
    #[must_use]
    pub fn now(sender: ChatSender, text: impl Into<String>) -> Self {
        Self {
            id: ChatMessageId::new(uuid::Uuid::new_v4().to_string()),
            sender,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}
