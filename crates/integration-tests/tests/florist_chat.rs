//! Florist reply scheduling.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use flora_core::{ChatSender, OrderId};
use flora_integration_tests::TestContext;
use flora_storefront::services::FloristChat;
use flora_storefront::services::chat::REPLY_TEXT;

const DELAY: Duration = Duration::from_millis(1000);

#[tokio::test(start_paused = true)]
async fn test_reply_lands_after_delay_and_persists() {
    let ctx = TestContext::new().unwrap();
    let order = OrderId::new("order-1718000123456");
    let mut chat = FloristChat::open(ctx.storage.clone(), Some(order.clone()), DELAY).unwrap();

    chat.send("Could you add a ribbon?");
    tokio::time::sleep(DELAY / 2).await;
    assert_eq!(chat.messages().len(), 2);

    chat.wait_for_replies().await;
    drop(chat);

    let reopened = FloristChat::open(ctx.reopen().unwrap(), Some(order), DELAY).unwrap();
    let messages = reopened.messages();
    let senders: Vec<ChatSender> = messages.iter().map(|m| m.sender).collect();
    assert_eq!(
        senders,
        [ChatSender::Florist, ChatSender::User, ChatSender::Florist]
    );
    assert_eq!(messages[2].text, REPLY_TEXT);
}

#[tokio::test(start_paused = true)]
async fn test_each_message_gets_a_reply() {
    let ctx = TestContext::new().unwrap();
    let mut chat = FloristChat::open(ctx.storage.clone(), None, DELAY).unwrap();
    chat.send("One");
    chat.send("Two");
    assert_eq!(chat.pending_replies(), 2);

    chat.wait_for_replies().await;
    let replies = chat
        .messages()
        .iter()
        .filter(|m| m.text == REPLY_TEXT)
        .count();
    assert_eq!(replies, 2);
}

#[tokio::test(start_paused = true)]
async fn test_torn_down_conversation_never_replies() {
    let ctx = TestContext::new().unwrap();
    let mut chat = FloristChat::open(ctx.storage.clone(), None, DELAY).unwrap();
    let key = chat.key().to_string();
    chat.send("Are you open today?");
    drop(chat);

    tokio::time::sleep(DELAY * 3).await;
    let history = ctx.storage.chat_history(&key);
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].sender, ChatSender::User);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_replies_survive_on_disk() {
    let ctx = TestContext::new().unwrap();
    let mut chat = FloristChat::open(ctx.storage.clone(), None, Duration::from_millis(10)).unwrap();
    for n in 0..20 {
        chat.send(&format!("Message {n}"));
    }
    chat.wait_for_replies().await;
    let key = chat.key().to_string();
    chat.close();

    let history = ctx.reopen().unwrap().chat_history(&key);
    let replies = history.iter().filter(|m| m.text == REPLY_TEXT).count();
    assert_eq!(history.len(), 41);
    assert_eq!(replies, 20);
}
