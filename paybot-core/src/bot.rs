//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; paybot-telegram implements it over teloxide.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::User;
    use std::sync::Mutex;

    struct RecordingBot {
        sent: Mutex<Vec<(i64, String)>>,
    }

    #[async_trait]
    impl Bot for RecordingBot {
        async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
            self.sent.lock().unwrap().push((chat.id, text.to_string()));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_reply_to_sends_to_message_chat() {
        let bot = RecordingBot {
            sent: Mutex::new(Vec::new()),
        };
        let message = Message::new(
            "1",
            User::new(7, Some("Ada")),
            Chat::private(42),
            "/start",
        );

        bot.reply_to(&message, "hello").await.unwrap();

        let sent = bot.sent.lock().unwrap();
        assert_eq!(*sent, vec![(42, "hello".to_string())]);
    }
}
