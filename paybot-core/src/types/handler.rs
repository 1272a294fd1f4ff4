//! Handler trait and transport conversion traits.

use async_trait::async_trait;

use super::{message::Message, response::HandlerResponse, user::User};

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Handles one incoming command and produces the reply text.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Processes the message. Returns `Reply` with the text to send, or `Ignore`.
    async fn handle(&self, message: &Message) -> crate::error::Result<HandlerResponse>;

    /// One-line description shown in the chat client's command menu.
    fn description(&self) -> &str {
        ""
    }
}
