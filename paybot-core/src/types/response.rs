//! Handler result type.

/// Result of handling a message. `Reply(text)` carries the text to send back to the chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Nothing to send (not a command, unknown command, or addressed to another bot).
    Ignore,
    /// Send this text back to the originating chat.
    Reply(String),
}

impl HandlerResponse {
    /// Reply text, if any.
    pub fn reply_text(&self) -> Option<&str> {
        match self {
            HandlerResponse::Reply(text) => Some(text),
            HandlerResponse::Ignore => None,
        }
    }
}
