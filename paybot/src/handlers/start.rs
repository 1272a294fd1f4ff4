//! `/start`: greet the sender by first name.

use async_trait::async_trait;
use paybot_core::{Handler, HandlerResponse, Message, Result};

/// Used when the sender has no (or a blank) first name.
pub const GREETING_PLACEHOLDER: &str = "there";

/// Greeting text for `name`, or for the placeholder when `None`.
pub fn greeting(name: Option<&str>) -> String {
    let name = name.unwrap_or(GREETING_PLACEHOLDER);
    format!("Hey {}! 👋 I’m alive, created by @amadhurkant", name)
}

/// Replies with [`greeting`] for the sender's first name.
#[derive(Clone, Default)]
pub struct StartHandler;

impl StartHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for StartHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        Ok(HandlerResponse::Reply(greeting(
            message.user.display_first_name(),
        )))
    }

    fn description(&self) -> &str {
        "Say hello"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paybot_core::{Chat, User};

    fn message_from(first_name: Option<&str>) -> Message {
        Message::new("1", User::new(1, first_name), Chat::private(1), "/start")
    }

    #[test]
    fn test_greeting_uses_name_verbatim() {
        for name in ["Ada", "Jean-Luc", "Пётр", "O'Brien", "名前"] {
            let text = greeting(Some(name));
            assert!(text.contains(name), "{}", text);
            assert_eq!(text, format!("Hey {}! 👋 I’m alive, created by @amadhurkant", name));
        }
    }

    #[test]
    fn test_greeting_placeholder() {
        assert_eq!(greeting(None), "Hey there! 👋 I’m alive, created by @amadhurkant");
    }

    #[tokio::test]
    async fn test_handler_falls_back_for_missing_or_empty_name() {
        let handler = StartHandler::new();
        let expected = HandlerResponse::Reply(greeting(None));

        assert_eq!(handler.handle(&message_from(None)).await.unwrap(), expected);
        assert_eq!(handler.handle(&message_from(Some(""))).await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_handler_keeps_whitespace_name_verbatim() {
        let handler = StartHandler::new();
        let response = handler.handle(&message_from(Some(" "))).await.unwrap();

        assert_eq!(
            response,
            HandlerResponse::Reply("Hey  ! 👋 I’m alive, created by @amadhurkant".to_string())
        );
    }

    #[tokio::test]
    async fn test_handler_greets_sender() {
        let handler = StartHandler::new();
        let response = handler.handle(&message_from(Some("Ada"))).await.unwrap();

        assert_eq!(response, HandlerResponse::Reply(greeting(Some("Ada"))));
    }
}
