//! Integration tests for the Telegram runner: reply delivery through a mocked Bot API
//! (mockito stands in for api.telegram.org) and command-menu publishing.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use command_router::CommandRouter;
use mockito::Matcher;
use paybot_core::{Bot, Chat, Handler, HandlerResponse, Message, User};
use paybot_telegram::{handle_message, publish_commands, TelegramBotAdapter, TelegramConfig};
use serde_json::json;

/// Teloxide request path format is `/bot<token>/<Method>`.
const TEST_BOT_TOKEN: &str = "test_bot_token_12345";

/// Matches `/bot<token>/<method>` regardless of method-name casing (teloxide sends `SendMessage`).
fn method_path(method: &str) -> Matcher {
    Matcher::Regex(format!("(?i)^/bot{}/{}$", TEST_BOT_TOKEN, method))
}

struct EchoNameHandler;

#[async_trait]
impl Handler for EchoNameHandler {
    async fn handle(&self, message: &Message) -> paybot_core::Result<HandlerResponse> {
        let name = message.user.display_first_name().unwrap_or("there");
        Ok(HandlerResponse::Reply(format!("Hey {}!", name)))
    }

    fn description(&self) -> &str {
        "Say hello"
    }
}

/// Records sent messages instead of calling Telegram.
#[derive(Default)]
struct RecordingBot {
    sent: Mutex<Vec<(i64, String)>>,
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> paybot_core::Result<()> {
        self.sent.lock().unwrap().push((chat.id, text.to_string()));
        Ok(())
    }
}

fn router() -> CommandRouter {
    CommandRouter::new().route("start", Arc::new(EchoNameHandler))
}

fn message(content: &str) -> Message {
    Message::new("1", User::new(123, Some("Ada")), Chat::private(456), content)
}

fn mock_bot(server: &mockito::ServerGuard) -> teloxide::Bot {
    TelegramConfig::with_token(TEST_BOT_TOKEN.to_string())
        .with_api_url(server.url())
        .build_bot()
        .expect("build_bot with mock URL")
}

/// **Test: a reply is sent to the originating chat; ignored messages send nothing.**
#[tokio::test]
async fn test_handle_message_sends_reply_only_for_commands() {
    let bot = RecordingBot::default();
    let router = router();

    let reply = handle_message(&bot, &router, &message("/start")).await.unwrap();
    let ignored = handle_message(&bot, &router, &message("just chatting")).await.unwrap();

    assert_eq!(reply, HandlerResponse::Reply("Hey Ada!".to_string()));
    assert_eq!(ignored, HandlerResponse::Ignore);
    assert_eq!(
        *bot.sent.lock().unwrap(),
        vec![(456, "Hey Ada!".to_string())]
    );
}

/// **Test: TelegramBotAdapter posts the reply to `/bot<token>/SendMessage` with chat id and text.**
#[tokio::test]
async fn test_handle_message_via_telegram_api() {
    let mut server = mockito::Server::new_async().await;
    let mock_send = server
        .mock("POST", method_path("sendmessage"))
        .match_body(Matcher::PartialJson(json!({
            "chat_id": 456,
            "text": "Hey Ada!"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
            "ok": true,
            "result": {
                "message_id": 1,
                "date": 1706529600,
                "chat": {"id": 456, "type": "private", "first_name": "Ada"},
                "from": {"id": 123456789, "is_bot": true, "first_name": "PayBot", "username": "paybot"},
                "text": "Hey Ada!"
            }
        }"#,
        )
        .expect(1)
        .create_async()
        .await;

    let adapter = TelegramBotAdapter::new(mock_bot(&server));
    let response = handle_message(&adapter, &router(), &message("/start"))
        .await
        .unwrap();

    assert_eq!(response, HandlerResponse::Reply("Hey Ada!".to_string()));
    mock_send.assert_async().await;
}

/// **Test: a Telegram API failure surfaces as a Bot error instead of panicking.**
#[tokio::test]
async fn test_handle_message_reports_send_failure() {
    let mut server = mockito::Server::new_async().await;
    let mock_send = server
        .mock("POST", method_path("sendmessage"))
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": false, "error_code": 400, "description": "Bad Request: chat not found"}"#)
        .expect(1)
        .create_async()
        .await;

    let adapter = TelegramBotAdapter::new(mock_bot(&server));
    let result = handle_message(&adapter, &router(), &message("/start")).await;

    mock_send.assert_async().await;
    match result {
        Err(paybot_core::PaybotError::Bot(reason)) => {
            assert!(reason.contains("chat not found"), "reason: {}", reason)
        }
        other => panic!("expected Bot error, got {:?}", other),
    }
}

/// **Test: publish_commands sends the registered commands to `SetMyCommands`.**
#[tokio::test]
async fn test_publish_commands() {
    let mut server = mockito::Server::new_async().await;
    let mock_set = server
        .mock("POST", method_path("setmycommands"))
        .match_body(Matcher::PartialJson(json!({
            "commands": [{"command": "start", "description": "Say hello"}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": true, "result": true}"#)
        .expect(1)
        .create_async()
        .await;

    publish_commands(&mock_bot(&server), &router()).await;

    mock_set.assert_async().await;
}
