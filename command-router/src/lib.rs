//! # Command router
//!
//! Explicit mapping from command name to [`Handler`]. Each incoming message is parsed as a
//! slash command; the matching handler produces the reply, everything else is ignored.

mod command;

pub use command::Command;

use paybot_core::{Handler, HandlerResponse, Message, Result};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Command name → handler table. Cheap to clone; handlers are shared.
#[derive(Clone, Default)]
pub struct CommandRouter {
    routes: BTreeMap<String, Arc<dyn Handler>>,
    bot_username: Option<String>,
}

impl CommandRouter {
    /// Creates an empty router (no commands).
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `/name`. Names are matched case-insensitively; re-registering a name replaces the previous handler.
    pub fn route(mut self, name: &str, handler: Arc<dyn Handler>) -> Self {
        let name = name.trim_start_matches('/').to_lowercase();
        self.routes.insert(name, handler);
        self
    }

    /// Sets the bot's own username so commands addressed to other bots (`/pay@otherbot`) are ignored.
    pub fn with_bot_username(mut self, username: impl Into<String>) -> Self {
        self.bot_username = Some(username.into());
        self
    }

    /// Registered command names (sorted) with their handler descriptions.
    pub fn commands(&self) -> Vec<(String, String)> {
        self.routes
            .iter()
            .map(|(name, handler)| (name.clone(), handler.description().to_string()))
            .collect()
    }

    /// Parses the message text and runs the matching handler. Non-commands, unknown commands and
    /// commands addressed to another bot return [`HandlerResponse::Ignore`].
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    pub async fn dispatch(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(command) = Command::parse(&message.content) else {
            debug!("step: not a command, ignored");
            return Ok(HandlerResponse::Ignore);
        };

        if !command.is_addressed_to(self.bot_username.as_deref()) {
            debug!(
                command = %command.name,
                mention = ?command.mention,
                "step: command addressed to another bot, ignored"
            );
            return Ok(HandlerResponse::Ignore);
        }

        let Some(handler) = self.routes.get(&command.name) else {
            debug!(command = %command.name, "step: unknown command, ignored");
            return Ok(HandlerResponse::Ignore);
        };

        info!(command = %command.name, args = %command.args, "step: command dispatched");
        let response = handler.handle(message).await?;
        info!(
            command = %command.name,
            reply_len = ?response.reply_text().map(str::len),
            "step: command handled"
        );

        Ok(response)
    }
}

// Integration tests live in tests/command_router_test.rs
