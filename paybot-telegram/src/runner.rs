//! Polling runner: converts teloxide messages to core messages, dispatches them through the
//! [`CommandRouter`] and sends the reply back to the originating chat.

use anyhow::Result;
use command_router::CommandRouter;
use paybot_core::{Bot as CoreBot, HandlerResponse, Message as CoreMessage, ToCoreMessage};
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;
use super::bot_adapter::TelegramBotAdapter;

/// Dispatches one message and sends the reply, if any, through `bot`.
/// Returns the router's response so callers and tests can inspect it.
pub async fn handle_message(
    bot: &dyn CoreBot,
    router: &CommandRouter,
    message: &CoreMessage,
) -> paybot_core::Result<HandlerResponse> {
    let response = router.dispatch(message).await?;

    if let HandlerResponse::Reply(text) = &response {
        bot.reply_to(message, text).await?;
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            reply_len = text.len(),
            "Sent reply"
        );
    }

    Ok(response)
}

/// Publishes the router's commands as the bot's command menu. Failure is logged, not fatal.
pub async fn publish_commands(bot: &teloxide::Bot, router: &CommandRouter) {
    let commands: Vec<BotCommand> = router
        .commands()
        .into_iter()
        .map(|(name, description)| BotCommand::new(name, description))
        .collect();
    let count = commands.len();

    match bot.set_my_commands(commands).await {
        Ok(_) => info!(count = count, "Published bot commands"),
        Err(e) => warn!(error = %e, "Failed to publish bot commands"),
    }
}

/// Runs long polling until the process is terminated.
///
/// Calls get_me() first so the router can ignore commands addressed to other bots, publishes the
/// command menu, then hands every text message to [`handle_message`]. Per-message failures are logged.
#[instrument(skip(bot, router))]
pub async fn run_polling(bot: teloxide::Bot, router: CommandRouter) -> Result<()> {
    let router = match bot.get_me().await {
        Ok(me) => match &me.user.username {
            Some(username) => {
                info!(username = %username, "Bot username set before polling");
                router.with_bot_username(username.clone())
            }
            None => router,
        },
        Err(e) => {
            warn!(error = %e, "get_me failed; commands addressed to other bots will not be filtered");
            router
        }
    };

    publish_commands(&bot, &router).await;

    let router = Arc::new(router);
    info!("Launching bot polling...");

    teloxide::repl(bot, move |bot: Bot, msg: teloxide::types::Message| {
        let router = router.clone();

        async move {
            if msg.text().is_none() {
                return respond(());
            }

            let core_msg = TelegramMessageWrapper(&msg).to_core();
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_content = %core_msg.content,
                "Received message"
            );

            let adapter = TelegramBotAdapter::new(bot);
            if let Err(e) = handle_message(&adapter, &router, &core_msg).await {
                error!(error = %e, user_id = core_msg.user.id, chat_id = core_msg.chat.id, "Handling message failed");
            }

            respond(())
        }
    })
    .await;

    info!("Shutting down...");
    Ok(())
}
