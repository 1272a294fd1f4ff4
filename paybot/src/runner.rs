//! Startup wiring: command table, optional health listener, Telegram polling.

use anyhow::{Context, Result};
use command_router::CommandRouter;
use paybot_health::spawn_health_server;
use paybot_telegram::run_polling;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::config::BotConfig;
use crate::handlers::{PayHandler, StartHandler};

/// Command table: `/start` → [`StartHandler`], `/pay` → [`PayHandler`] with the startup payment config.
pub fn build_router(config: &BotConfig) -> CommandRouter {
    let payment = Arc::new(config.payment().clone());
    CommandRouter::new()
        .route("start", Arc::new(StartHandler::new()))
        .route("pay", Arc::new(PayHandler::new(payment)))
}

/// Main entry after config is loaded and tracing is initialized: validate config, build the
/// command table, optionally spawn the health listener, then poll Telegram until terminated.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig, with_health: bool) -> Result<()> {
    config.validate()?;

    info!(
        payment_configured = config.payment().address.is_some(),
        memo_configured = config.payment().memo().is_some(),
        health = with_health,
        "Initializing bot"
    );

    let router = build_router(&config);
    let bot = config
        .telegram()
        .build_bot()
        .context("Failed to create Telegram bot")?;

    if with_health {
        // Detached: errors are logged inside the task and never reach polling.
        let _health = spawn_health_server(config.health_port());
    }

    info!("Bot started (polling).");
    run_polling(bot, router).await
}
