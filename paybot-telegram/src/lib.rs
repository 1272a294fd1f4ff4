//! # paybot-telegram
//!
//! Telegram transport layer: adapters, [`paybot_core::Bot`] implementation, minimal config, polling runner.
//! Handles only Telegram connectivity and command dispatch; reply texts live in the paybot crate.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::{handle_message, publish_commands, run_polling};
