//! # paybot
//!
//! Telegram bot with two commands: `/start` (greeting) and `/pay` (Stellar payment info from
//! configuration). Optionally runs an always-OK HTTP listener for platform health checks.
//! Wires paybot-core, command-router, paybot-telegram and paybot-health together.

pub mod cli;
pub mod config;
pub mod handlers;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use config::{BaseConfig, BotConfig, HealthConfig, PaymentConfig};
pub use handlers::{PayHandler, StartHandler};
pub use runner::{build_router, run_bot};
