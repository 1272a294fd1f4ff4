//! Error types for the bot core.

use thiserror::Error;

/// Top-level error for paybot (bot transport, handler, config).
#[derive(Error, Debug)]
pub enum PaybotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result type for core operations; uses [`PaybotError`].
pub type Result<T> = std::result::Result<T, PaybotError>;
