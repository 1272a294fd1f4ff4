//! Base config: Telegram Bot connection and logging. Loaded from env.

use anyhow::Result;
use paybot_telegram::TelegramConfig;

use super::non_empty_var;

/// Default log file when LOG_FILE is unset.
pub const DEFAULT_LOG_FILE: &str = "logs/paybot.log";

/// Base config: Telegram-related and logging only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// BOT_TOKEN and TELEGRAM_API_URL / TELOXIDE_API_URL
    pub telegram: TelegramConfig,
    /// Log file path
    pub log_file: String,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided; fails when no token is available.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        Ok(Self {
            telegram,
            log_file: Self::log_file_from_env(),
        })
    }

    /// LOG_FILE or the default. Available before the rest of the config so startup errors can be logged.
    pub fn log_file_from_env() -> String {
        non_empty_var("LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
    }

    /// Validate config (telegram_api_url must be a valid URL if set).
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()
    }
}
