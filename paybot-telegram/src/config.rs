//! Minimal Telegram connectivity config: token and optional API URL.

use anyhow::{Context, Result};
use paybot_core::PaybotError;
use std::env;

/// Minimal Telegram bot config (connectivity only).
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from env: BOT_TOKEN required (empty counts as missing); TELEGRAM_API_URL or TELOXIDE_API_URL optional.
    /// `token` overrides BOT_TOKEN when provided.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = token
            .filter(|t| !t.is_empty())
            .or_else(|| env::var("BOT_TOKEN").ok())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| PaybotError::Config("BOT_TOKEN environment variable is missing".to_string()))?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok()
            .filter(|u| !u.is_empty());
        Ok(Self {
            bot_token,
            telegram_api_url,
        })
    }

    /// Builds config with the given token; API URL None.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
        }
    }

    /// Sets a custom Bot API base URL (local Bot API server, test mock).
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.telegram_api_url = Some(url.into());
        self
    }

    /// Checks that the API URL, if set, is a valid URL.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Creates the teloxide Bot, pointing it at the custom API URL when one is configured.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match &self.telegram_api_url {
            Some(url_str) => {
                let url = reqwest::Url::parse(url_str)
                    .with_context(|| format!("Invalid Telegram API URL: {}", url_str))?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}
