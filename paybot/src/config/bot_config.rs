//! BotConfig: BaseConfig + PaymentConfig + HealthConfig. Use load() for env-based loading.

use anyhow::Result;
use paybot_telegram::TelegramConfig;

use super::{BaseConfig, HealthConfig, PaymentConfig};

/// Bot config, built once at startup and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub payment: PaymentConfig,
    pub health: HealthConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let payment = PaymentConfig::from_env();
        let health = HealthConfig::from_env()?;
        Ok(Self {
            base,
            payment,
            health,
        })
    }

    /// Overrides the health listener port (e.g. from `--port`).
    pub fn with_health_port(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.health.port = port;
        }
        self
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()
    }

    pub fn payment(&self) -> &PaymentConfig {
        &self.payment
    }
    pub fn telegram(&self) -> &TelegramConfig {
        &self.base.telegram
    }
    pub fn bot_token(&self) -> &str {
        &self.base.telegram.bot_token
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram.telegram_api_url.as_deref()
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn health_port(&self) -> u16 {
        self.health.port
    }
}
