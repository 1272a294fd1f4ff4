//! Bot configuration: BaseConfig (Telegram + log) + PaymentConfig (Stellar address/memo) + HealthConfig (port).
//! Read from the environment once at startup.

mod base;
mod bot_config;
mod health;
mod payment;


pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use health::HealthConfig;
pub use payment::PaymentConfig;

/// Reads an optional env var; unset and empty values are both `None`. Whitespace is kept as given.
pub(crate) fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
