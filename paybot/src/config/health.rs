//! Health listener config.

use anyhow::{Context, Result};
use paybot_health::DEFAULT_PORT;

use super::non_empty_var;

/// PORT for the health listener; default 8000.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthConfig {
    pub port: u16,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl HealthConfig {
    /// Fails when PORT is set but is not a valid port number.
    pub fn from_env() -> Result<Self> {
        let port = match non_empty_var("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {}", raw))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { port })
    }
}
