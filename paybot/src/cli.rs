//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser, Debug)]
#[command(name = "paybot")]
#[command(about = "Telegram bot answering /start and /pay", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        /// Also serve the always-OK health endpoint for platform liveness checks.
        #[arg(long)]
        health: bool,
        /// Health endpoint port (overrides PORT; default 8000).
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Load BotConfig from environment. `token` overrides BOT_TOKEN and `port` overrides PORT.
pub fn load_config(token: Option<String>, port: Option<u16>) -> Result<BotConfig> {
    Ok(BotConfig::load(token)?.with_health_port(port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_defaults() {
        let cli = Cli::try_parse_from(["paybot", "run"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Run {
                token: None,
                health: false,
                port: None
            }
        );
    }

    #[test]
    fn test_parse_run_with_health() {
        let cli =
            Cli::try_parse_from(["paybot", "run", "--token", "abc", "--health", "-p", "9000"])
                .unwrap();
        assert_eq!(
            cli.command,
            Commands::Run {
                token: Some("abc".to_string()),
                health: true,
                port: Some(9000)
            }
        );
    }

    #[test]
    fn test_parse_rejects_bad_port() {
        assert!(Cli::try_parse_from(["paybot", "run", "--port", "99999"]).is_err());
    }
}
