//! paybot binary: `paybot run [--token T] [--health] [--port P]`.

use anyhow::Result;
use clap::Parser;
use paybot::{load_config, run_bot, BaseConfig, Cli, Commands};
use paybot_core::init_tracing;
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            token,
            health,
            port,
        } => {
            init_tracing(&BaseConfig::log_file_from_env())?;

            let config = match load_config(token, port) {
                Ok(config) => config,
                Err(e) => {
                    error!(error = %format!("{:#}", e), "Invalid configuration. Exiting.");
                    return Err(e);
                }
            };

            run_bot(config, health).await
        }
    }
}
