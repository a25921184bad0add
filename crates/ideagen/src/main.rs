//! Ideagen - turn a short idea into post-ready content.
//!
//! `ideagen serve` runs the HTTP service; `ideagen generate` answers a single
//! idea on stdout.

mod cli;

use clap::Parser;
use cli::{Cli, Commands, handle_generate_command, handle_serve_command};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    ideagen_core::init_tracing(cli.log_format()).map_err(anyhow::Error::msg)?;

    match cli.command {
        Commands::Serve { config, host, port } => {
            info!("Starting ideagen server");
            handle_serve_command(config, host, port).await?;
        }
        Commands::Generate {
            idea,
            capability,
            config,
        } => {
            handle_generate_command(idea, capability, config).await?;
        }
    }

    Ok(())
}
