//! Server command handler.

use ideagen_error::IdeagenResult;
use ideagen_server::{ContentService, ServerConfig, gemini_generator, serve};
use std::path::PathBuf;
use tracing::{error, info};

/// Handle the `serve` command
#[tracing::instrument(skip_all)]
pub async fn handle_serve_command(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> IdeagenResult<()> {
    let mut config = ServerConfig::load(config_path.as_deref())?;
    if let Some(host) = host {
        config = config.with_host(host);
    }
    if let Some(port) = port {
        config = config.with_port(port);
    }
    info!(
        model = %config.model(),
        address = %config.bind_address(),
        max_attempts = config.retry_config().attempts(),
        "Configuration loaded"
    );

    let service = ContentService::new(gemini_generator(&config)?);
    serve(&config.bind_address(), service, shutdown_signal()).await?;

    Ok(())
}

/// Resolves on Ctrl+C.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down server..."),
        Err(e) => {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    }
}
