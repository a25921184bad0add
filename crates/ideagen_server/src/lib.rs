//! HTTP service turning a short idea into a title, description, keywords and
//! hashtags.
//!
//! Routes:
//! - `POST /title`, `/description`, `/keywords`, `/tags`: one field each
//! - `POST /generate`: all four, requested concurrently
//! - `GET /health`
//!
//! Every `POST` takes `{"idea": "..."}`. A missing or empty idea is a 400;
//! a failed model call is a 503 with the upstream message.

mod api;
mod error;
mod service;
mod settings;

pub use api::{ApiState, create_router};
pub use error::{ApiError, UNEXPECTED_ERROR, UNKNOWN_ERROR, shape_error_message};
pub use service::ContentService;
pub use settings::{DEFAULT_CONFIG_FILE, RetrySettings, ServerConfig, ServerConfigBuilder};

use ideagen_error::{GenerationResult, ServerError, ServerErrorKind};
use ideagen_interface::TextGenerator;
use ideagen_models::{GeminiClient, RetryingGenerator};
use std::future::Future;
use tracing::{info, instrument};

/// Build the production generator: a Gemini client behind the configured
/// retry policy.
///
/// # Errors
///
/// Fails when no API key is configured or the HTTP client cannot be built.
pub fn gemini_generator(config: &ServerConfig) -> GenerationResult<RetryingGenerator<GeminiClient>> {
    let client = GeminiClient::new(config.gemini_config()?)?;
    Ok(RetryingGenerator::new(client, config.retry_config()))
}

/// Bind `address` and serve until `shutdown` resolves.
///
/// # Errors
///
/// Returns [`ServerErrorKind::Bind`] if the socket cannot be bound and
/// [`ServerErrorKind::Serve`] if the accept loop fails.
#[instrument(skip(service, shutdown))]
pub async fn serve<D, F>(
    address: &str,
    service: ContentService<D>,
    shutdown: F,
) -> Result<(), ServerError>
where
    D: TextGenerator + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|e| {
            ServerError::new(ServerErrorKind::Bind {
                address: address.to_string(),
                message: e.to_string(),
            })
        })?;

    let local = listener
        .local_addr()
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;
    info!("Server running on http://{}", local);

    axum::serve(listener, create_router(service))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    info!("Server stopped");
    Ok(())
}
