//! Google Gemini REST client.

use crate::gemini::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use derive_getters::Getters;
use ideagen_core::{DEFAULT_MODEL, GenerateRequest};
use ideagen_error::{GenerationError, GenerationErrorKind, GenerationResult};
use ideagen_interface::TextGenerator;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Public Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Settings for [`GeminiClient`].
#[derive(Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GeminiConfig {
    /// API key sent as `x-goog-api-key`
    api_key: String,
    /// Model identifier
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// REST base URL, without trailing `/models`
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Per-request HTTP timeout; `None` waits as long as the server does
    #[builder(default)]
    timeout: Option<Duration>,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Client for the Gemini `generateContent` endpoint.
///
/// Failures are classified here, where the HTTP status is still known, so
/// callers only ever match on [`GenerationErrorKind`].
///
/// # Example
///
/// ```no_run
/// use ideagen_core::GenerateRequest;
/// use ideagen_interface::TextGenerator;
/// use ideagen_models::GeminiClient;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeminiClient::from_env()?;
/// let request = GenerateRequest::new("Write a haiku about Rust", client.model_name());
/// let text = client.generate(&request).await?;
/// println!("{}", text);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationErrorKind::MissingApiKey`] for an empty key and
    /// [`GenerationErrorKind::Transport`] if the HTTP client cannot be built.
    #[instrument(skip(config), fields(model = %config.model(), base_url = %config.base_url()))]
    pub fn new(config: GeminiConfig) -> GenerationResult<Self> {
        if config.api_key().trim().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::MissingApiKey));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(*timeout);
        }
        let client = builder.build().map_err(|e| {
            GenerationError::new(GenerationErrorKind::Transport(format!(
                "Failed to build HTTP client: {}",
                e
            )))
        })?;

        debug!("Created Gemini client");
        Ok(Self { client, config })
    }

    /// Creates a client for the default model from `GEMINI_API_KEY`.
    pub fn from_env() -> GenerationResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GenerationError::new(GenerationErrorKind::MissingApiKey))?;
        let config = GeminiConfigBuilder::default()
            .api_key(api_key)
            .build()
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::Transport(format!(
                    "Invalid Gemini configuration: {}",
                    e
                )))
            })?;
        Self::new(config)
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url().trim_end_matches('/'),
            model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip(self, request), fields(model = %request.model()))]
    async fn generate(&self, request: &GenerateRequest) -> GenerationResult<String> {
        let url = self.endpoint(request.model());
        debug!(prompt_len = request.prompt().len(), "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.config.api_key())
            .json(&GenerateContentRequest::from_prompt(request.prompt()))
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GenerationError::new(GenerationErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, error = %body, "Gemini API error");
            return Err(GenerationError::new(GenerationErrorKind::from_status(
                status.as_u16(),
                body,
            )));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            GenerationError::new(GenerationErrorKind::ResponseParsing(e.to_string()))
        })?;

        match body.first_text() {
            Some(text) if !text.trim().is_empty() => {
                debug!(candidates = body.candidates.len(), "Received response");
                Ok(text.to_string())
            }
            _ => Err(GenerationError::new(GenerationErrorKind::Empty)),
        }
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}
