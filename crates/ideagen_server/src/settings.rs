//! Server configuration.
//!
//! Values are layered, later sources winning:
//! 1. built-in defaults
//! 2. a TOML file (`ideagen.toml` in the working directory, or an explicit path)
//! 3. `IDEAGEN_*` environment variables, `__` separating nested keys
//!    (`IDEAGEN_RETRY__MAX_ATTEMPTS=5`)
//! 4. `PORT` and `GEMINI_API_KEY`

use derive_getters::Getters;
use ideagen_core::DEFAULT_MODEL;
use ideagen_error::{ConfigError, GenerationError, GenerationErrorKind, GenerationResult};
use ideagen_models::{DEFAULT_BASE_URL, GeminiConfig, GeminiConfigBuilder, RetryConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "ideagen.toml";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_ATTEMPTS: usize = 3;
const DEFAULT_INITIAL_DELAY_MS: u64 = 1000;

/// Retry settings as they appear in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct RetrySettings {
    /// Total attempts per prompt
    #[serde(default = "default_max_attempts")]
    max_attempts: usize,
    /// Base backoff in milliseconds
    #[serde(default = "default_initial_delay_ms")]
    initial_delay_ms: u64,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            initial_delay_ms: default_initial_delay_ms(),
        }
    }
}

impl From<RetrySettings> for RetryConfig {
    fn from(settings: RetrySettings) -> Self {
        RetryConfig::new(
            settings.max_attempts,
            Duration::from_millis(settings.initial_delay_ms),
        )
    }
}

/// Configuration for the HTTP server and its model backend.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    #[builder(default = "default_host()")]
    host: String,
    /// Port to bind
    #[serde(default = "default_port")]
    #[builder(default = "default_port()")]
    port: u16,
    /// Gemini API key
    #[serde(default)]
    #[builder(default)]
    api_key: Option<String>,
    /// Model identifier
    #[serde(default = "default_model")]
    #[builder(default = "default_model()")]
    model: String,
    /// Gemini REST base URL
    #[serde(default = "default_base_url")]
    #[builder(default = "default_base_url()")]
    base_url: String,
    /// Optional HTTP timeout per model call, in seconds
    #[serde(default)]
    #[builder(default)]
    request_timeout_secs: Option<u64>,
    /// Retry settings
    #[serde(default)]
    #[builder(default)]
    retry: RetrySettings,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("retry", &self.retry)
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            request_timeout_secs: None,
            retry: RetrySettings::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment and an optional file.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `path` does not exist or any source
    /// holds a value of the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::from_sources(path, std::env::vars().collect())
    }

    /// Load configuration from a file and an explicit variable map.
    #[instrument(skip(env))]
    pub fn from_sources(
        path: Option<&Path>,
        env: HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let to_config_error = |e: ::config::ConfigError| ConfigError::new(e.to_string());

        let mut builder = ::config::Config::builder()
            .set_default("host", DEFAULT_HOST)
            .and_then(|b| b.set_default("port", i64::from(DEFAULT_PORT)))
            .and_then(|b| b.set_default("model", DEFAULT_MODEL))
            .and_then(|b| b.set_default("base_url", DEFAULT_BASE_URL))
            .map_err(to_config_error)?;

        builder = match path {
            Some(path) => builder.add_source(::config::File::from(path).required(true)),
            None => {
                builder.add_source(::config::File::with_name(DEFAULT_CONFIG_FILE).required(false))
            }
        };

        let prefixed: ::config::Map<String, String> = env
            .iter()
            .filter(|(key, _)| key.starts_with("IDEAGEN_"))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        builder = builder.add_source(
            ::config::Environment::with_prefix("IDEAGEN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(Some(prefixed)),
        );

        if let Some(port) = env.get("PORT") {
            builder = builder
                .set_override("port", port.as_str())
                .map_err(to_config_error)?;
        }
        if let Some(api_key) = env.get("GEMINI_API_KEY") {
            builder = builder
                .set_override("api_key", api_key.as_str())
                .map_err(to_config_error)?;
        }

        let config: Self = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(to_config_error)?;

        debug!(config = ?config, "Configuration loaded");
        Ok(config)
    }

    /// Address to bind, as `host:port`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Replace the port.
    pub fn with_port(self, port: u16) -> Self {
        Self { port, ..self }
    }

    /// Replace the host.
    pub fn with_host(self, host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..self
        }
    }

    /// Retry policy for model calls.
    pub fn retry_config(&self) -> RetryConfig {
        self.retry.into()
    }

    /// Settings for the Gemini client.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationErrorKind::MissingApiKey`] when no key is configured.
    pub fn gemini_config(&self) -> GenerationResult<GeminiConfig> {
        let api_key = self
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::MissingApiKey))?;

        GeminiConfigBuilder::default()
            .api_key(api_key)
            .model(self.model.clone())
            .base_url(self.base_url.clone())
            .timeout(self.request_timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::Transport(format!(
                    "Invalid Gemini configuration: {}",
                    e
                )))
            })
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

fn default_initial_delay_ms() -> u64 {
    DEFAULT_INITIAL_DELAY_MS
}
