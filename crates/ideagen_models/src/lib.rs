//! Model backends for ideagen.
//!
//! - [`GeminiClient`]: the Gemini REST client, classifying failures at the
//!   HTTP boundary.
//! - [`RetryingGenerator`]: wraps any [`TextGenerator`](ideagen_interface::TextGenerator)
//!   with bounded, linearly backed-off retries on overload.

pub mod gemini;
mod retry;

pub use gemini::{DEFAULT_BASE_URL, GeminiClient, GeminiConfig, GeminiConfigBuilder};
pub use retry::{RetryConfig, RetryingGenerator, generate_with_retry};
