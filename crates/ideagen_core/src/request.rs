//! Request type for a single model call.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Model every capability is generated with unless configured otherwise.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// One prompt addressed to one model.
///
/// # Examples
///
/// ```
/// use ideagen_core::{GenerateRequest, GenerateRequestBuilder};
///
/// let request = GenerateRequestBuilder::default()
///     .prompt("Write a title")
///     .build()
///     .unwrap();
/// assert_eq!(request.model(), "gemini-2.5-flash");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// Fully templated prompt text
    prompt: String,
    /// Model identifier
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
}

impl GenerateRequest {
    /// Build a request for `prompt` against `model`.
    pub fn new(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
        }
    }
}
