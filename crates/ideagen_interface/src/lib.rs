//! Trait definitions for ideagen model backends.
//!
//! [`TextGenerator`] is the seam between request handling and the model. The
//! Gemini client implements it, the retry wrapper implements it by delegating,
//! and tests implement it with scripted responses.

use async_trait::async_trait;
use ideagen_core::GenerateRequest;
use ideagen_error::GenerationResult;
use std::sync::Arc;

/// A backend that turns one prompt into raw model text.
///
/// Implementations must never return empty or whitespace-only text as a
/// success; that case is reported as
/// [`GenerationErrorKind::Empty`](ideagen_error::GenerationErrorKind::Empty).
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Submit the prompt and return the first candidate's text.
    async fn generate(&self, request: &GenerateRequest) -> GenerationResult<String>;

    /// Model used when a caller does not pick one.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T> TextGenerator for Arc<T>
where
    T: TextGenerator + ?Sized,
{
    async fn generate(&self, request: &GenerateRequest) -> GenerationResult<String> {
        (**self).generate(request).await
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[cfg(feature = "testing")]
pub mod testing;
