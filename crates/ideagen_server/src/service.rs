//! Prompt, generate, normalize.

use ideagen_core::{
    Capability, ContentBundle, GenerateRequest, Idea, NormalizedOutput, PromptStyle, normalize,
};
use ideagen_error::GenerationResult;
use ideagen_interface::TextGenerator;
use tracing::{debug, instrument};

/// Turns ideas into normalized content using a [`TextGenerator`].
///
/// The generator is expected to carry its own retry policy
/// (see `ideagen_models::RetryingGenerator`); the service calls it once per
/// prompt.
#[derive(Debug, Clone)]
pub struct ContentService<D> {
    generator: D,
}

impl<D: TextGenerator> ContentService<D> {
    /// Creates a service around `generator`.
    pub fn new(generator: D) -> Self {
        Self { generator }
    }

    /// Returns the underlying generator.
    pub fn generator(&self) -> &D {
        &self.generator
    }

    /// Generate a single field with its standalone prompt.
    #[instrument(skip(self, idea, capability), fields(capability = %capability))]
    pub async fn generate(
        &self,
        capability: Capability,
        idea: &Idea,
    ) -> GenerationResult<NormalizedOutput> {
        let raw = self.raw(capability, PromptStyle::Standalone, idea).await?;
        Ok(capability.normalize(&raw))
    }

    /// Generate all four fields concurrently.
    ///
    /// The first failure resolves the whole call; sibling requests still in
    /// flight are dropped.
    #[instrument(skip_all)]
    pub async fn generate_all(&self, idea: &Idea) -> GenerationResult<ContentBundle> {
        let (title, description, keywords, tags) = tokio::try_join!(
            self.raw(Capability::Title, PromptStyle::Combined, idea),
            self.raw(Capability::Description, PromptStyle::Combined, idea),
            self.raw(Capability::Keywords, PromptStyle::Combined, idea),
            self.raw(Capability::Tags, PromptStyle::Combined, idea),
        )?;

        Ok(ContentBundle {
            title: normalize::first_line(&title),
            description: normalize::first_line(&description),
            keywords: normalize::keyword_list(&keywords),
            tags: normalize::hashtag_list(&tags),
        })
    }

    async fn raw(
        &self,
        capability: Capability,
        style: PromptStyle,
        idea: &Idea,
    ) -> GenerationResult<String> {
        let request = GenerateRequest::new(
            capability.prompt(idea, style),
            self.generator.model_name(),
        );
        let text = self.generator.generate(&request).await?;
        debug!(capability = %capability, chars = text.len(), "Model answered");
        Ok(text)
    }
}
