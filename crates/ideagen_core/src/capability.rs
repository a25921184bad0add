//! Generation capabilities and their prompt templates.

use crate::{Idea, NormalizedOutput, normalize};
use serde::{Deserialize, Serialize};

/// One kind of content we can ask the model for.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Capability {
    /// Single-line post or blog title.
    Title,
    /// Short two or three sentence description.
    Description,
    /// Ten SEO keywords.
    Keywords,
    /// Popular hashtags.
    Tags,
}

/// Which route a prompt is built for.
///
/// The combined `/generate` request words its prompts slightly differently
/// and asks for ten hashtags instead of five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PromptStyle {
    /// Single-capability routes.
    #[default]
    Standalone,
    /// The four-way `/generate` route.
    Combined,
}

impl Capability {
    /// Render the prompt for this capability.
    ///
    /// # Examples
    ///
    /// ```
    /// use ideagen_core::{Capability, Idea, PromptStyle};
    ///
    /// let idea = Idea::new("home espresso").unwrap();
    /// let prompt = Capability::Tags.prompt(&idea, PromptStyle::Standalone);
    /// assert!(prompt.starts_with("Generate 5 relevant"));
    /// assert!(prompt.contains("\"home espresso\""));
    /// ```
    pub fn prompt(self, idea: &Idea, style: PromptStyle) -> String {
        let idea = idea.as_str();
        match (self, style) {
            (Capability::Title, PromptStyle::Standalone) => format!(
                "Write a short, attention-grabbing social media or blog title for the idea: \"{idea}\". Respond with only the title, no extra content."
            ),
            (Capability::Title, PromptStyle::Combined) => format!(
                "Write a catchy title for a blog or social media post about: \"{idea}\". Only return the title."
            ),
            (Capability::Description, PromptStyle::Standalone) => format!(
                "Write a short and engaging description (2-3 sentences) for a social media post or blog about: \"{idea}\". Avoid hashtags or emojis."
            ),
            (Capability::Description, PromptStyle::Combined) => format!(
                "Write a short and engaging description (2-3 sentences) for a social media post about: \"{idea}\". Avoid hashtags or emojis."
            ),
            (Capability::Keywords, PromptStyle::Standalone) => format!(
                "List exactly 10 SEO-friendly keywords for this idea: \"{idea}\". Respond with just a plain, numbered list without any explanations or formatting."
            ),
            (Capability::Keywords, PromptStyle::Combined) => format!(
                "List exactly 10 SEO-friendly keywords for this idea: \"{idea}\". Just a numbered list. No explanations."
            ),
            (Capability::Tags, PromptStyle::Standalone) => format!(
                "Generate 5 relevant and popular hashtags for the social media idea: \"{idea}\". Only return the hashtags, no explanations or formatting."
            ),
            (Capability::Tags, PromptStyle::Combined) => format!(
                "Generate 10 relevant and popular hashtags for this social media idea: \"{idea}\". Only return the hashtags, no formatting or explanations."
            ),
        }
    }

    /// Apply this capability's normalizer to raw model text.
    pub fn normalize(self, raw: &str) -> NormalizedOutput {
        match self {
            Capability::Title => NormalizedOutput::Title(normalize::first_line(raw)),
            Capability::Description => NormalizedOutput::Description(normalize::first_line(raw)),
            Capability::Keywords => NormalizedOutput::Keywords(normalize::keyword_list(raw)),
            Capability::Tags => NormalizedOutput::Tags(normalize::hashtag_list(raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn idea() -> Idea {
        Idea::new("urban beekeeping").expect("Valid idea")
    }

    #[test]
    fn test_every_prompt_quotes_the_idea() {
        for capability in Capability::iter() {
            for style in [PromptStyle::Standalone, PromptStyle::Combined] {
                let prompt = capability.prompt(&idea(), style);
                assert!(
                    prompt.contains("\"urban beekeeping\""),
                    "{capability} prompt missing idea: {prompt}"
                );
            }
        }
    }

    #[test]
    fn test_tag_count_depends_on_style() {
        let standalone = Capability::Tags.prompt(&idea(), PromptStyle::Standalone);
        let combined = Capability::Tags.prompt(&idea(), PromptStyle::Combined);
        assert!(standalone.contains("Generate 5 "));
        assert!(combined.contains("Generate 10 "));
    }

    #[test]
    fn test_keyword_prompt_asks_for_numbered_list() {
        for style in [PromptStyle::Standalone, PromptStyle::Combined] {
            let prompt = Capability::Keywords.prompt(&idea(), style);
            assert!(prompt.contains("exactly 10"));
            assert!(prompt.contains("numbered list"));
        }
    }

    #[test]
    fn test_capability_names_round_trip_through_strum() {
        assert_eq!(Capability::from_str("keywords").ok(), Some(Capability::Keywords));
        assert_eq!(Capability::Description.to_string(), "description");
    }

    #[test]
    fn test_description_uses_first_line() {
        let output = Capability::Description.normalize("Line One\nLine Two");
        assert_eq!(output, NormalizedOutput::Description("Line One".to_string()));
    }
}
