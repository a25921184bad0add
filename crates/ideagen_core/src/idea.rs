//! The caller-supplied idea.

use ideagen_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// JSON body accepted by every generation route.
///
/// `idea` is optional here so that a missing field reaches validation and
/// gets the same answer as an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaInput {
    /// Free-text seed describing what to write about.
    #[serde(default)]
    pub idea: Option<String>,
}

impl IdeaInput {
    /// Validate the body into an [`Idea`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrorKind::MissingIdea`] when `idea` is absent or
    /// the empty string.
    pub fn into_idea(self) -> Result<Idea, ValidationError> {
        match self.idea {
            Some(idea) => Idea::new(idea),
            None => Err(ValidationError::new(ValidationErrorKind::MissingIdea)),
        }
    }
}

/// A non-empty idea string.
///
/// The text is kept exactly as supplied; whitespace-only ideas are accepted
/// because only the empty string counts as missing.
///
/// # Examples
///
/// ```
/// use ideagen_core::Idea;
///
/// let idea = Idea::new("rust for data pipelines").unwrap();
/// assert_eq!(idea.as_str(), "rust for data pipelines");
/// assert!(Idea::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(transparent)]
pub struct Idea(String);

impl Idea {
    /// Wrap a string, rejecting the empty string.
    #[track_caller]
    pub fn new(idea: impl Into<String>) -> Result<Self, ValidationError> {
        let idea = idea.into();
        if idea.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::MissingIdea));
        }
        Ok(Self(idea))
    }

    /// Borrow the idea text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
