//! Normalized outputs returned to callers.

use serde::{Deserialize, Serialize};

/// A single normalized field.
///
/// Serializes externally tagged, so `Title("x")` becomes `{"title": "x"}`,
/// which is exactly the body of the single-capability routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizedOutput {
    /// First line of the title response.
    Title(String),
    /// First line of the description response.
    Description(String),
    /// Keywords in model order.
    Keywords(Vec<String>),
    /// Deduplicated hashtags, each starting with `#`.
    Tags(Vec<String>),
}

/// Body of the combined `/generate` route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBundle {
    /// Post title
    pub title: String,
    /// Post description
    pub description: String,
    /// SEO keywords
    pub keywords: Vec<String>,
    /// Hashtags
    pub tags: Vec<String>,
}
