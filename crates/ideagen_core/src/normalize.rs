//! Response normalizers.
//!
//! Each function turns raw model text into one structured field. They are
//! pure and never fail: malformed text degrades to an empty string or list.

use regex::Regex;
use std::sync::LazyLock;

/// Leading "12." / "3. " list marker.
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("Valid list marker regex"));

/// Runs of newlines, commas and spaces.
static TAG_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\n, ]+").expect("Valid tag separator regex"));

/// First line of the text, trimmed. Used for titles and descriptions.
///
/// # Examples
///
/// ```
/// use ideagen_core::normalize::first_line;
///
/// assert_eq!(first_line("Line One\nLine Two"), "Line One");
/// ```
pub fn first_line(text: &str) -> String {
    text.trim()
        .split('\n')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Numbered-list lines with their markers removed.
///
/// Blank lines are dropped; order and duplicates are kept.
///
/// # Examples
///
/// ```
/// use ideagen_core::normalize::keyword_list;
///
/// assert_eq!(keyword_list("1. foo\n2. bar\n\n3.  baz  "), ["foo", "bar", "baz"]);
/// ```
pub fn keyword_list(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| LIST_MARKER.replace(line.trim(), "").trim().to_string())
        .filter(|keyword| !keyword.is_empty())
        .collect()
}

/// Hashtags in first-occurrence order, deduplicated.
///
/// # Examples
///
/// ```
/// use ideagen_core::normalize::hashtag_list;
///
/// assert_eq!(
///     hashtag_list("#One #two, #One  #three"),
///     ["#One", "#two", "#three"]
/// );
/// ```
pub fn hashtag_list(text: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for token in TAG_SEPARATOR.split(text).map(str::trim) {
        if token.starts_with('#') && !tags.iter().any(|tag| tag == token) {
            tags.push(token.to_string());
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line_single_line() {
        assert_eq!(first_line("  Just a title  "), "Just a title");
    }

    #[test]
    fn test_first_line_skips_leading_blank_lines() {
        assert_eq!(first_line("\n\n  Opening line\nSecond"), "Opening line");
    }

    #[test]
    fn test_first_line_does_not_join_paragraph() {
        let raw = "First sentence of the paragraph.\nSecond sentence on a new line.";
        assert_eq!(first_line(raw), "First sentence of the paragraph.");
    }

    #[test]
    fn test_first_line_of_whitespace_is_empty() {
        assert_eq!(first_line(" \n \n"), "");
    }

    #[test]
    fn test_keyword_list_strips_markers() {
        let raw = "1. foo\n2. bar\n\n3.  baz  ";
        assert_eq!(keyword_list(raw), vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn test_keyword_list_marker_without_space() {
        assert_eq!(keyword_list("12.rust\n  7.  tokio"), vec!["rust", "tokio"]);
    }

    #[test]
    fn test_keyword_list_keeps_duplicates_and_plain_lines() {
        let raw = "seo\n1. seo\nmarketing";
        assert_eq!(keyword_list(raw), vec!["seo", "seo", "marketing"]);
    }

    #[test]
    fn test_keyword_list_marker_only_line_dropped() {
        assert_eq!(keyword_list("1.\n2. kept"), vec!["kept"]);
    }

    #[test]
    fn test_keyword_list_empty_text() {
        assert!(keyword_list("").is_empty());
    }

    #[test]
    fn test_hashtag_list_dedupes_in_order() {
        let raw = "#One #two, #One  #three";
        assert_eq!(hashtag_list(raw), vec!["#One", "#two", "#three"]);
    }

    #[test]
    fn test_hashtag_list_drops_non_tags() {
        let raw = "Here are some tags:\n#travel, #slowtravel\nEnjoy!";
        assert_eq!(hashtag_list(raw), vec!["#travel", "#slowtravel"]);
    }

    #[test]
    fn test_hashtag_list_is_case_sensitive() {
        assert_eq!(hashtag_list("#Rust #rust"), vec!["#Rust", "#rust"]);
    }

    #[test]
    fn test_hashtag_list_without_tags() {
        assert!(hashtag_list("no hashtags here").is_empty());
    }
}
