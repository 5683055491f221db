//! Excerpt derivation and reading-time estimation

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::BlogConfig;

lazy_static! {
    static ref HEADING: Regex = Regex::new(r"(?m)^#{1,6}\s+").unwrap();
    static ref BOLD: Regex = Regex::new(r"\*\*(.*?)\*\*").unwrap();
    static ref ITALIC: Regex = Regex::new(r"\*(.*?)\*").unwrap();
    static ref LINK: Regex = Regex::new(r"\[(.*?)\]\(.*?\)").unwrap();
}

/// Derive a plain-text excerpt from a markdown body.
///
/// Heading markers, emphasis markers and link targets are stripped (link
/// text is kept), whitespace is collapsed, and the result is truncated to
/// `max_length` characters with a trailing ellipsis when it was longer.
pub fn generate_excerpt(body: &str, max_length: usize) -> String {
    let text = HEADING.replace_all(body, "");
    let text = BOLD.replace_all(&text, "$1");
    let text = ITALIC.replace_all(&text, "$1");
    let text = LINK.replace_all(&text, "$1");
    let plain = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if plain.chars().count() <= max_length {
        return plain;
    }

    let truncated: String = plain.chars().take(max_length).collect();
    format!("{}...", truncated.trim_end())
}

/// Estimate reading time for a body of text.
///
/// Whitespace-delimited word count over the configured words-per-minute,
/// rounded up to a whole minute. Empty when the feature is disabled.
pub fn reading_time(config: &BlogConfig, body: &str) -> String {
    if !config.features.reading_time {
        return String::new();
    }

    let words_per_minute = config.words_per_minute.max(1);
    let words = body.split_whitespace().count();
    let minutes = words.div_ceil(words_per_minute).max(1);
    format!("{} min read", minutes)
}
