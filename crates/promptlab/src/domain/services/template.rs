//! Prompt content helpers: minimum-length check and `{{variable}}` extraction

use std::sync::OnceLock;

use regex::Regex;

/// Minimum trimmed content length accepted by [`validate_content`]
pub const MIN_CONTENT_CHARS: usize = 10;

static VARIABLE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn variable_pattern() -> &'static Regex {
    VARIABLE_PATTERN
        .get_or_init(|| Regex::new(r"\{\{(\w+)\}\}").expect("variable pattern is valid"))
}

/// True iff the trimmed content is at least [`MIN_CONTENT_CHARS`] long
pub fn validate_content(content: &str) -> bool {
    let trimmed = content.trim();
    !trimmed.is_empty() && trimmed.chars().count() >= MIN_CONTENT_CHARS
}

/// Names of `{{name}}` placeholders, in order of appearance
///
/// Duplicates are kept.
pub fn extract_variables(content: &str) -> Vec<String> {
    variable_pattern()
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect()
}
