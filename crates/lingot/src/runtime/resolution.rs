//! Matching weighted language ranges against available language tags.

use regex::Regex;
use tracing::trace;

use crate::types::LanguageRange;

/// Language resolution function signature.
///
/// Takes the requested ranges and the available tags, and returns the index
/// of the chosen tag in `available`, or `None` when nothing matches.
pub type LanguageResolutionFn = fn(&[LanguageRange], &[&str]) -> Option<usize>;

/// The default language resolution.
///
/// Ranges are tried in ascending weight order; equal weights keep their
/// order. The lone `*` range is skipped. Each range is compared
/// case-insensitively against every tag, where a `*` segment matches one or
/// more ASCII letters or digits. When nothing matches, the range is
/// truncated at its last `-` (also dropping a trailing one-letter extension
/// singleton such as `-x`) and tried again until it is empty.
///
/// # Example
///
/// ```
/// use lingot::LanguageRange;
/// use lingot::runtime::basic_language_resolution;
///
/// let ranges = [LanguageRange::new("ar-SA")];
///
/// assert_eq!(basic_language_resolution(&ranges, &["ar", "ar-SA", "en"]), Some(1));
/// assert_eq!(basic_language_resolution(&ranges, &["ar", "en"]), Some(0));
/// assert_eq!(basic_language_resolution(&ranges, &["en"]), None);
/// ```
pub fn basic_language_resolution(ranges: &[LanguageRange], available: &[&str]) -> Option<usize> {
    if ranges.is_empty() || available.is_empty() {
        return None;
    }

    let available: Vec<String> = available.iter().map(|tag| tag.to_lowercase()).collect();

    let mut ordered: Vec<&LanguageRange> = ranges.iter().collect();
    ordered.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    for range in ordered {
        if range.is_any() {
            continue;
        }

        let mut pattern = range.language.trim().to_lowercase();
        while !pattern.is_empty() {
            if let Some(matcher) = range_matcher(&pattern) {
                if let Some(index) = available.iter().position(|tag| matcher.is_match(tag)) {
                    trace!(range = %range.language, matched = %pattern, "language resolved");
                    return Some(index);
                }
            }
            pattern = truncate_range(&pattern);
        }
    }

    None
}

/// Build a full-match regex for a lowercased range.
fn range_matcher(range: &str) -> Option<Regex> {
    let body = range
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("[a-z0-9]+");
    Regex::new(&format!("^(?:{body})$")).ok()
}

/// Drop the last subtag, and a one-letter extension singleton left before it.
fn truncate_range(range: &str) -> String {
    let Some(index) = range.rfind('-') else {
        return String::new();
    };
    let truncated = &range[..index];

    match truncated.rfind('-') {
        Some(dash) if dash + 2 == truncated.len() => truncated[..dash].to_string(),
        _ => truncated.to_string(),
    }
}
