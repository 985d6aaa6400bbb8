use std::collections::BTreeMap;

use tracing::trace;

use super::resolution::LanguageResolutionFn;
use crate::types::LanguageRange;

/// Pick a value from a map keyed `name` or `name#tag`.
///
/// The tags present for `name` are resolved against `ranges`, then against
/// `default_ranges`. Without a match the untagged `name` entry is used, and
/// without that the first entry for `name` in key order. Returns the chosen
/// tag (if any) with its value.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
///
/// use lingot::LanguageRange;
/// use lingot::runtime::{basic_language_resolution, select_localized};
///
/// let titles = BTreeMap::from([
///     ("title".to_string(), "Welcome"),
///     ("title#ar".to_string(), "أهلا"),
///     ("subtitle#en".to_string(), "Hello"),
/// ]);
///
/// let picked = select_localized(
///     &titles,
///     "title",
///     &[LanguageRange::new("ar-EG")],
///     &[],
///     basic_language_resolution,
/// );
/// assert_eq!(picked, Some((Some("ar"), &"أهلا")));
///
/// let fallback = select_localized(&titles, "title", &[], &[], basic_language_resolution);
/// assert_eq!(fallback, Some((None, &"Welcome")));
/// ```
pub fn select_localized<'m, V>(
    values: &'m BTreeMap<String, V>,
    name: &str,
    ranges: &[LanguageRange],
    default_ranges: &[LanguageRange],
    resolution: LanguageResolutionFn,
) -> Option<(Option<&'m str>, &'m V)> {
    let entries: Vec<(Option<&'m str>, &'m V)> = values
        .iter()
        .filter_map(|(key, value)| entry_tag(key, name).map(|tag| (tag, value)))
        .collect();

    let tags: Vec<&str> = entries.iter().filter_map(|(tag, _)| *tag).collect();

    let resolved = resolution(ranges, &tags).or_else(|| resolution(default_ranges, &tags));
    if let Some(tag) = resolved.and_then(|index| tags.get(index).copied()) {
        trace!(name, tag, "localized value resolved");
        return entries.into_iter().find(|(entry, _)| *entry == Some(tag));
    }

    entries
        .iter()
        .find(|(tag, _)| tag.is_none())
        .or_else(|| entries.first())
        .copied()
}

/// `Some(None)` for the untagged key, `Some(Some(tag))` for `name#tag`, and
/// `None` for keys of other names.
fn entry_tag<'k>(key: &'k str, name: &str) -> Option<Option<&'k str>> {
    if key == name {
        return Some(None);
    }
    let rest = key.strip_prefix(name)?.strip_prefix('#')?;
    Some(Some(rest))
}
