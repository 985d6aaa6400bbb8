//! Decoding of compound statement keys such as `welcome#ar-SA[F, 2..10]`.

use serde::Serialize;
use thiserror::Error;

use crate::types::CountRange;

/// Opening and closing characters of a metadata block.
const METADATA_BRACKETS: [(char, char); 4] = [('[', ']'), ('{', '}'), ('(', ')'), ('<', '>')];

/// Characters that separate a metadata key from an explicit value.
const ASSIGNMENT_CHARS: [char; 5] = ['-', '|', '=', ':', ' '];

/// A decoded statement key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StatementKey {
    pub name: String,
    /// The language tag, if the key has a non-blank `#tag`.
    pub tag: Option<String>,
    pub metadata: Vec<MetadataToken>,
}

/// One comma or ampersand separated entry of a metadata block.
///
/// `value` is `Some` when the entry used an assignment character
/// (`tone-formal`, `tone:formal`) and `None` for a bare modifier (`F`, `2..10`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataToken {
    pub key: String,
    pub value: Option<String>,
}

impl MetadataToken {
    pub fn bare(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    pub fn assigned(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }
}

/// A metadata block was opened but never closed.
///
/// The name and tag decoded before the opener are kept in `partial`; its
/// metadata is empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unclosed metadata object in key `{}`", partial.name)]
pub struct UnclosedMetadata {
    pub partial: StatementKey,
}

/// Decode `name[#tag][<open>metadata<close>]`.
///
/// `#` starts the tag on its first occurrence only. The first of `[ { ( <`
/// starts the metadata block, which runs to its paired closer. Anything
/// after the closer other than a first `#` is ignored.
///
/// # Example
///
/// ```
/// use lingot::parser::{MetadataToken, decode_key};
///
/// let key = decode_key("welcome#ar-SA{F & tone:formal}").unwrap();
/// assert_eq!(key.name, "welcome");
/// assert_eq!(key.tag.as_deref(), Some("ar-SA"));
/// assert_eq!(
///     key.metadata,
///     vec![MetadataToken::bare("F"), MetadataToken::assigned("tone", "formal")]
/// );
/// ```
pub fn decode_key(key: &str) -> Result<StatementKey, UnclosedMetadata> {
    let mut name_end = None;
    let mut tag_start = None;
    let mut tag_end = None;
    let mut metadata_open: Option<(usize, char)> = None;
    let mut metadata = None;

    for (index, c) in key.char_indices() {
        match metadata_open {
            Some((start, closer)) if metadata.is_none() => {
                if c == closer {
                    metadata = Some(&key[start..index]);
                }
                continue;
            }
            _ => {}
        }

        if tag_start.is_none() && c == '#' {
            tag_start = Some(index);
            name_end.get_or_insert(index);
        } else if metadata_open.is_none() {
            if let Some(closer) = closer_for(c) {
                metadata_open = Some((index + c.len_utf8(), closer));
                name_end.get_or_insert(index);
                if tag_start.is_some() {
                    tag_end.get_or_insert(index);
                }
            }
        }
    }

    let name = key[..name_end.unwrap_or(key.len())].trim().to_string();
    let tag = tag_start
        .map(|start| key[start + 1..tag_end.unwrap_or(key.len())].trim())
        .filter(|tag| !tag.is_empty())
        .map(str::to_string);

    let decoded = StatementKey {
        name,
        tag,
        metadata: metadata.map(split_metadata).unwrap_or_default(),
    };

    if metadata_open.is_some() && metadata.is_none() {
        return Err(UnclosedMetadata { partial: decoded });
    }
    Ok(decoded)
}

fn closer_for(c: char) -> Option<char> {
    METADATA_BRACKETS
        .iter()
        .find(|(open, _)| *open == c)
        .map(|(_, close)| *close)
}

fn split_metadata(content: &str) -> Vec<MetadataToken> {
    content
        .split([',', '&'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(split_token)
        .collect()
}

/// Split a token on its first assignment character.
///
/// Count ranges are taken whole so that a leading or inner `-` in
/// `-infinity..0` or `-5` is not read as an assignment.
fn split_token(token: &str) -> MetadataToken {
    if CountRange::parse(token).is_some() {
        return MetadataToken::bare(token);
    }

    match token.split_once(ASSIGNMENT_CHARS) {
        Some((key, value)) => MetadataToken::assigned(key.trim(), value.trim()),
        None => MetadataToken::bare(token),
    }
}
