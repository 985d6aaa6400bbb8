use crate::types::{CountRange, Gender};

use super::key::MetadataToken;

/// What a single metadata token means for a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    Gender(Gender),
    CountRange(CountRange),
    Attribute { key: String, value: String },
    /// A bare token that is neither a gender nor a count range.
    Invalid(String),
}

/// Classify a metadata token.
///
/// A token with an explicit value is always an attribute. A bare token is
/// tried as a gender, then as a count range.
///
/// ```
/// use lingot::parser::{MetadataToken, Modifier, classify};
/// use lingot::{CountRange, Gender};
///
/// assert_eq!(classify(&MetadataToken::bare("m")), Modifier::Gender(Gender::Male));
/// assert_eq!(
///     classify(&MetadataToken::bare("2..10")),
///     Modifier::CountRange(CountRange::new(2, 10))
/// );
/// assert_eq!(
///     classify(&MetadataToken::bare("plural")),
///     Modifier::Invalid("plural".to_string())
/// );
/// ```
pub fn classify(token: &MetadataToken) -> Modifier {
    if let Some(value) = &token.value {
        return Modifier::Attribute {
            key: token.key.clone(),
            value: value.clone(),
        };
    }

    if let Some(gender) = Gender::parse(&token.key) {
        return Modifier::Gender(gender);
    }

    match CountRange::parse(&token.key) {
        Some(range) => Modifier::CountRange(range),
        None => Modifier::Invalid(token.key.clone()),
    }
}
