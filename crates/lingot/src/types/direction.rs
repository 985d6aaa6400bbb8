use serde::{Deserialize, Serialize};

/// Writing direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LanguageDirection {
    LeftToRight,
    RightToLeft,
}

const RIGHT_TO_LEFT: &[&str] = &[
    "ae", "ar", "arc", "bcc", "bqi", "ckb", "dv", "fa", "glk", "he", "iw", "ku", "mzn", "nqo",
    "pnb", "prs", "ps", "sd", "ug", "ur", "yi",
];

/// Look up the writing direction from the primary subtag of a language tag.
///
/// Unknown or empty tags are left-to-right.
///
/// ```
/// use lingot::{LanguageDirection, language_direction};
///
/// assert_eq!(language_direction("ar-SA"), LanguageDirection::RightToLeft);
/// assert_eq!(language_direction("HE"), LanguageDirection::RightToLeft);
/// assert_eq!(language_direction("en-US"), LanguageDirection::LeftToRight);
/// ```
pub fn language_direction(tag: &str) -> LanguageDirection {
    let primary = tag
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if RIGHT_TO_LEFT.contains(&primary.as_str()) {
        LanguageDirection::RightToLeft
    } else {
        LanguageDirection::LeftToRight
    }
}

impl LanguageDirection {
    pub fn is_right_to_left(&self) -> bool {
        *self == LanguageDirection::RightToLeft
    }
}
