use std::collections::BTreeMap;

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::{Gender, LanguageRange};

/// A request for the best variant of a named message.
///
/// # Example
///
/// ```
/// use lingot::{Gender, LanguageRange, TranslationSpecifier};
///
/// let request = TranslationSpecifier::builder()
///     .name("welcome")
///     .languages(vec![LanguageRange::new("ar-SA")])
///     .gender(Gender::Female)
///     .build();
///
/// assert_eq!(request.count, None);
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
pub struct TranslationSpecifier {
    #[builder(into)]
    pub name: String,

    #[builder(default)]
    #[serde(default)]
    pub languages: Vec<LanguageRange>,

    pub count: Option<i64>,

    pub gender: Option<Gender>,

    #[builder(default)]
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl TranslationSpecifier {
    /// A request for `name` with no constraints.
    pub fn new(name: impl Into<String>) -> Self {
        TranslationSpecifier::builder().name(name).build()
    }

    pub fn with_language(mut self, range: impl Into<LanguageRange>) -> Self {
        self.languages.push(range.into());
        self
    }

    pub fn with_count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}
