use std::collections::BTreeMap;

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::{CountRange, Gender};

/// Identifier of the built-in `{parameter}` template engine.
pub const BASIC_ENGINE_ID: &str = "basic";

/// The raw body of a message, plus the engine that renders it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslationTemplate {
    id: String,
    source: String,
    #[serde(default = "basic_engine_id")]
    engine_id: String,
}

fn basic_engine_id() -> String {
    BASIC_ENGINE_ID.to_string()
}

impl TranslationTemplate {
    /// Create a template rendered by the basic engine.
    pub fn new(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self::with_engine(id, source, BASIC_ENGINE_ID)
    }

    pub fn with_engine(
        id: impl Into<String>,
        source: impl Into<String>,
        engine_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            engine_id: engine_id.into(),
        }
    }

    /// Diagnostic key, usually the statement key the template came from.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn engine_id(&self) -> &str {
        &self.engine_id
    }
}

/// One variant of a named message.
///
/// # Example
///
/// ```
/// use lingot::{Gender, TranslationMessage, TranslationTemplate};
///
/// let message = TranslationMessage::builder()
///     .name("welcome")
///     .language("ar-SA")
///     .gender(Gender::Female)
///     .template(TranslationTemplate::new("welcome#ar-SA[F]", "AR SA F {name}"))
///     .build();
///
/// assert_eq!(message.language.as_deref(), Some("ar-SA"));
/// assert!(message.attributes.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct TranslationMessage {
    #[builder(into)]
    pub name: String,

    #[builder(into)]
    pub language: Option<String>,

    pub count_range: Option<CountRange>,

    pub gender: Option<Gender>,

    #[builder(default)]
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,

    pub template: TranslationTemplate,
}

impl TranslationMessage {
    /// Whether `other` occupies the same slot in a store.
    ///
    /// Two messages are the same slot when name, language, gender, count
    /// range and attributes are all equal. The template is not compared.
    pub fn same_identity(&self, other: &TranslationMessage) -> bool {
        self.name == other.name
            && self.language == other.language
            && self.gender == other.gender
            && self.count_range == other.count_range
            && self.attributes == other.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(source: &str) -> TranslationMessage {
        TranslationMessage::builder()
            .name("items")
            .language("en")
            .count_range(CountRange::new(2, 10))
            .template(TranslationTemplate::new("items", source))
            .build()
    }

    #[test]
    fn identity_ignores_template() {
        assert!(message("a few").same_identity(&message("several")));
    }

    #[test]
    fn template_engine_defaults_to_basic() {
        let template: TranslationTemplate =
            serde_json::from_str(r#"{ "id": "items", "source": "{n} items" }"#).unwrap();
        assert_eq!(template.engine_id(), BASIC_ENGINE_ID);
        assert_eq!(template, TranslationTemplate::new("items", "{n} items"));
    }

    #[test]
    fn identity_compares_attributes() {
        let mut formal = message("a few");
        formal.attributes.insert("tone".into(), "formal".into());
        assert!(!formal.same_identity(&message("a few")));
    }
}
