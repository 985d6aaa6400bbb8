//! Structured message definitions, as read from JSON or built in code.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::{ParseError, SourceLocation};
use super::source::{ParsedSource, Problems, SourceOptions, decode_statement_key};
use crate::types::{CountRange, Gender};

/// The value side of a structured definition.
///
/// Either a bare template string, or an object whose fields override what
/// the key declares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageDefinition {
    Text(String),
    Object(MessageObject),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageObject {
    pub language: Option<String>,
    pub gender: Option<Gender>,
    pub count: Option<CountRange>,
    pub attributes: Option<BTreeMap<String, String>>,
    pub template: Option<String>,
}

impl From<&str> for MessageDefinition {
    fn from(template: &str) -> Self {
        MessageDefinition::Text(template.to_string())
    }
}

impl From<MessageObject> for MessageDefinition {
    fn from(object: MessageObject) -> Self {
        MessageDefinition::Object(object)
    }
}

/// Read a JSON object mapping statement keys to definitions.
///
/// ```
/// use lingot::parser::{MessageDefinition, parse_json_definitions};
///
/// let definitions = parse_json_definitions(
///     r#"{ "items#en[2..10]": "A few items", "items#en": { "count": "11..infinity", "template": "Many items" } }"#,
/// )
/// .unwrap();
///
/// assert_eq!(definitions.len(), 2);
/// assert!(matches!(definitions["items#en[2..10]"], MessageDefinition::Text(_)));
/// ```
pub fn parse_json_definitions(
    text: &str,
) -> Result<BTreeMap<String, MessageDefinition>, serde_json::Error> {
    serde_json::from_str(text)
}

/// Turn definitions into messages.
///
/// Keys are decoded like statement keys. For object definitions, the
/// object's language, gender and count replace the key's, its attributes
/// are laid over the key's, and a missing template is empty. Error
/// locations use the 1-based position of the entry in key order.
pub fn definitions_to_messages(
    definitions: &BTreeMap<String, MessageDefinition>,
    options: &SourceOptions,
) -> Result<ParsedSource, ParseError> {
    let mut problems = Problems::new(options);
    let mut messages = Vec::with_capacity(definitions.len());

    for (position, (raw_key, definition)) in definitions.iter().enumerate() {
        let location = SourceLocation::new(position + 1, raw_key.as_str());
        let mut key = decode_statement_key(raw_key, &location, &mut problems)?;

        let template = match definition {
            MessageDefinition::Text(template) => template.clone(),
            MessageDefinition::Object(object) => {
                if object.language.is_some() {
                    key.language.clone_from(&object.language);
                }
                if object.gender.is_some() {
                    key.gender = object.gender;
                }
                if object.count.is_some() {
                    key.count_range = object.count;
                }
                if let Some(attributes) = &object.attributes {
                    key.attributes.extend(
                        attributes
                            .iter()
                            .map(|(name, value)| (name.clone(), value.clone())),
                    );
                }
                object.template.clone().unwrap_or_default()
            }
        };

        messages.push(key.into_message(raw_key, template, options));
    }

    Ok(ParsedSource {
        messages,
        tolerated: problems.into_tolerated(),
    })
}
