//! Turns message source text into [`TranslationMessage`]s.

use std::collections::BTreeMap;

use bon::Builder;
use tracing::debug;

use super::error::{ParseError, SourceLocation};
use super::key::decode_key;
use super::modifier::{Modifier, classify};
use super::scanner::StatementScanner;
use crate::types::{BASIC_ENGINE_ID, CountRange, Gender, TranslationMessage, TranslationTemplate};

/// Options controlling how source text becomes messages.
///
/// # Example
///
/// ```
/// use lingot::parser::SourceOptions;
///
/// let options = SourceOptions::builder()
///     .strict(true)
///     .file_name("messages/en.props")
///     .default_language("en")
///     .build();
///
/// assert_eq!(options.default_engine_id, "basic");
/// ```
#[derive(Debug, Clone, Builder)]
pub struct SourceOptions {
    /// Fail on the first problem instead of skipping it.
    #[builder(default)]
    pub strict: bool,

    /// Reported in error locations.
    #[builder(into)]
    pub file_name: Option<String>,

    /// Language given to messages whose key has no `#tag`.
    #[builder(into)]
    pub default_language: Option<String>,

    #[builder(into, default = BASIC_ENGINE_ID.to_string())]
    pub default_engine_id: String,
}

impl Default for SourceOptions {
    fn default() -> Self {
        SourceOptions::builder().build()
    }
}

/// Messages parsed from a source, plus the problems that were skipped.
#[derive(Debug, Clone, Default)]
pub struct ParsedSource {
    pub messages: Vec<TranslationMessage>,
    /// Problems tolerated in lenient mode, in source order. Always empty
    /// after a successful strict parse.
    pub tolerated: Vec<ParseError>,
}

/// Parse source text into messages.
///
/// Each statement becomes one message in source order. In lenient mode
/// (the default) malformed statements are dropped and invalid modifiers
/// ignored; use [`parse_source_with_diagnostics`] to see what was skipped.
///
/// # Example
///
/// ```
/// use lingot::parser::{SourceOptions, parse_source};
/// use lingot::Gender;
///
/// let messages = parse_source(
///     "welcome#ar-SA[F]=AR SA F {name}",
///     &SourceOptions::default(),
/// )
/// .unwrap();
///
/// assert_eq!(messages[0].name, "welcome");
/// assert_eq!(messages[0].language.as_deref(), Some("ar-SA"));
/// assert_eq!(messages[0].gender, Some(Gender::Female));
/// assert_eq!(messages[0].template.source(), "AR SA F {name}");
/// ```
pub fn parse_source(
    source: &str,
    options: &SourceOptions,
) -> Result<Vec<TranslationMessage>, ParseError> {
    parse_source_with_diagnostics(source, options).map(|parsed| parsed.messages)
}

/// Parse source text, returning tolerated problems alongside the messages.
pub fn parse_source_with_diagnostics(
    source: &str,
    options: &SourceOptions,
) -> Result<ParsedSource, ParseError> {
    let mut problems = Problems::new(options);
    let mut messages = Vec::new();

    for statement in StatementScanner::new(source) {
        let statement = match statement {
            Ok(statement) => statement,
            Err(error) => {
                problems.report(error)?;
                continue;
            }
        };

        let key = decode_statement_key(&statement.key, &statement.location, &mut problems)?;
        messages.push(key.into_message(&statement.key, statement.value, options));
    }

    debug!(
        file = options.file_name.as_deref().unwrap_or("unknown"),
        messages = messages.len(),
        tolerated = problems.tolerated.len(),
        "parsed message source"
    );

    Ok(ParsedSource {
        messages,
        tolerated: problems.into_tolerated(),
    })
}

/// A statement key with its metadata classified.
#[derive(Debug, Clone, Default)]
pub(crate) struct DecodedKey {
    pub name: String,
    pub language: Option<String>,
    pub gender: Option<Gender>,
    pub count_range: Option<CountRange>,
    pub attributes: BTreeMap<String, String>,
}

impl DecodedKey {
    pub(crate) fn into_message(
        self,
        raw_key: &str,
        template: String,
        options: &SourceOptions,
    ) -> TranslationMessage {
        TranslationMessage {
            name: self.name,
            language: self.language.or_else(|| options.default_language.clone()),
            count_range: self.count_range,
            gender: self.gender,
            attributes: self.attributes,
            template: TranslationTemplate::with_engine(
                raw_key,
                template,
                options.default_engine_id.as_str(),
            ),
        }
    }
}

/// Decode and classify a raw statement key.
///
/// Repeated genders or count ranges overwrite earlier ones.
pub(crate) fn decode_statement_key(
    raw_key: &str,
    location: &SourceLocation,
    problems: &mut Problems<'_>,
) -> Result<DecodedKey, ParseError> {
    let key = match decode_key(raw_key) {
        Ok(key) => key,
        Err(unclosed) => {
            problems.report(ParseError::UnclosedMetadataObject {
                key: unclosed.partial.name.clone(),
                location: location.clone(),
            })?;
            unclosed.partial
        }
    };

    let mut decoded = DecodedKey {
        name: key.name,
        language: key.tag,
        ..DecodedKey::default()
    };

    for token in &key.metadata {
        match classify(token) {
            Modifier::Gender(gender) => decoded.gender = Some(gender),
            Modifier::CountRange(range) => decoded.count_range = Some(range),
            Modifier::Attribute { key, value } => {
                decoded.attributes.insert(key, value);
            }
            Modifier::Invalid(modifier) => {
                problems.report(ParseError::InvalidModifier {
                    key: decoded.name.clone(),
                    modifier,
                    location: location.clone(),
                })?;
            }
        }
    }

    Ok(decoded)
}

/// Collects parse problems, or fails on the first one in strict mode.
pub(crate) struct Problems<'a> {
    options: &'a SourceOptions,
    tolerated: Vec<ParseError>,
}

impl<'a> Problems<'a> {
    pub(crate) fn new(options: &'a SourceOptions) -> Self {
        Self {
            options,
            tolerated: Vec::new(),
        }
    }

    pub(crate) fn report(&mut self, error: ParseError) -> Result<(), ParseError> {
        let error = match &self.options.file_name {
            Some(file) => error.with_file(file.as_str()),
            None => error,
        };

        if self.options.strict {
            return Err(error);
        }

        debug!(
            kind = error.kind(),
            line = error.line(),
            "tolerating parse problem: {error}"
        );
        self.tolerated.push(error);
        Ok(())
    }

    pub(crate) fn into_tolerated(self) -> Vec<ParseError> {
        self.tolerated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_modifiers_overwrite_earlier_ones() {
        let options = SourceOptions::default();
        let mut problems = Problems::new(&options);
        let key = decode_statement_key(
            "items[m, 1, f, 2..3]",
            &SourceLocation::new(1, "items[m, 1, f, 2..3]=x"),
            &mut problems,
        )
        .unwrap();

        assert_eq!(key.gender, Some(Gender::Female));
        assert_eq!(key.count_range, Some(CountRange::new(2, 3)));
        assert!(problems.into_tolerated().is_empty());
    }

    #[test]
    fn file_name_is_attached_to_problems() {
        let options = SourceOptions::builder().file_name("en.props").build();
        let mut problems = Problems::new(&options);
        decode_statement_key(
            "items[plural]",
            &SourceLocation::new(4, "items[plural]=x"),
            &mut problems,
        )
        .unwrap();

        let tolerated = problems.into_tolerated();
        assert_eq!(tolerated.len(), 1);
        assert_eq!(tolerated[0].location().file.as_deref(), Some("en.props"));
        assert_eq!(tolerated[0].line(), 4);
    }
}
