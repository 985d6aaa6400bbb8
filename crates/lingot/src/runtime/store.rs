//! The in-memory message index.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use bon::Builder;
use strsim::levenshtein;
use tracing::{debug, trace};

use super::engine::{EngineRegistry, Segment, TemplateEngine, join_segments};
use super::error::{LoadError, RenderError};
use super::localized;
use super::resolution::{LanguageResolutionFn, basic_language_resolution};
use super::selection::{is_candidate, most_specific};
use crate::parser::{
    ParseError, SourceOptions, definitions_to_messages, parse_json_definitions,
    parse_source_with_diagnostics,
};
use crate::types::{LanguageRange, TranslationMessage, TranslationSpecifier, Value};

/// All variants of one message name, in insertion order.
#[derive(Debug, Clone)]
struct Bucket {
    name: String,
    messages: Vec<TranslationMessage>,
}

/// An in-memory index of messages, queried by [`TranslationSpecifier`].
///
/// Messages are grouped by name. Adding a message whose name, language,
/// gender, count range and attributes equal an existing one replaces it in
/// place; anything else is appended.
///
/// # Example
///
/// ```
/// use lingot::{Gender, MessageStore, TranslationSpecifier, params};
/// use lingot::parser::SourceOptions;
///
/// let mut store = MessageStore::new();
/// store
///     .load_source(
///         "welcome#ar[F]=AR F {name}\n\
///          welcome#ar-SA[F]=AR SA F {name}\n\
///          welcome#ar-SA[M]=AR SA M {name}\n",
///         &SourceOptions::default(),
///     )
///     .unwrap();
///
/// let request = TranslationSpecifier::new("welcome")
///     .with_language("ar-SA")
///     .with_gender(Gender::Female);
///
/// let text = store.translate(&request, &params! { "name" => "Fatima" }).unwrap();
/// assert_eq!(text.as_deref(), Some("AR SA F Fatima"));
/// ```
#[derive(Debug, Clone, Builder)]
pub struct MessageStore {
    /// Bucket position by message name.
    #[builder(skip)]
    index: HashMap<String, usize>,

    #[builder(skip)]
    buckets: Vec<Bucket>,

    /// Ranges tried when a request's own ranges match no language.
    #[builder(default)]
    default_languages: Vec<LanguageRange>,

    #[builder(default = basic_language_resolution as LanguageResolutionFn)]
    language_resolution: LanguageResolutionFn,

    #[builder(skip)]
    engines: EngineRegistry,
}

impl Default for MessageStore {
    fn default() -> Self {
        MessageStore::builder().build()
    }
}

impl MessageStore {
    /// Create an empty store with basic language resolution.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_languages(&self) -> &[LanguageRange] {
        &self.default_languages
    }

    pub fn set_default_languages(&mut self, ranges: Vec<LanguageRange>) {
        self.default_languages = ranges;
    }

    pub fn set_language_resolution(&mut self, resolution: LanguageResolutionFn) {
        self.language_resolution = resolution;
    }

    /// Make `engine` available to templates whose engine id is `id`.
    pub fn register_engine(&mut self, id: impl Into<String>, engine: impl TemplateEngine + 'static) {
        self.engines.register(id, engine);
    }

    /// Insert `message`, replacing a variant with the same identity.
    pub fn add(&mut self, message: TranslationMessage) {
        let position = match self.index.get(&message.name) {
            Some(&position) => position,
            None => {
                let position = self.buckets.len();
                self.index.insert(message.name.clone(), position);
                self.buckets.push(Bucket {
                    name: message.name.clone(),
                    messages: Vec::new(),
                });
                position
            }
        };

        let messages = &mut self.buckets[position].messages;
        match messages.iter_mut().find(|existing| existing.same_identity(&message)) {
            Some(existing) => {
                trace!(name = %message.name, key = message.template.id(), "replacing message");
                *existing = message;
            }
            None => messages.push(message),
        }
    }

    /// Insert each message in order, as by [`MessageStore::add`].
    pub fn add_all(&mut self, messages: impl IntoIterator<Item = TranslationMessage>) {
        for message in messages {
            self.add(message);
        }
    }

    /// Find the variant that best answers `request`.
    ///
    /// Variants that conflict with the request's gender, count or attributes
    /// are discarded. The survivors are grouped by language and one group is
    /// chosen: the language resolved from the request's ranges, then from the
    /// store's default ranges, then the untagged group, then the first group.
    /// Within the group the most specific variant wins, the earliest on a tie.
    pub fn resolve(&self, request: &TranslationSpecifier) -> Option<&TranslationMessage> {
        let bucket = self.bucket(&request.name)?;

        let mut groups: Vec<(Option<&str>, Vec<&TranslationMessage>)> = Vec::new();
        for message in bucket.messages.iter().filter(|m| is_candidate(m, request)) {
            let language = message.language.as_deref();
            match groups.iter_mut().find(|(group, _)| *group == language) {
                Some((_, members)) => members.push(message),
                None => groups.push((language, vec![message])),
            }
        }

        if groups.is_empty() {
            trace!(name = %request.name, "no candidate survives filtering");
            return None;
        }

        let tags: Vec<&str> = groups.iter().filter_map(|(language, _)| *language).collect();
        let resolved = (self.language_resolution)(&request.languages, &tags)
            .or_else(|| (self.language_resolution)(&self.default_languages, &tags))
            .and_then(|index| tags.get(index).copied());

        let group = match resolved {
            Some(tag) => groups.iter().find(|(language, _)| *language == Some(tag)),
            None => {
                trace!(name = %request.name, "no language resolved, using fallback group");
                groups
                    .iter()
                    .find(|(language, _)| language.is_none())
                    .or_else(|| groups.first())
            }
        }?;

        trace!(name = %request.name, language = ?group.0, candidates = group.1.len(), "language group chosen");
        most_specific(&group.1, request)
    }

    /// Render `message` with the engine its template names.
    pub fn render(
        &self,
        message: &TranslationMessage,
        params: &HashMap<String, Value>,
    ) -> Result<Vec<Segment>, RenderError> {
        self.engines.render(&message.template, params)
    }

    /// Resolve `request` and render the result into segments.
    ///
    /// `Ok(None)` when no message answers the request.
    pub fn translate_segments(
        &self,
        request: &TranslationSpecifier,
        params: &HashMap<String, Value>,
    ) -> Result<Option<Vec<Segment>>, RenderError> {
        self.resolve(request)
            .map(|message| self.render(message, params))
            .transpose()
    }

    /// Resolve `request` and render the result into a string.
    pub fn translate(
        &self,
        request: &TranslationSpecifier,
        params: &HashMap<String, Value>,
    ) -> Result<Option<String>, RenderError> {
        Ok(self
            .translate_segments(request, params)?
            .map(|segments| join_segments(&segments)))
    }

    /// Parse `source` and add every message. Returns how many were parsed.
    pub fn load_source(&mut self, source: &str, options: &SourceOptions) -> Result<usize, ParseError> {
        let parsed = parse_source_with_diagnostics(source, options)?;
        let count = parsed.messages.len();
        self.add_all(parsed.messages);
        Ok(count)
    }

    /// Read and load a message file.
    ///
    /// Files ending in `.json` are read as structured definitions, anything
    /// else as message source. The path is used as the file name in errors
    /// unless `options` names one.
    pub fn load_file(
        &mut self,
        path: impl AsRef<Path>,
        options: &SourceOptions,
    ) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut options = options.clone();
        if options.file_name.is_none() {
            options.file_name = Some(path.display().to_string());
        }

        let is_json = path
            .extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            let definitions = parse_json_definitions(&text).map_err(|source| LoadError::Json {
                path: path.to_path_buf(),
                source,
            })?;
            definitions_to_messages(&definitions, &options)?
        } else {
            parse_source_with_diagnostics(&text, &options)?
        };

        let count = parsed.messages.len();
        debug!(path = %path.display(), messages = count, "loaded message file");
        self.add_all(parsed.messages);
        Ok(count)
    }

    /// Pick a value from a map keyed `name` or `name#tag`, using this store's
    /// language resolution and default ranges.
    pub fn select_localized<'m, V>(
        &self,
        values: &'m BTreeMap<String, V>,
        name: &str,
        ranges: &[LanguageRange],
    ) -> Option<(Option<&'m str>, &'m V)> {
        localized::select_localized(
            values,
            name,
            ranges,
            &self.default_languages,
            self.language_resolution,
        )
    }

    /// Every stored message, grouped by name in first-insertion order.
    pub fn messages(&self) -> impl Iterator<Item = &TranslationMessage> {
        self.buckets.iter().flat_map(|bucket| bucket.messages.iter())
    }

    /// The variants stored under `name`.
    pub fn variants(&self, name: &str) -> &[TranslationMessage] {
        self.bucket(name)
            .map(|bucket| bucket.messages.as_slice())
            .unwrap_or_default()
    }

    /// Message names in first-insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|bucket| bucket.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bucket(name).is_some()
    }

    /// Total number of stored variants.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.messages.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Up to three stored names close to `name`, closest first.
    ///
    /// Names within edit distance 1 are offered for names of up to three
    /// characters, and within distance 2 for longer ones.
    pub fn suggest(&self, name: &str) -> Vec<String> {
        let max_distance = if name.len() <= 3 { 1 } else { 2 };
        let mut suggestions: Vec<(usize, &str)> = self
            .names()
            .filter_map(|candidate| {
                let dist = levenshtein(name, candidate);
                if dist <= max_distance && dist > 0 {
                    Some((dist, candidate))
                } else {
                    None
                }
            })
            .collect();

        suggestions.sort_by_key(|(dist, _)| *dist);
        suggestions
            .into_iter()
            .take(3)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }

    fn bucket(&self, name: &str) -> Option<&Bucket> {
        self.index.get(name).map(|&position| &self.buckets[position])
    }
}
