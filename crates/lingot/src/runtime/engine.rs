//! Template engines and the basic `{parameter}` renderer.

use std::collections::HashMap;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::mem;
use std::sync::Arc;

use winnow::combinator::{alt, delimited, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{one_of, take_till};

use super::error::RenderError;
use crate::types::{BASIC_ENGINE_ID, TranslationTemplate, Value};

/// One piece of rendered output.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Literal(String),
    Parameter(Value),
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Segment::Literal(text) => f.write_str(text),
            Segment::Parameter(value) => write!(f, "{value}"),
        }
    }
}

/// Concatenate rendered segments into the final string.
pub fn join_segments(segments: &[Segment]) -> String {
    segments.iter().map(ToString::to_string).collect()
}

/// Renders a template against parameters.
pub trait TemplateEngine: Send + Sync {
    fn render(
        &self,
        template: &TranslationTemplate,
        params: &HashMap<String, Value>,
    ) -> Result<Vec<Segment>, RenderError>;
}

/// Engines available to a store, keyed by engine id.
///
/// The default registry has the basic engine under `"basic"`.
#[derive(Clone)]
pub struct EngineRegistry {
    engines: HashMap<String, Arc<dyn TemplateEngine>>,
}

impl EngineRegistry {
    /// Create a registry with no engines.
    pub fn empty() -> Self {
        Self {
            engines: HashMap::new(),
        }
    }

    /// Add or replace the engine for `id`.
    pub fn register(&mut self, id: impl Into<String>, engine: impl TemplateEngine + 'static) {
        self.engines.insert(id.into(), Arc::new(engine));
    }

    pub fn contains(&self, id: &str) -> bool {
        self.engines.contains_key(id)
    }

    /// Render `template` with the engine named by its `engine_id`.
    pub fn render(
        &self,
        template: &TranslationTemplate,
        params: &HashMap<String, Value>,
    ) -> Result<Vec<Segment>, RenderError> {
        let engine = self.engines.get(template.engine_id()).ok_or_else(|| {
            RenderError::UnknownTemplateEngine {
                template: template.id().to_string(),
                engine: template.engine_id().to_string(),
            }
        })?;
        engine.render(template, params)
    }
}

impl Default for EngineRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(BASIC_ENGINE_ID, BasicTemplateEngine);
        registry
    }
}

impl Debug for EngineRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut ids: Vec<&String> = self.engines.keys().collect();
        ids.sort();
        f.debug_struct("EngineRegistry").field("engines", &ids).finish()
    }
}

/// Substitutes `{name}` with the parameter `name`.
///
/// `\{`, `\}` and `\\` produce a literal brace or backslash. The output
/// alternates literal and parameter segments, starting and ending with a
/// literal that may be empty.
///
/// # Example
///
/// ```
/// use lingot::{TranslationTemplate, params};
/// use lingot::runtime::{BasicTemplateEngine, Segment, TemplateEngine};
///
/// let template = TranslationTemplate::new("greeting", "Hi {name}!");
/// let segments = BasicTemplateEngine
///     .render(&template, &params! { "name" => "Osama" })
///     .unwrap();
///
/// assert_eq!(
///     segments,
///     vec![
///         Segment::Literal("Hi ".into()),
///         Segment::Parameter("Osama".into()),
///         Segment::Literal("!".into()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicTemplateEngine;

impl TemplateEngine for BasicTemplateEngine {
    fn render(
        &self,
        template: &TranslationTemplate,
        params: &HashMap<String, Value>,
    ) -> Result<Vec<Segment>, RenderError> {
        let source = template.source();
        let mut remaining = source;
        let pieces: Vec<Piece<'_>> = repeat(0.., piece)
            .parse_next(&mut remaining)
            .unwrap_or_default();

        if !remaining.is_empty() {
            return Err(RenderError::UnclosedTemplateInjection {
                template: template.id().to_string(),
                offset: source.len() - remaining.len(),
            });
        }

        let mut segments = Vec::new();
        let mut literal = String::new();
        for piece in pieces {
            match piece {
                Piece::Text(text) => literal.push_str(text),
                Piece::Escaped(c) => literal.push(c),
                Piece::Parameter(name) => {
                    let value = params.get(name).cloned().ok_or_else(|| {
                        RenderError::MissingTemplateParameter {
                            template: template.id().to_string(),
                            parameter: name.to_string(),
                        }
                    })?;
                    segments.push(Segment::Literal(mem::take(&mut literal)));
                    segments.push(Segment::Parameter(value));
                }
            }
        }
        segments.push(Segment::Literal(literal));

        Ok(segments)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Piece<'i> {
    Text(&'i str),
    Escaped(char),
    Parameter(&'i str),
}

fn piece<'i>(input: &mut &'i str) -> ModalResult<Piece<'i>> {
    alt((
        preceded('\\', one_of(['{', '}', '\\'])).map(Piece::Escaped),
        '\\'.value(Piece::Escaped('\\')),
        delimited('{', take_till(0.., '}'), '}').map(Piece::Parameter),
        take_till(1.., ['{', '\\']).map(Piece::Text),
    ))
    .parse_next(input)
}
