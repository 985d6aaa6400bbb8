//! Miette diagnostic wrapper for lingot parse errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use lingot::ParseError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for lingot parse errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(lingot::parse))]
pub struct LingotDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{kind}")]
    span: SourceSpan,

    kind: &'static str,

    message: String,

    #[help]
    help: Option<String>,
}

impl LingotDiagnostic {
    /// Create a diagnostic spanning the first line of the failing statement.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Self {
        let line = err.line();

        let offset = content
            .split_inclusive('\n')
            .take(line.saturating_sub(1))
            .map(str::len)
            .sum::<usize>()
            .min(content.len());
        let length = content[offset..]
            .lines()
            .next()
            .map_or(0, str::len)
            .max(1)
            .min(content.len() - offset);

        LingotDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, length).into(),
            kind: err.kind(),
            message: err.to_string(),
            help: help_for(err),
        }
    }
}

fn help_for(err: &ParseError) -> Option<String> {
    let help = match err {
        ParseError::MissingAssignmentOperator { .. } => {
            "statements take the form `key = value`".to_string()
        }
        ParseError::UnclosedValueString { .. } => {
            "close the value with the same quote character it opened with".to_string()
        }
        ParseError::UnclosedMetadataObject { .. } => {
            "metadata blocks close with the bracket matching their opener".to_string()
        }
        ParseError::InvalidModifier { modifier, .. } => format!(
            "`{modifier}` is not a gender or count range; use `key-value` for an attribute"
        ),
    };
    Some(help)
}
