//! Parse error types for lingot sources.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;
use thiserror::Error;

/// Where a statement starts in its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    /// File name for diagnostics, if the source came from a file.
    pub file: Option<String>,
    /// 1-based line number of the first line of the statement.
    pub line: usize,
    /// The first physical line of the statement, verbatim.
    pub text: String,
}

impl SourceLocation {
    pub fn new(line: usize, text: impl Into<String>) -> Self {
        Self {
            file: None,
            line,
            text: text.into(),
        }
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{}:{}",
            self.file.as_deref().unwrap_or("unknown"),
            self.line
        )
    }
}

/// A problem found while parsing message source.
///
/// In strict mode the first problem aborts parsing. In lenient mode each
/// problem is recorded and parsing continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A non-comment line has no `=`.
    #[error("missing `=` operator for key `{key}` on {location}")]
    MissingAssignmentOperator {
        key: String,
        location: SourceLocation,
    },

    /// A quoted value reached the end of input without its closing quote.
    #[error("unclosed value literal for key `{key}` on {location}")]
    UnclosedValueString {
        key: String,
        location: SourceLocation,
    },

    /// A metadata block opener has no matching closer.
    #[error("unclosed metadata object for key `{key}` on {location}")]
    UnclosedMetadataObject {
        key: String,
        location: SourceLocation,
    },

    /// A bare metadata token is neither a gender nor a count range.
    #[error("invalid modifier `{modifier}` for key `{key}` on {location}")]
    InvalidModifier {
        key: String,
        modifier: String,
        location: SourceLocation,
    },
}

impl ParseError {
    pub fn location(&self) -> &SourceLocation {
        match self {
            ParseError::MissingAssignmentOperator { location, .. }
            | ParseError::UnclosedValueString { location, .. }
            | ParseError::UnclosedMetadataObject { location, .. }
            | ParseError::InvalidModifier { location, .. } => location,
        }
    }

    /// The statement key as written, or the decoded message name for
    /// metadata problems.
    pub fn key(&self) -> &str {
        match self {
            ParseError::MissingAssignmentOperator { key, .. }
            | ParseError::UnclosedValueString { key, .. }
            | ParseError::UnclosedMetadataObject { key, .. }
            | ParseError::InvalidModifier { key, .. } => key,
        }
    }

    pub fn line(&self) -> usize {
        self.location().line
    }

    /// Attach a file name to this error's location.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        let location = match &mut self {
            ParseError::MissingAssignmentOperator { location, .. }
            | ParseError::UnclosedValueString { location, .. }
            | ParseError::UnclosedMetadataObject { location, .. }
            | ParseError::InvalidModifier { location, .. } => location,
        };
        location.file = Some(file.into());
        self
    }

    /// Short machine-readable name of the problem kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::MissingAssignmentOperator { .. } => "missing-assignment-operator",
            ParseError::UnclosedValueString { .. } => "unclosed-value-string",
            ParseError::UnclosedMetadataObject { .. } => "unclosed-metadata-object",
            ParseError::InvalidModifier { .. } => "invalid-modifier",
        }
    }
}
