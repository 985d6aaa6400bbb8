//! Error types for the message store.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;

/// An error that occurred while rendering a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A `{` has no matching `}`.
    #[error("unclosed template injection at `{template}` (offset {offset})")]
    UnclosedTemplateInjection { template: String, offset: usize },

    /// A `{parameter}` was not supplied.
    #[error("injection parameter {{{parameter}}} not provided at `{template}`")]
    MissingTemplateParameter { template: String, parameter: String },

    /// The template names an engine the store does not have.
    #[error("unknown template engine '{engine}' for `{template}`")]
    UnknownTemplateEngine { template: String, engine: String },
}

/// Errors that occur while loading messages into a store.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a message file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A `.json` definitions file is not a JSON object of definitions.
    #[error("invalid definitions in '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
