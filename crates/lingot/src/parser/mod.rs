//! Message source parser.
//!
//! Source text is read in three steps: [`StatementScanner`] splits it into
//! `key = value` statements, [`decode_key`] splits each key into name, tag
//! and metadata tokens, and [`classify`] decides what each token means.
//! [`parse_source`] runs all three and builds messages.

mod definitions;
pub mod error;
mod key;
mod modifier;
mod scanner;
mod source;

pub use definitions::{
    MessageDefinition, MessageObject, definitions_to_messages, parse_json_definitions,
};
pub use error::{ParseError, SourceLocation};
pub use key::{MetadataToken, StatementKey, UnclosedMetadata, decode_key};
pub use modifier::{Modifier, classify};
pub use scanner::{Statement, StatementScanner, escape_value};
pub use source::{ParsedSource, SourceOptions, parse_source, parse_source_with_diagnostics};
