//! CLI command implementations.

mod check;
mod coverage;
mod list;
mod translate;

use std::fs::read_to_string;
use std::path::Path;

use lingot::parser::{
    ParsedSource, SourceOptions, definitions_to_messages, parse_json_definitions,
    parse_source_with_diagnostics,
};
use miette::{IntoDiagnostic, Result, WrapErr, miette};
use tracing::debug;

use crate::output::LingotDiagnostic;

pub use check::{CheckArgs, run_check};
pub use coverage::{CoverageArgs, run_coverage};
pub use list::{ListArgs, run_list};
pub use translate::{TranslateArgs, run_translate};

/// Whether a path holds JSON definitions rather than message source.
fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("json"))
}

/// Read and parse a message file, turning parse errors into diagnostics.
fn read_messages(path: &Path, strict: bool) -> Result<ParsedSource> {
    let content = read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("cannot read {}", path.display()))?;

    let options = SourceOptions::builder()
        .strict(strict)
        .file_name(path.display().to_string())
        .build();

    let json = is_json(path);
    debug!(path = %path.display(), json, strict, "reading message file");

    if json {
        let definitions = parse_json_definitions(&content)
            .map_err(|e| miette!("invalid definitions in {}: {}", path.display(), e))?;
        // Definition locations are entry positions, not file lines.
        return definitions_to_messages(&definitions, &options).map_err(|e| miette!("{e}"));
    }

    parse_source_with_diagnostics(&content, &options)
        .map_err(|e| LingotDiagnostic::from_parse_error(path, &content, &e).into())
}

/// Parse a `key=value` argument.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid argument '{s}': expected key=value"))?;
    Ok((key.to_string(), value.to_string()))
}
