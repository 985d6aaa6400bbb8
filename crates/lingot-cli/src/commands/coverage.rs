//! Coverage command implementation.

use std::path::PathBuf;

use clap::Args;
use lingot::runtime::basic_language_resolution;
use lingot::{LanguageRange, MessageStore};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use super::read_messages;
use crate::output::table::{LanguageCoverage, format_coverage_table};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Message file to inspect (source or .json definitions).
    pub file: PathBuf,

    /// Languages to check coverage for (comma-separated).
    #[arg(long, value_delimiter = ',', required = true)]
    pub lang: Vec<String>,

    /// Exit with non-zero code if any language is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    language: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
}

/// Names in `store` with no variant reachable from `language`.
fn missing_names(store: &MessageStore, language: &str) -> Vec<String> {
    let ranges = [LanguageRange::new(language)];

    store
        .names()
        .filter(|name| {
            let tags: Vec<&str> = store
                .variants(name)
                .iter()
                .filter_map(|message| message.language.as_deref())
                .collect();
            basic_language_resolution(&ranges, &tags).is_none()
        })
        .map(str::to_string)
        .collect()
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let parsed = read_messages(&args.file, false)?;

    let mut store = MessageStore::new();
    store.add_all(parsed.messages);
    let name_count = store.names().count();

    let coverage_data: Vec<LanguageCoverage> = args
        .lang
        .iter()
        .map(|lang| {
            let missing = missing_names(&store, lang);
            LanguageCoverage {
                language: lang.clone(),
                translated: name_count - missing.len(),
                missing,
            }
        })
        .collect();

    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                language: c.language.clone(),
                translated: c.translated,
                total: name_count,
                missing: c.missing.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{json_output}");
    } else {
        println!("{}", format_coverage_table(name_count, &coverage_data));

        for lang_coverage in &coverage_data {
            if !lang_coverage.missing.is_empty() {
                println!("\nMissing in {}:", lang_coverage.language);
                for name in &lang_coverage.missing {
                    println!("  - {name}");
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
