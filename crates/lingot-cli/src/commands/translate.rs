//! Implementation of the `lingot translate` command.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use clap::Args;
use lingot::runtime::join_segments;
use lingot::{Gender, LanguageRange, MessageStore, TranslationSpecifier, Value};
use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::{parse_key_val, read_messages};

/// Arguments for the translate command.
#[derive(Debug, Args)]
pub struct TranslateArgs {
    /// Message file to load (source or .json definitions)
    pub file: PathBuf,

    /// Name of the message to translate
    pub name: String,

    /// Preferred language ranges, most preferred first (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Fallback language ranges used when no preferred range matches
    #[arg(long = "default-lang", value_delimiter = ',')]
    pub default_lang: Vec<String>,

    /// Count the message must cover
    #[arg(long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Grammatical gender (m, f, male, female)
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Attributes in key=value format (repeatable)
    #[arg(long = "attr", value_parser = parse_key_val)]
    pub attributes: Vec<(String, String)>,

    /// Parameters in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for translate results.
#[derive(Serialize)]
struct TranslateResult<'a> {
    name: &'a str,
    language: Option<&'a str>,
    template: &'a str,
    result: String,
}

/// Ranges in preference order, earliest weighted lowest.
fn ranked(languages: &[String]) -> Vec<LanguageRange> {
    languages
        .iter()
        .enumerate()
        .map(|(rank, language)| LanguageRange::weighted(language.as_str(), rank as f64))
        .collect()
}

/// Integers become numbers, other values stay strings.
fn param_value(value: &str) -> Value {
    value
        .parse::<i64>()
        .map_or_else(|_| Value::from(value), Value::Number)
}

/// Run the translate command.
pub fn run_translate(args: TranslateArgs) -> Result<i32> {
    let parsed = read_messages(&args.file, false)?;

    let mut store = MessageStore::builder()
        .default_languages(ranked(&args.default_lang))
        .build();
    store.add_all(parsed.messages);

    let request = TranslationSpecifier::builder()
        .name(args.name.as_str())
        .languages(ranked(&args.lang))
        .maybe_count(args.count)
        .maybe_gender(args.gender)
        .attributes(args.attributes.into_iter().collect::<BTreeMap<_, _>>())
        .build();

    let Some(message) = store.resolve(&request) else {
        if store.contains(&args.name) {
            eprintln!(
                "{} no variant of `{}` matches the request",
                "error:".red().bold(),
                args.name
            );
        } else {
            eprintln!("{} unknown message `{}`", "error:".red().bold(), args.name);
            let suggestions = store.suggest(&args.name);
            if !suggestions.is_empty() {
                eprintln!("  did you mean: {}", suggestions.join(", "));
            }
        }
        return Ok(exitcode::DATAERR);
    };

    let params: HashMap<String, Value> = args
        .params
        .iter()
        .map(|(key, value)| (key.clone(), param_value(value)))
        .collect();

    let result = join_segments(&store.render(message, &params).into_diagnostic()?);

    if args.json {
        let output = TranslateResult {
            name: &message.name,
            language: message.language.as_deref(),
            template: message.template.source(),
            result,
        };
        let json_output = serde_json::to_string_pretty(&output).into_diagnostic()?;
        println!("{json_output}");
    } else {
        println!("{result}");
    }

    Ok(exitcode::OK)
}
