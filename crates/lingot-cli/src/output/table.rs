//! Table formatting utilities for CLI output.

use comfy_table::{ContentArrangement, Table, presets};
use lingot::TranslationMessage;

/// Coverage data for a single language.
pub struct LanguageCoverage {
    /// Language range checked (e.g., "es", "fr-CA").
    pub language: String,
    /// Number of message names with a variant for the language.
    pub translated: usize,
    /// Names of messages with no variant for the language.
    pub missing: Vec<String>,
}

/// Format messages as a table, one row per variant.
pub fn format_messages_table<'a>(
    messages: impl IntoIterator<Item = &'a TranslationMessage>,
) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Name",
        "Language",
        "Gender",
        "Count",
        "Attributes",
        "Template",
    ]);

    for message in messages {
        let attributes = message
            .attributes
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join(", ");

        table.add_row(vec![
            message.name.clone(),
            message.language.clone().unwrap_or_default(),
            message
                .gender
                .map(|gender| gender.as_str().to_string())
                .unwrap_or_default(),
            message
                .count_range
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            attributes,
            message.template.source().to_string(),
        ]);
    }

    table
}

/// Format coverage data as a table.
pub fn format_coverage_table(name_count: usize, coverage: &[LanguageCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Coverage", "Missing"]);

    for lang in coverage {
        table.add_row(vec![
            lang.language.clone(),
            format!("{}/{}", lang.translated, name_count),
            lang.missing.len().to_string(),
        ]);
    }

    table
}
