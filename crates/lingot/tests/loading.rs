//! Integration tests for loading files and structured definitions.

use std::collections::BTreeMap;
use std::io::Write;

use lingot::parser::{
    MessageDefinition, MessageObject, SourceOptions, definitions_to_messages,
    parse_json_definitions,
};
use lingot::{
    CountRange, Gender, LanguageDirection, LanguageRange, LoadError, MessageStore, ParseError,
    TranslationSpecifier, language_direction, params,
};
use tempfile::{Builder, NamedTempFile};

// =========================================================================
// Source files
// =========================================================================

#[test]
fn load_file_parses_and_adds() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "hello#en = Hello, {{name}}!").unwrap();
    writeln!(file, "hello#fr = Bonjour, {{name}} !").unwrap();
    file.flush().unwrap();

    let mut store = MessageStore::new();
    let count = store.load_file(file.path(), &SourceOptions::default()).unwrap();
    assert_eq!(count, 2);

    let text = store
        .translate(
            &TranslationSpecifier::new("hello").with_language("fr-CA"),
            &params! { "name" => "Léa" },
        )
        .unwrap();
    assert_eq!(text.as_deref(), Some("Bonjour, Léa !"));
}

#[test]
fn load_file_not_found() {
    let mut store = MessageStore::new();
    let error = store
        .load_file("/nonexistent/path/messages.props", &SourceOptions::default())
        .unwrap_err();

    assert!(matches!(error, LoadError::Io { .. }));
    assert!(error.to_string().contains("/nonexistent/path/messages.props"));
}

#[test]
fn load_file_names_the_path_in_parse_errors() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "ok = 1").unwrap();
    writeln!(file, "broken").unwrap();
    file.flush().unwrap();

    let mut store = MessageStore::new();
    let options = SourceOptions::builder().strict(true).build();
    let error = store.load_file(file.path(), &options).unwrap_err();

    let LoadError::Parse(parse) = error else {
        panic!("expected a parse error");
    };
    assert!(matches!(parse, ParseError::MissingAssignmentOperator { .. }));
    assert_eq!(parse.line(), 2);
    assert_eq!(
        parse.location().file.as_deref(),
        Some(file.path().display().to_string().as_str())
    );
    assert!(store.is_empty());
}

#[test]
fn explicit_file_name_wins_over_path() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "broken").unwrap();
    file.flush().unwrap();

    let options = SourceOptions::builder()
        .strict(true)
        .file_name("en.props")
        .build();
    let error = MessageStore::new().load_file(file.path(), &options).unwrap_err();

    let LoadError::Parse(parse) = error else {
        panic!("expected a parse error");
    };
    assert_eq!(parse.location().file.as_deref(), Some("en.props"));
}

// =========================================================================
// Structured definitions
// =========================================================================

#[test]
fn text_definition_uses_key_metadata() {
    let definitions = BTreeMap::from([(
        "items#en[2..10]".to_string(),
        MessageDefinition::from("A few items"),
    )]);

    let parsed = definitions_to_messages(&definitions, &SourceOptions::default()).unwrap();
    let message = &parsed.messages[0];
    assert_eq!(message.name, "items");
    assert_eq!(message.language.as_deref(), Some("en"));
    assert_eq!(message.count_range, Some(CountRange::new(2, 10)));
    assert_eq!(message.template.source(), "A few items");
}

#[test]
fn object_definition_overrides_key() {
    let definitions = BTreeMap::from([(
        "items#en[M]".to_string(),
        MessageDefinition::from(MessageObject {
            gender: Some(Gender::Female),
            count: Some(CountRange::at_least(11)),
            template: Some("Many items".into()),
            ..MessageObject::default()
        }),
    )]);

    let parsed = definitions_to_messages(&definitions, &SourceOptions::default()).unwrap();
    let message = &parsed.messages[0];
    assert_eq!(message.language.as_deref(), Some("en"));
    assert_eq!(message.gender, Some(Gender::Female));
    assert_eq!(message.count_range, Some(CountRange::at_least(11)));
    assert_eq!(message.template.source(), "Many items");
}

#[test]
fn definitions_follow_strictness() {
    let definitions = BTreeMap::from([("items[bogus]".to_string(), MessageDefinition::from("x"))]);

    let lenient = definitions_to_messages(&definitions, &SourceOptions::default()).unwrap();
    assert_eq!(lenient.messages.len(), 1);
    assert_eq!(lenient.tolerated.len(), 1);

    let strict = SourceOptions::builder().strict(true).build();
    let error = definitions_to_messages(&definitions, &strict).unwrap_err();
    assert!(matches!(error, ParseError::InvalidModifier { .. }));
}

#[test]
fn json_definitions_parse() {
    let definitions = parse_json_definitions(
        r#"{
            "greeting#en": "Hello {name}",
            "greeting#ar": { "gender": "female", "template": "AR F {name}" },
            "greeting#ar[m]": { "attributes": { "tone": "formal" }, "template": "AR M {name}" }
        }"#,
    )
    .unwrap();

    let parsed = definitions_to_messages(&definitions, &SourceOptions::default()).unwrap();
    assert_eq!(parsed.messages.len(), 3);

    // Keys are processed in sorted order.
    let ids: Vec<_> = parsed.messages.iter().map(|m| m.template.id()).collect();
    assert_eq!(ids, vec!["greeting#ar", "greeting#ar[m]", "greeting#en"]);
    assert_eq!(parsed.messages[1].gender, Some(Gender::Male));
    assert_eq!(parsed.messages[1].attributes["tone"], "formal");
}

#[test]
fn json_definitions_reject_non_objects() {
    assert!(parse_json_definitions("[1, 2, 3]").is_err());
    assert!(parse_json_definitions(r#"{ "a": { "count": "not a range" } }"#).is_err());
}

#[test]
fn load_json_file() {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{ "items#en[1]": "One item", "items#en": {{ "count": "2..infinity", "template": "{{n}} items" }} }}"#
    )
    .unwrap();
    file.flush().unwrap();

    let mut store = MessageStore::new();
    assert_eq!(store.load_file(file.path(), &SourceOptions::default()).unwrap(), 2);

    let request = TranslationSpecifier::new("items").with_language("en").with_count(5);
    let text = store.translate(&request, &params! { "n" => 5 }).unwrap();
    assert_eq!(text.as_deref(), Some("5 items"));
}

#[test]
fn malformed_json_file_is_a_json_error() {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, "not json").unwrap();
    file.flush().unwrap();

    let error = MessageStore::new()
        .load_file(file.path(), &SourceOptions::default())
        .unwrap_err();
    assert!(matches!(error, LoadError::Json { .. }));
}

// =========================================================================
// Localized value maps
// =========================================================================

#[test]
fn select_localized_uses_store_defaults() {
    let mut store = MessageStore::new();
    store.set_default_languages(vec![LanguageRange::new("en")]);

    let values = BTreeMap::from([
        ("title#ar".to_string(), 1),
        ("title#en".to_string(), 2),
        ("other".to_string(), 3),
    ]);

    assert_eq!(
        store.select_localized(&values, "title", &[LanguageRange::new("ar-SA")]),
        Some((Some("ar"), &1))
    );
    assert_eq!(
        store.select_localized(&values, "title", &[LanguageRange::new("de")]),
        Some((Some("en"), &2))
    );
    assert_eq!(store.select_localized(&values, "missing", &[]), None);
}

#[test]
fn select_localized_falls_back_to_first_entry() {
    let store = MessageStore::new();
    let values = BTreeMap::from([("t#fr".to_string(), "fr"), ("t#de".to_string(), "de")]);

    assert_eq!(
        store.select_localized(&values, "t", &[]),
        Some((Some("de"), &"de"))
    );
}

// =========================================================================
// Language direction
// =========================================================================

#[test]
fn direction_follows_primary_subtag() {
    for tag in ["ar", "ar-SA", "fa-IR", "he", "ur_PK", "yi", "ckb"] {
        assert_eq!(language_direction(tag), LanguageDirection::RightToLeft, "tag: {tag}");
    }
    for tag in ["en", "fr-CA", "", "arn", "zh-Hant-TW"] {
        assert_eq!(language_direction(tag), LanguageDirection::LeftToRight, "tag: {tag}");
    }
}
