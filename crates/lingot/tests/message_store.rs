//! Integration tests for the message store: insertion, resolution and translation.

use lingot::parser::SourceOptions;
use lingot::runtime::LanguageResolutionFn;
use lingot::{
    CountRange, Gender, LanguageRange, MessageStore, TranslationMessage, TranslationSpecifier,
    TranslationTemplate, params,
};

fn store(source: &str) -> MessageStore {
    let mut store = MessageStore::new();
    store.load_source(source, &SourceOptions::default()).unwrap();
    store
}

fn message(name: &str, language: Option<&str>, source: &str) -> TranslationMessage {
    TranslationMessage::builder()
        .name(name)
        .maybe_language(language)
        .template(TranslationTemplate::new(name, source))
        .build()
}

fn resolved_source(store: &MessageStore, request: &TranslationSpecifier) -> Option<String> {
    store
        .resolve(request)
        .map(|message| message.template.source().to_string())
}

const WELCOME: &str = "
    welcome#ar[F]=AR F {name}
    welcome#ar-SA[F]=AR SA F {name}
    welcome#en[F]=EN F {name}
    welcome#ar[M]=AR M {name}
    welcome#ar-SA[M]=AR SA M {name}
    welcome#en[M]=EN M {name}
";

// =========================================================================
// Insertion
// =========================================================================

#[test]
fn equal_identity_replaces_in_place() {
    let mut store = MessageStore::new();
    store.add(message("a", Some("en"), "first"));
    store.add(message("a", Some("fr"), "french"));
    store.add(message("a", Some("en"), "second"));

    let variants = store.variants("a");
    assert_eq!(variants.len(), 2);
    assert_eq!(variants[0].template.source(), "second");
    assert_eq!(variants[1].template.source(), "french");
}

#[test]
fn different_attributes_are_different_variants() {
    let store = store("a[tone-formal] = formal\na[tone-casual] = casual\na = plain");
    assert_eq!(store.len(), 3);
}

#[test]
fn add_all_is_a_sequence_of_adds() {
    let mut store = MessageStore::new();
    store.add_all([
        message("b", None, "1"),
        message("a", None, "2"),
        message("b", None, "3"),
    ]);

    assert_eq!(store.len(), 2);
    assert_eq!(store.names().collect::<Vec<_>>(), vec!["b", "a"]);
    assert_eq!(store.variants("b")[0].template.source(), "3");
}

#[test]
fn messages_iterates_in_name_insertion_order() {
    let store = store("b#en = 1\na#en = 2\nb#fr = 3");
    let sources: Vec<_> = store.messages().map(|m| m.template.source()).collect();
    assert_eq!(sources, vec!["1", "3", "2"]);
}

#[test]
fn empty_store() {
    let store = MessageStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.resolve(&TranslationSpecifier::new("a")).is_none());
}

// =========================================================================
// Filtering
// =========================================================================

#[test]
fn unknown_name_resolves_to_none() {
    let store = store(WELCOME);
    assert!(store.resolve(&TranslationSpecifier::new("goodbye")).is_none());
}

#[test]
fn gender_never_conflicts() {
    let store = store(WELCOME);

    for gender in [Gender::Male, Gender::Female] {
        for language in ["ar", "ar-SA", "en", "fr"] {
            let request = TranslationSpecifier::new("welcome")
                .with_language(language)
                .with_gender(gender);
            let message = store.resolve(&request).unwrap();
            assert_eq!(message.gender, Some(gender), "language: {language}");
        }
    }
}

#[test]
fn gendered_variants_need_a_gender() {
    let store = store(WELCOME);
    let request = TranslationSpecifier::new("welcome").with_language("ar");
    assert!(store.resolve(&request).is_none());
}

#[test]
fn count_ranges_filter_variants() {
    let store = store(
        "items#en[0] = none\n\
         items#en[1] = one\n\
         items#en[2..10] = few\n\
         items#en[11..infinity] = many",
    );

    for (count, expected) in [
        (0, "none"),
        (1, "one"),
        (2, "few"),
        (5, "few"),
        (10, "few"),
        (11, "many"),
        (1_000_000, "many"),
    ] {
        let request = TranslationSpecifier::new("items")
            .with_language("en")
            .with_count(count);
        assert_eq!(
            resolved_source(&store, &request).as_deref(),
            Some(expected),
            "count: {count}"
        );
    }

    let negative = TranslationSpecifier::new("items").with_count(-1);
    assert!(store.resolve(&negative).is_none());
}

#[test]
fn resolved_range_always_contains_count() {
    let store = store("n[2..10] = few\nn = other");
    for count in [-5, 0, 1, 2, 9, 10, 11, 500] {
        let request = TranslationSpecifier::new("n").with_count(count);
        let message = store.resolve(&request).unwrap();
        if let Some(range) = message.count_range {
            assert!(range.contains(count), "count: {count}");
        }
    }
}

#[test]
fn conflicting_attribute_is_filtered_out() {
    let store = store("a[tone-formal] = formal\na = plain");
    let request = TranslationSpecifier::new("a").with_attribute("tone", "casual");
    assert_eq!(resolved_source(&store, &request).as_deref(), Some("plain"));
}

// =========================================================================
// Language selection
// =========================================================================

#[test]
fn arabic_saudi_female() {
    let store = store(WELCOME);
    let request = TranslationSpecifier::builder()
        .name("welcome")
        .languages(vec![LanguageRange::new("ar-SA")])
        .gender(Gender::Female)
        .build();

    let text = store
        .translate(&request, &params! { "name" => "Fatima" })
        .unwrap()
        .unwrap();
    insta::assert_snapshot!(text, @"AR SA F Fatima");
}

#[test]
fn arabic_saudi_male() {
    let store = store(WELCOME);
    let request = TranslationSpecifier::new("welcome")
        .with_language("ar-SA")
        .with_gender(Gender::Male);

    let text = store
        .translate(&request, &params! { "name" => "Osama" })
        .unwrap();
    assert_eq!(text.as_deref(), Some("AR SA M Osama"));
}

#[test]
fn truncated_range_falls_back_to_base_language() {
    let store = store(WELCOME);
    let request = TranslationSpecifier::new("welcome")
        .with_language("ar-EG")
        .with_gender(Gender::Male);
    assert_eq!(
        resolved_source(&store, &request).as_deref(),
        Some("AR M {name}")
    );
}

#[test]
fn lower_weight_is_tried_first() {
    let store = store("a#en = english\na#fr = french");
    let request = TranslationSpecifier::builder()
        .name("a")
        .languages(vec![
            LanguageRange::weighted("en", 0.9),
            LanguageRange::weighted("fr", 0.1),
        ])
        .build();
    assert_eq!(resolved_source(&store, &request).as_deref(), Some("french"));
}

#[test]
fn store_default_languages_apply_when_request_matches_nothing() {
    let mut store = store("a#en = english\na#fr = french");
    store.set_default_languages(vec![LanguageRange::new("fr")]);

    let request = TranslationSpecifier::new("a").with_language("de");
    assert_eq!(resolved_source(&store, &request).as_deref(), Some("french"));
}

#[test]
fn untagged_group_is_the_next_fallback() {
    let store = store("a#en = english\na = neutral\na#fr = french");
    let request = TranslationSpecifier::new("a").with_language("de");
    assert_eq!(resolved_source(&store, &request).as_deref(), Some("neutral"));
}

#[test]
fn first_group_is_the_last_fallback() {
    let store = store("a#fr = french\na#en = english");
    let request = TranslationSpecifier::new("a");
    assert_eq!(resolved_source(&store, &request).as_deref(), Some("french"));
}

#[test]
fn builder_sets_default_languages() {
    let mut store = MessageStore::builder()
        .default_languages(vec![LanguageRange::new("en")])
        .build();
    store.add(message("a", Some("fr"), "french"));
    store.add(message("a", Some("en"), "english"));

    assert_eq!(store.default_languages().len(), 1);
    assert_eq!(
        resolved_source(&store, &TranslationSpecifier::new("a")).as_deref(),
        Some("english")
    );
}

#[test]
fn star_range_is_ignored_in_requests() {
    let store = store("a#en = english\na#fr = french");
    let request = TranslationSpecifier::builder()
        .name("a")
        .languages(vec![LanguageRange::new("*"), LanguageRange::new("fr")])
        .build();
    assert_eq!(resolved_source(&store, &request).as_deref(), Some("french"));
}

#[test]
fn wildcard_region_selects_tagged_group() {
    let store = store("a#en = english\na#ar-SA = saudi");
    let request = TranslationSpecifier::new("a").with_language("*-SA");
    assert_eq!(resolved_source(&store, &request).as_deref(), Some("saudi"));
}

fn last_candidate(_: &[LanguageRange], available: &[&str]) -> Option<usize> {
    available.len().checked_sub(1)
}

#[test]
fn custom_language_resolution() {
    let mut store = MessageStore::builder()
        .language_resolution(last_candidate as LanguageResolutionFn)
        .build();
    store.add(message("a", Some("fr"), "french"));
    store.add(message("a", Some("en"), "english"));

    assert_eq!(
        resolved_source(&store, &TranslationSpecifier::new("a")).as_deref(),
        Some("english")
    );
}

// =========================================================================
// Specificity
// =========================================================================

#[test]
fn more_specific_variant_wins() {
    let store = store(
        "a#en = plain\n\
         a#en[tone-formal] = formal\n\
         a#en[M, tone-formal] = formal sir",
    );

    let request = TranslationSpecifier::new("a")
        .with_language("en")
        .with_gender(Gender::Male)
        .with_attribute("tone", "formal");
    assert_eq!(resolved_source(&store, &request).as_deref(), Some("formal sir"));

    let request = TranslationSpecifier::new("a")
        .with_language("en")
        .with_attribute("tone", "formal");
    assert_eq!(resolved_source(&store, &request).as_deref(), Some("formal"));
}

#[test]
fn unrequested_attribute_does_not_score() {
    let store = store("a#en[tone-formal] = formal\na#en = plain");
    let request = TranslationSpecifier::new("a").with_language("en");
    // Both survive and score zero, so the first one wins.
    assert_eq!(resolved_source(&store, &request).as_deref(), Some("formal"));
}

#[test]
fn count_range_scores_over_plain() {
    let store = store("n#en = other\nn#en[1] = one");
    let request = TranslationSpecifier::new("n").with_language("en").with_count(1);
    assert_eq!(resolved_source(&store, &request).as_deref(), Some("one"));

    let request = TranslationSpecifier::new("n").with_language("en").with_count(2);
    assert_eq!(resolved_source(&store, &request).as_deref(), Some("other"));
}

#[test]
fn equal_scores_keep_insertion_order() {
    let mut store = MessageStore::new();
    store.add(
        TranslationMessage::builder()
            .name("n")
            .count_range(CountRange::new(0, 10))
            .template(TranslationTemplate::new("n", "wide"))
            .build(),
    );
    store.add(
        TranslationMessage::builder()
            .name("n")
            .count_range(CountRange::new(0, 5))
            .template(TranslationTemplate::new("n", "narrow"))
            .build(),
    );

    let request = TranslationSpecifier::new("n").with_count(3);
    assert_eq!(resolved_source(&store, &request).as_deref(), Some("wide"));
}

// =========================================================================
// Suggestions
// =========================================================================

#[test]
fn suggests_close_names() {
    let store = store("welcome = 1\nwelcomes = 2\nfarewell = 3");
    assert_eq!(store.suggest("welcom"), vec!["welcome", "welcomes"]);
    assert!(store.suggest("zzzzzz").is_empty());
    assert!(store.suggest("welcome").contains(&"welcomes".to_string()));
}

#[test]
fn store_is_cloneable_snapshot() {
    let original = store("a = 1");
    let mut copy = original.clone();
    copy.add(message("b", None, "2"));

    assert_eq!(original.len(), 1);
    assert_eq!(copy.len(), 2);
}
