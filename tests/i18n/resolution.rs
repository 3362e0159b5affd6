//! Key resolution against the built-in locales.

use std::collections::HashMap;

use afa_i18n::i18n::{
    DEFAULT_LANGUAGE, Language, ReplacementSet, SUPPORTED_LANGUAGES, TranslationStore,
    format_translation, translate,
};

fn none() -> ReplacementSet {
    ReplacementSet::new()
}

#[test]
/// What: A key missing from a partial locale renders the default-language text.
fn partial_locale_falls_back_to_default_language() {
    let store = TranslationStore::embedded();
    assert_eq!(store.get(Language::Ca, "nav.menu"), None);
    let es = translate(store, "nav.menu", &none(), DEFAULT_LANGUAGE);
    assert!(!es.is_empty());
    assert_eq!(translate(store, "nav.menu", &none(), Language::Ca), es);
}

#[test]
/// What: Keys absent everywhere come back verbatim in every language.
fn unknown_key_is_echoed_in_every_language() {
    let store = TranslationStore::embedded();
    for lang in SUPPORTED_LANGUAGES {
        assert_eq!(translate(store, "hero.nonexistent", &none(), lang), "hero.nonexistent");
    }
    assert_eq!(translate(store, "", &none(), Language::En), "");
}

#[test]
/// What: Named placeholders are substituted; absent ones render empty.
fn placeholders_substitute_or_vanish() {
    let store = TranslationStore::from_maps([(
        Language::Es,
        HashMap::from([("greet".to_string(), "Hello {{name}}".to_string())]),
    )]);
    let ana = ReplacementSet::new().with("name", "Ana");
    assert_eq!(translate(&store, "greet", &ana, Language::Es), "Hello Ana");
    assert_eq!(translate(&store, "greet", &none(), Language::Es), "Hello ");
    assert_eq!(translate(&store, "greet", &ana, Language::Fr), "Hello Ana");
}

#[test]
/// What: Substituted text is never scanned for further tokens.
fn substitution_is_single_pass() {
    let args = ReplacementSet::new()
        .with("a", "{{b}}")
        .with("b", "nested");
    assert_eq!(format_translation("[{{a}}] [{{ b }}]", &args), "[{{b}}] [nested]");
}

#[test]
/// What: Numbers stringify naturally and null renders as nothing.
fn scalar_arguments_render_naturally() {
    let store = TranslationStore::embedded();
    let args = ReplacementSet::new().with("year", 4).with("players", serde_json::Value::Null);
    assert_eq!(
        translate(store, "programas.plan.label", &args, Language::En),
        "Year 4:  players"
    );
}

#[test]
/// What: Every locale defines the selector label and the document title.
fn every_locale_has_core_keys() {
    let store = TranslationStore::embedded();
    for lang in SUPPORTED_LANGUAGES {
        assert!(store.get(lang, "meta.title").is_some(), "{lang} lacks meta.title");
        assert!(store.get(lang, "lang.select").is_some(), "{lang} lacks lang.select");
    }
    assert!(store.missing_keys(DEFAULT_LANGUAGE).is_empty());
}
