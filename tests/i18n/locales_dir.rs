//! Loading locale files from a directory.

use std::fs;

use afa_i18n::i18n::{Language, ReplacementSet, TranslationStore, translate};

#[test]
/// What: Missing non-default files fall back; a missing default file is an error.
fn directory_store_requires_default_language() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(TranslationStore::from_dir(dir.path()).is_err());

    fs::write(
        dir.path().join("es.yml"),
        "es:\n  nav:\n    home: \"Inicio\"\n    blog: \"Blog\"\n",
    )
    .expect("write es");
    fs::write(dir.path().join("fr.yml"), "fr:\n  nav:\n    home: \"Accueil\"\n").expect("write fr");
    fs::write(dir.path().join("en.yml"), ": : not yaml [").expect("write en");

    let store = TranslationStore::from_dir(dir.path()).expect("default language present");
    let none = ReplacementSet::new();
    assert_eq!(translate(&store, "nav.home", &none, Language::Fr), "Accueil");
    assert_eq!(translate(&store, "nav.blog", &none, Language::Fr), "Blog");
    assert_eq!(translate(&store, "nav.home", &none, Language::En), "Inicio");
    assert_eq!(store.missing_keys(Language::Fr), vec!["nav.blog".to_string()]);
    assert_eq!(store.key_count(Language::Ca), 0);
}
