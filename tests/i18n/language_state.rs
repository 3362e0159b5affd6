//! Language initialization, selection and persistence.

use afa_i18n::binding::BindingRegistry;
use afa_i18n::document::{Document, MemoryDocument};
use afa_i18n::i18n::{DEFAULT_LANGUAGE, I18nContext, Language, TranslationStore};
use afa_i18n::storage::{FileStorage, LANGUAGE_STORAGE_KEY, MemoryStorage, Storage};

fn context(storage: &MemoryStorage) -> I18nContext<'static> {
    I18nContext::new(TranslationStore::embedded(), Box::new(storage.clone()))
}

#[test]
/// What: A selection survives into a fresh session and beats the browser locale.
fn selection_persists_across_sessions() {
    let storage = MemoryStorage::new();
    let mut first = context(&storage);
    first.set_language("fr", &mut MemoryDocument::new(), &mut BindingRegistry::new());

    let mut second = context(&storage);
    let lang = second.init_language(
        &mut MemoryDocument::new(),
        &mut BindingRegistry::new(),
        Some("en-GB"),
    );
    assert_eq!(lang, Language::Fr);
}

#[test]
/// What: An unsupported persisted code yields the default, not the browser locale.
fn unsupported_persisted_code_yields_default() {
    let mut storage = MemoryStorage::new();
    storage
        .set_item(LANGUAGE_STORAGE_KEY, "de")
        .expect("memory storage accepts writes");
    let mut ctx = context(&storage);
    let lang = ctx.init_language(
        &mut MemoryDocument::new(),
        &mut BindingRegistry::new(),
        Some("ca-ES"),
    );
    assert_eq!(lang, DEFAULT_LANGUAGE);
    assert_eq!(
        storage.get_item(LANGUAGE_STORAGE_KEY).expect("memory read").as_deref(),
        Some("es")
    );
}

#[test]
/// What: Without a saved choice the browser prefix decides, if supported.
fn browser_locale_used_only_without_saved_choice() {
    let storage = MemoryStorage::new();
    assert_eq!(context(&storage).resolve_initial_language(Some("ca-AD")), Language::Ca);
    assert_eq!(context(&storage).resolve_initial_language(Some("pt-BR")), DEFAULT_LANGUAGE);
    assert_eq!(context(&storage).resolve_initial_language(Some("e")), DEFAULT_LANGUAGE);
}

#[test]
/// What: Init renders the page exactly once in the resolved language.
fn init_applies_translations() {
    let storage = MemoryStorage::new();
    let mut ctx = context(&storage);
    let mut doc = MemoryDocument::new();
    let body = doc.body().expect("skeleton has body");
    let home = doc.append_element(body, "a", &[("data-i18n", "nav.home")]);
    let mut registry = BindingRegistry::new();

    ctx.init_language(&mut doc, &mut registry, Some("ca"));
    assert_eq!(doc.text_content(home), "Inici");
    assert_eq!(ctx.t("nav.home"), "Inici");
    assert_eq!(registry.len(), 1);
}

#[test]
/// What: The file backend carries the selection between processes.
fn file_storage_round_trips_selection() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("storage.json");
    {
        let mut ctx = I18nContext::new(
            TranslationStore::embedded(),
            Box::new(FileStorage::new(path.clone())),
        );
        ctx.set_language("en", &mut MemoryDocument::new(), &mut BindingRegistry::new());
    }
    let ctx = I18nContext::new(TranslationStore::embedded(), Box::new(FileStorage::new(path)));
    assert_eq!(ctx.resolve_initial_language(Some("fr")), Language::En);
}

#[test]
/// What: A corrupt storage file is treated as "nothing saved".
fn corrupt_storage_file_is_ignored() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "{not json").expect("write corrupt file");
    let ctx = I18nContext::new(TranslationStore::embedded(), Box::new(FileStorage::new(path)));
    assert_eq!(ctx.persisted_language(), None);
    assert_eq!(ctx.resolve_initial_language(Some("fr-FR")), Language::Fr);
}
