//! Language state: the current language, its persistence and its application.

use crate::binding::{ApplyReport, BindingRegistry, ContentMode, apply_bindings};
use crate::document::{Document, ElementId};
use crate::i18n::detection::language_from_locale;
use crate::i18n::language::{DEFAULT_LANGUAGE, Language};
use crate::i18n::store::TranslationStore;
use crate::i18n::translations::{ReplacementSet, translate};
use crate::storage::{LANGUAGE_STORAGE_KEY, Storage, read_best_effort, write_best_effort};

/// Owner of the current language.
///
/// Holds the shared read-only store and the client storage the selection is
/// persisted to. The language changes only through [`I18nContext::init_language`],
/// [`I18nContext::set_language`] and [`I18nContext::apply_translations`].
pub struct I18nContext<'a> {
    store: &'a TranslationStore,
    storage: Box<dyn Storage + 'a>,
    current: Language,
}

impl<'a> I18nContext<'a> {
    /// What: Create a context rendering from `store` and persisting to `storage`.
    ///
    /// Inputs:
    /// - `store`: Translation store
    /// - `storage`: Client storage backend
    ///
    /// Output:
    /// - Context whose current language is the default until initialized
    #[must_use]
    pub const fn new(store: &'a TranslationStore, storage: Box<dyn Storage + 'a>) -> Self {
        Self {
            store,
            storage,
            current: DEFAULT_LANGUAGE,
        }
    }

    /// Language used by [`I18nContext::translate`] and the last render pass.
    #[must_use]
    pub const fn current_language(&self) -> Language {
        self.current
    }

    /// Store this context renders from.
    #[must_use]
    pub const fn store(&self) -> &'a TranslationStore {
        self.store
    }

    /// Resolve `key` with `args` in the current language.
    #[must_use]
    pub fn translate(&self, key: &str, args: &ReplacementSet) -> String {
        translate(self.store, key, args, self.current)
    }

    /// Resolve `key` without arguments in the current language.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.translate(key, &ReplacementSet::new())
    }

    /// Resolve `key` with `args` in an explicit language.
    #[must_use]
    pub fn translate_in(&self, key: &str, args: &ReplacementSet, lang: Language) -> String {
        translate(self.store, key, args, lang)
    }

    /// Raw persisted language entry, if storage holds one and can be read.
    #[must_use]
    pub fn persisted_language(&self) -> Option<String> {
        read_best_effort(self.storage.as_ref(), LANGUAGE_STORAGE_KEY)
    }

    /// What: Persist `lang` as the user's selection.
    ///
    /// Output:
    /// - `true` when storage accepted the write
    pub fn persist_language(&mut self, lang: Language) -> bool {
        write_best_effort(self.storage.as_mut(), LANGUAGE_STORAGE_KEY, lang.code())
    }

    /// What: Decide the startup language without rendering.
    ///
    /// Inputs:
    /// - `browser_locale`: Locale reported by the client (e.g. `fr-FR`), if any
    ///
    /// Output:
    /// - Persisted language when present; the default when the persisted code is unsupported;
    ///   otherwise the browser locale's two-letter prefix when supported; otherwise the default
    ///
    /// Details:
    /// - A persisted entry always wins over the browser locale, even when it is invalid
    /// - Unreadable storage counts as no entry
    #[must_use]
    pub fn resolve_initial_language(&self, browser_locale: Option<&str>) -> Language {
        if let Some(saved) = self.persisted_language() {
            tracing::debug!(saved = %saved, "using persisted language");
            return Language::from_code_or_default(&saved);
        }
        if let Some(lang) = browser_locale.and_then(language_from_locale) {
            tracing::debug!(lang = %lang, "using browser locale");
            return lang;
        }
        DEFAULT_LANGUAGE
    }

    /// What: Initialize the language at startup and render the page once.
    ///
    /// Inputs:
    /// - `doc`: Page
    /// - `registry`: Binding registry of the page
    /// - `browser_locale`: Locale reported by the client, if any
    ///
    /// Output:
    /// - Language that was applied
    pub fn init_language(
        &mut self,
        doc: &mut dyn Document,
        registry: &mut BindingRegistry,
        browser_locale: Option<&str>,
    ) -> Language {
        let lang = self.resolve_initial_language(browser_locale);
        tracing::info!(lang = %lang, "initializing language");
        self.apply_translations(lang, doc, registry);
        lang
    }

    /// What: Switch to a user-selected language.
    ///
    /// Inputs:
    /// - `code`: Selected code; unsupported codes select the default language
    /// - `doc`: Page
    /// - `registry`: Binding registry of the page
    ///
    /// Output:
    /// - Language that was applied
    pub fn set_language(
        &mut self,
        code: &str,
        doc: &mut dyn Document,
        registry: &mut BindingRegistry,
    ) -> Language {
        let lang = Language::from_code_or_default(code);
        tracing::info!(requested = %code, lang = %lang, "language selected");
        self.apply_translations(lang, doc, registry);
        lang
    }

    /// What: Make `lang` current, persist it and render the whole page.
    ///
    /// Inputs:
    /// - `lang`: Language to apply
    /// - `doc`: Page
    /// - `registry`: Binding registry, synced against `doc` before rendering
    ///
    /// Output:
    /// - Render pass counts
    ///
    /// Details:
    /// - A storage failure is logged and does not stop the render
    pub fn apply_translations(
        &mut self,
        lang: Language,
        doc: &mut dyn Document,
        registry: &mut BindingRegistry,
    ) -> ApplyReport {
        self.current = lang;
        let report = apply_bindings(doc, registry, self.store, lang);
        self.persist_language(lang);
        report
    }

    /// What: Rebind one message element and render it in the current language.
    ///
    /// Inputs:
    /// - `doc`: Page
    /// - `el`: Message element
    /// - `key`: New key; blank clears the element
    /// - `args`: Placeholder arguments
    /// - `mode`: Text or trusted markup
    pub fn update_dynamic_message(
        &self,
        doc: &mut dyn Document,
        el: ElementId,
        key: &str,
        args: &ReplacementSet,
        mode: ContentMode,
    ) {
        crate::binding::update_dynamic_message(doc, el, key, args, mode, self.store, self.current);
    }
}

impl std::fmt::Debug for I18nContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18nContext")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}
