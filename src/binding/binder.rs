//! Render pass writing resolved strings into the page.

use serde::Serialize;

use crate::binding::dynamic::refresh_dynamic_labels;
use crate::binding::markers::{ARGS_ATTR, HTML_MODE, I18N_ATTR, MODE_ATTR};
use crate::binding::registry::{Binding, BindingRegistry, RenderMode};
use crate::binding::selector::update_language_ui;
use crate::document::{Document, ElementId};
use crate::i18n::{Language, ReplacementSet, TranslationStore, translate};

/// Key of the document title.
pub const TITLE_KEY: &str = "meta.title";

/// How a dynamic message is written into its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentMode {
    /// Plain text.
    #[default]
    Text,
    /// Trusted markup.
    Html,
}

/// Summary of one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    /// Language rendered.
    pub language: Language,
    /// Elements whose bindings were (re)derived before rendering.
    pub derived: usize,
    /// Bindings written.
    pub rendered: usize,
    /// Dynamic labels written after the main pass.
    pub dynamic: usize,
}

/// What: Write one binding's resolved string.
///
/// Inputs:
/// - `doc`: Page
/// - `binding`: Binding to render
/// - `store`: Translation store
/// - `lang`: Render language
pub fn render_binding(
    doc: &mut dyn Document,
    binding: &Binding,
    store: &TranslationStore,
    lang: Language,
) {
    let value = translate(store, &binding.key, &binding.args, lang);
    let el = binding.element;
    match &binding.mode {
        RenderMode::Text => doc.set_text_content(el, &value),
        RenderMode::Html => doc.set_inner_html(el, &value),
        RenderMode::Attribute(name) => doc.set_attribute(el, name, &value),
        RenderMode::Placeholder => doc.set_placeholder(el, &value),
        RenderMode::AriaLabel => doc.set_attribute(el, "aria-label", &value),
    }
}

/// What: Render every binding of the page in `lang`.
///
/// Inputs:
/// - `doc`: Page
/// - `registry`: Binding registry, synced against `doc` first
/// - `store`: Translation store
/// - `lang`: Render language
///
/// Output:
/// - Counts of the pass
///
/// Details:
/// - Order: bindings, selector widget, root `lang` attribute, document title, dynamic labels
/// - Re-running with the same language leaves the page unchanged
/// - Persisting the language is the caller's job
pub fn apply_bindings(
    doc: &mut dyn Document,
    registry: &mut BindingRegistry,
    store: &TranslationStore,
    lang: Language,
) -> ApplyReport {
    let derived = registry.sync(doc);
    let mut rendered = 0;
    for binding in registry.bindings() {
        render_binding(doc, binding, store, lang);
        rendered += 1;
    }

    update_language_ui(doc, lang);
    doc.set_document_lang(lang.code());
    doc.set_title(&translate(store, TITLE_KEY, &ReplacementSet::new(), lang));
    let dynamic = refresh_dynamic_labels(doc, store, lang);

    tracing::debug!(lang = %lang, derived, rendered, dynamic, "translations applied");
    ApplyReport {
        language: lang,
        derived,
        rendered,
        dynamic,
    }
}

/// What: Bind `el` to a new key and render it immediately.
///
/// Inputs:
/// - `doc`: Page
/// - `el`: Message element
/// - `key`: New key; blank clears the element
/// - `args`: Placeholder arguments, stored on the element for later passes
/// - `mode`: Text or trusted markup
/// - `store`: Translation store
/// - `lang`: Render language
///
/// Details:
/// - A blank key empties the text and removes the content, argument and mode markers
/// - Empty `args` removes `data-i18n-args`; `Text` mode removes `data-i18n-mode`
/// - The markers written here are picked up by the next registry sync
pub fn update_dynamic_message(
    doc: &mut dyn Document,
    el: ElementId,
    key: &str,
    args: &ReplacementSet,
    mode: ContentMode,
    store: &TranslationStore,
    lang: Language,
) {
    let key = key.trim();
    if key.is_empty() {
        doc.set_text_content(el, "");
        doc.remove_attribute(el, I18N_ATTR);
        doc.remove_attribute(el, ARGS_ATTR);
        doc.remove_attribute(el, MODE_ATTR);
        return;
    }

    doc.set_attribute(el, I18N_ATTR, key);
    if args.is_empty() {
        doc.remove_attribute(el, ARGS_ATTR);
    } else {
        doc.set_attribute(el, ARGS_ATTR, &args.to_json());
    }
    let value = translate(store, key, args, lang);
    match mode {
        ContentMode::Text => {
            doc.remove_attribute(el, MODE_ATTR);
            doc.set_text_content(el, &value);
        }
        ContentMode::Html => {
            doc.set_attribute(el, MODE_ATTR, HTML_MODE);
            doc.set_inner_html(el, &value);
        }
    }
}
