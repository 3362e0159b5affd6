//! Full render passes over the fixture page.

use afa_i18n::binding::{BindingRegistry, apply_bindings};
use afa_i18n::document::{Document, MemoryDocument};
use afa_i18n::i18n::{I18nContext, Language, TranslationStore};
use afa_i18n::storage::MemoryStorage;

const PAGE: &str = include_str!("../fixtures/index.html");

fn element_with(doc: &MemoryDocument, attr: &str, value: &str) -> afa_i18n::document::ElementId {
    doc.elements_with_attribute(attr)
        .into_iter()
        .find(|el| doc.attribute(*el, attr).as_deref() == Some(value))
        .expect("fixture element present")
}

#[test]
/// What: Every marker kind of the fixture is rendered in English.
fn fixture_renders_in_english() {
    let mut doc = MemoryDocument::parse_html(PAGE);
    let mut registry = BindingRegistry::new();
    let report = apply_bindings(&mut doc, &mut registry, TranslationStore::embedded(), Language::En);
    assert!(report.rendered >= 14);
    assert_eq!(report.dynamic, 3);

    let home = element_with(&doc, "data-i18n", "nav.home");
    assert_eq!(doc.text_content(home), "Home");
    let email = element_with(&doc, "data-i18n-placeholder", "form.email_placeholder");
    assert_eq!(doc.attribute(email, "placeholder").as_deref(), Some("Email address"));
    let select = element_with(&doc, "name", "category");
    assert_eq!(doc.attribute(select, "aria-label").as_deref(), Some("Select language"));
    let options: Vec<String> = doc
        .children(select)
        .into_iter()
        .map(|el| doc.text_content(el))
        .collect();
    assert_eq!(options, vec!["U16".to_string(), "U18".to_string()]);
    let u16_option = element_with(&doc, "data-i18n", "cat.U16");
    assert_eq!(doc.tag_name(u16_option).as_deref(), Some("option"));
    let toggle = element_with(&doc, "class", "menu-toggle");
    assert_eq!(doc.attribute(toggle, "aria-label").as_deref(), Some("Open menu"));
    assert_eq!(doc.attribute(toggle, "title").as_deref(), Some("Open menu"));

    let dots = doc.elements_with_attribute("data-i18n-args");
    let labels: Vec<Option<String>> = dots
        .iter()
        .filter(|el| doc.tag_name(**el).as_deref() == Some("button"))
        .map(|el| doc.attribute(*el, "aria-label"))
        .collect();
    assert_eq!(
        labels,
        vec![Some("Slide 1".to_string()), Some("Slide 2".to_string())]
    );

    let html = doc.to_html();
    assert!(html.contains("<html lang=\"en\">"));
    assert!(html.contains("<title>Aran Football Academy | Football in the heart of the Pyrenees</title>"));
    assert!(html.contains("if (a < b && c) { go(); }"));
}

#[test]
/// What: Rendering twice in one language changes nothing.
fn reapplying_is_idempotent() {
    let mut doc = MemoryDocument::parse_html(PAGE);
    let mut registry = BindingRegistry::new();
    let store = TranslationStore::embedded();
    apply_bindings(&mut doc, &mut registry, store, Language::Fr);
    let once = doc.to_html();
    let report = apply_bindings(&mut doc, &mut registry, store, Language::Fr);
    assert_eq!(report.derived, 0);
    assert_eq!(doc.to_html(), once);
}

#[test]
/// What: Switching languages through the context re-renders everything and the selector.
fn language_switch_updates_page_and_selector() {
    let storage = MemoryStorage::new();
    let mut ctx = I18nContext::new(TranslationStore::embedded(), Box::new(storage.clone()));
    let mut doc = MemoryDocument::parse_html(PAGE);
    let mut registry = BindingRegistry::new();
    assert_eq!(ctx.init_language(&mut doc, &mut registry, None), Language::Es);

    ctx.set_language("ca", &mut doc, &mut registry);
    let home = element_with(&doc, "data-i18n", "nav.home");
    assert_eq!(doc.text_content(home), "Inici");
    // missing in Catalan, rendered through Spanish
    let toggle = element_with(&doc, "class", "menu-toggle");
    assert_eq!(doc.attribute(toggle, "aria-label").as_deref(), Some("Abrir menú"));

    let label = doc.element_by_id("lang-label").expect("selector label");
    assert_eq!(doc.text_content(label), "Català");
    let active: Vec<String> = doc
        .elements_with_class("active")
        .into_iter()
        .filter_map(|el| doc.attribute(el, "data-lang"))
        .collect();
    assert_eq!(active, vec!["ca".to_string()]);
    assert_eq!(ctx.persisted_language().as_deref(), Some("ca"));
}

#[test]
/// What: Markers added after the first pass are picked up by the next one.
fn runtime_markers_are_picked_up() {
    let mut ctx = I18nContext::new(TranslationStore::embedded(), Box::new(MemoryStorage::new()));
    let mut doc = MemoryDocument::parse_html(PAGE);
    let mut registry = BindingRegistry::new();
    ctx.init_language(&mut doc, &mut registry, Some("en-US"));
    let before = registry.len();

    let body = doc.body().expect("fixture body");
    let dot = doc.append_element(
        body,
        "button",
        &[
            ("data-i18n-attr", "aria-label:hero.slider.dot"),
            ("data-i18n-args", r#"{"index": 2}"#),
        ],
    );
    let lang = ctx.set_language("en", &mut doc, &mut registry);
    assert_eq!(lang, Language::En);
    assert_eq!(registry.len(), before + 1);
    assert_eq!(doc.attribute(dot, "aria-label").as_deref(), Some("Slide 2"));
}

#[test]
/// What: Malformed payloads degrade without disturbing other markers.
fn malformed_payloads_degrade_gracefully() {
    let page = r#"<html><head><title></title></head><body>
<a id="a" data-i18n="nav.home" data-i18n-args="{oops">x</a>
<a id="b" data-i18n-attr="garbage" data-i18n="nav.blog">y</a>
<a id="c" data-i18n="missing.key">z</a>
</body></html>"#;
    let mut doc = MemoryDocument::parse_html(page);
    let mut registry = BindingRegistry::new();
    apply_bindings(&mut doc, &mut registry, TranslationStore::embedded(), Language::En);
    let text = |id: &str| doc.text_content(doc.element_by_id(id).expect("element"));
    assert_eq!(text("a"), "Home");
    assert_eq!(text("b"), "Blog");
    assert_eq!(text("c"), "missing.key");
}
