//! Language selector widget state.

use crate::document::Document;
use crate::i18n::Language;

/// Button text showing the current language name.
pub const LANG_LABEL_ID: &str = "lang-label";
/// Dropdown toggle button.
pub const LANG_TOGGLE_ID: &str = "lang-toggle";
/// Dropdown list whose children carry `data-lang`.
pub const LANG_MENU_ID: &str = "lang-menu";
/// Attribute naming the language of a menu entry.
pub const LANG_ENTRY_ATTR: &str = "data-lang";
/// Class marking the selected menu entry.
pub const ACTIVE_CLASS: &str = "active";

/// What: Reflect `lang` in the selector widget.
///
/// Inputs:
/// - `doc`: Page
/// - `lang`: Current language
///
/// Details:
/// - `#lang-label` text and the `#lang-toggle` tooltip / accessible name show the native label
/// - Every `#lang-menu` child gets `active` exactly when its `data-lang` equals the code
/// - Missing widget parts are skipped silently
pub fn update_language_ui(doc: &mut dyn Document, lang: Language) {
    let meta = lang.meta();
    if let Some(label) = doc.element_by_id(LANG_LABEL_ID) {
        doc.set_text_content(label, meta.label);
    }
    if let Some(toggle) = doc.element_by_id(LANG_TOGGLE_ID) {
        doc.set_attribute(toggle, "title", meta.label);
        doc.set_attribute(toggle, "aria-label", meta.label);
    }
    if let Some(menu) = doc.element_by_id(LANG_MENU_ID) {
        for entry in doc.children(menu) {
            let active = doc.attribute(entry, LANG_ENTRY_ATTR).as_deref() == Some(lang.code());
            doc.toggle_class(entry, ACTIVE_CLASS, active);
        }
    }
}
