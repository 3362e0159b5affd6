//! Page document surface used by the binder.
//!
//! The binder never touches a concrete DOM; it only needs the operations on
//! [`Document`]. [`MemoryDocument`] is the in-process tree used by the
//! command-line renderer and the tests; the [`html`] module fills it from
//! page markup and writes it back.

pub mod html;
mod memory;

pub use memory::MemoryDocument;

/// Handle to one element of a [`Document`].
///
/// Handles stay valid for the document's lifetime; an element removed from
/// the tree simply stops showing up in queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) ego_tree::NodeId);

/// Minimal DOM operations needed to localize a page.
pub trait Document {
    /// Elements carrying attribute `name`, in document order.
    fn elements_with_attribute(&self, name: &str) -> Vec<ElementId>;

    /// Element whose `id` attribute equals `id`.
    fn element_by_id(&self, id: &str) -> Option<ElementId>;

    /// Elements whose `class` list contains `class`, in document order.
    fn elements_with_class(&self, class: &str) -> Vec<ElementId>;

    /// First descendant of `root` (excluding `root`) whose class list contains `class`.
    fn descendant_with_class(&self, root: ElementId, class: &str) -> Option<ElementId>;

    /// Element children of `el`, in order.
    fn children(&self, el: ElementId) -> Vec<ElementId>;

    /// Parent element of `el`, if any.
    fn parent(&self, el: ElementId) -> Option<ElementId>;

    /// Lowercase tag name.
    fn tag_name(&self, el: ElementId) -> Option<String>;

    /// Attribute value.
    fn attribute(&self, el: ElementId, name: &str) -> Option<String>;

    /// Set or replace an attribute.
    fn set_attribute(&mut self, el: ElementId, name: &str, value: &str);

    /// Remove an attribute if present.
    fn remove_attribute(&mut self, el: ElementId, name: &str);

    /// Concatenated text of all descendants.
    fn text_content(&self, el: ElementId) -> String;

    /// Replace all children with one text node.
    fn set_text_content(&mut self, el: ElementId, text: &str);

    /// Replace all children with trusted raw markup.
    fn set_inner_html(&mut self, el: ElementId, html: &str);

    /// Current document title.
    fn title(&self) -> Option<String>;

    /// Set the document title.
    fn set_title(&mut self, title: &str);

    /// Set the root element's `lang` attribute.
    fn set_document_lang(&mut self, lang: &str);

    /// Set the form-field placeholder text.
    fn set_placeholder(&mut self, el: ElementId, text: &str) {
        self.set_attribute(el, "placeholder", text);
    }

    /// Whether the element carries the `hidden` attribute.
    fn is_hidden(&self, el: ElementId) -> bool {
        self.attribute(el, "hidden").is_some()
    }

    /// Whether the element's class list contains `class`.
    fn has_class(&self, el: ElementId, class: &str) -> bool {
        self.attribute(el, "class")
            .is_some_and(|list| list.split_ascii_whitespace().any(|c| c == class))
    }

    /// What: Add or remove one class.
    ///
    /// Inputs:
    /// - `el`: Target element
    /// - `class`: Class name
    /// - `on`: `true` to ensure present, `false` to ensure absent
    fn toggle_class(&mut self, el: ElementId, class: &str, on: bool) {
        let current = self.attribute(el, "class").unwrap_or_default();
        let mut classes: Vec<&str> = current
            .split_ascii_whitespace()
            .filter(|c| *c != class)
            .collect();
        if on {
            classes.push(class);
        }
        let joined = classes.join(" ");
        if joined.is_empty() {
            self.remove_attribute(el, "class");
        } else if joined != current {
            self.set_attribute(el, "class", &joined);
        }
    }
}
