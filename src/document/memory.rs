//! In-memory document backed by an `ego_tree` arena.

use ego_tree::{NodeId, NodeRef, Tree};
use scraper::Html;

use super::{Document, ElementId};

/// Node payload.
#[derive(Debug, Clone)]
pub(crate) enum NodeKind {
    /// Tree root.
    Root,
    /// `<!DOCTYPE name>`.
    Doctype(String),
    /// Element with attributes in source order.
    Element {
        /// Lowercase tag name.
        tag: String,
        /// `(name, value)` pairs.
        attributes: Vec<(String, String)>,
    },
    /// Character data.
    Text(String),
    /// Trusted markup assigned through `set_inner_html`, kept verbatim.
    Markup(String),
    /// `<!-- ... -->`.
    Comment(String),
}

impl NodeKind {
    /// Element with no attributes.
    fn element(tag: &str) -> Self {
        Self::Element {
            tag: tag.to_string(),
            attributes: Vec::new(),
        }
    }

    /// Whether this node is an element.
    pub(crate) const fn is_element(&self) -> bool {
        matches!(self, Self::Element { .. })
    }
}

/// In-memory page tree.
///
/// Nodes are never freed; replacing an element's content detaches the old
/// children, which then drop out of every query because queries walk the
/// tree from the root. All walks are iterative, so nesting depth is bounded
/// only by memory.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    pub(crate) tree: Tree<NodeKind>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// What: Empty page skeleton.
    ///
    /// Output:
    /// - Document holding `<html><head><title></title></head><body></body></html>`
    #[must_use]
    pub fn new() -> Self {
        let mut doc = Self::empty();
        let root = doc.tree.root().id();
        let html = doc.append_node(root, NodeKind::element("html"));
        let head = doc.append_node(html, NodeKind::element("head"));
        doc.append_node(head, NodeKind::element("title"));
        doc.append_node(html, NodeKind::element("body"));
        doc
    }

    /// Document with only the root node.
    pub(crate) fn empty() -> Self {
        Self {
            tree: Tree::new(NodeKind::Root),
        }
    }

    /// What: Append a node as the last child of `parent`.
    ///
    /// Output:
    /// - Id of the new node; it stays detached when `parent` is not in this tree
    pub(crate) fn append_node(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = self.tree.orphan(kind).id();
        if parent != id
            && let Some(mut node) = self.tree.get_mut(parent)
        {
            node.append_id(id);
        }
        id
    }

    /// `<body>` element, if present.
    #[must_use]
    pub fn body(&self) -> Option<ElementId> {
        self.first_with_tag("body")
    }

    /// What: Append a new element.
    ///
    /// Inputs:
    /// - `parent`: Element to append to
    /// - `tag`: Tag name (lowercased)
    /// - `attributes`: Initial attributes
    ///
    /// Output:
    /// - Handle of the new element
    ///
    /// Details:
    /// - This is how collaborators create marker-bearing elements at runtime
    pub fn append_element(
        &mut self,
        parent: ElementId,
        tag: &str,
        attributes: &[(&str, &str)],
    ) -> ElementId {
        let kind = NodeKind::Element {
            tag: tag.to_ascii_lowercase(),
            attributes: attributes
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        };
        ElementId(self.append_node(parent.0, kind))
    }

    /// What: Detach an element from the tree.
    ///
    /// Details:
    /// - The handle stays usable but the element no longer appears in queries
    pub fn remove_element(&mut self, el: ElementId) {
        if let Some(mut node) = self.tree.get_mut(el.0) {
            node.detach();
        }
    }

    /// Raw markup assigned to `el` through `set_inner_html`, if that is its only content.
    #[must_use]
    pub fn inner_markup(&self, el: ElementId) -> Option<&str> {
        let only = self.tree.get(el.0)?.first_child()?;
        if only.next_sibling().is_some() {
            return None;
        }
        match only.value() {
            NodeKind::Markup(m) => Some(m.as_str()),
            _ => None,
        }
    }

    /// Node behind an element handle.
    fn node(&self, el: ElementId) -> Option<NodeRef<'_, NodeKind>> {
        self.tree.get(el.0)
    }

    /// Elements below `from` in document order (excluding `from`).
    fn descendants(&self, from: NodeId) -> Vec<ElementId> {
        self.tree.get(from).map_or_else(Vec::new, |node| {
            node.descendants()
                .skip(1)
                .filter(|d| d.value().is_element())
                .map(|d| ElementId(d.id()))
                .collect()
        })
    }

    /// Every element of the page in document order.
    fn all_elements(&self) -> Vec<ElementId> {
        self.descendants(self.tree.root().id())
    }

    /// First element in document order with the given tag.
    fn first_with_tag(&self, tag: &str) -> Option<ElementId> {
        self.all_elements()
            .into_iter()
            .find(|el| self.tag_of(*el) == Some(tag))
    }

    /// Tag of `el` when it is an element.
    fn tag_of(&self, el: ElementId) -> Option<&str> {
        match self.node(el)?.value() {
            NodeKind::Element { tag, .. } => Some(tag.as_str()),
            _ => None,
        }
    }

    /// Attribute list of an element.
    fn attributes(&self, el: ElementId) -> Option<&[(String, String)]> {
        match self.node(el)?.value() {
            NodeKind::Element { attributes, .. } => Some(attributes.as_slice()),
            _ => None,
        }
    }

    /// Run `edit` on the attribute list of an element; no-op for other nodes.
    fn edit_attributes(&mut self, el: ElementId, edit: impl FnOnce(&mut Vec<(String, String)>)) {
        if let Some(mut node) = self.tree.get_mut(el.0)
            && let NodeKind::Element { attributes, .. } = node.value()
        {
            edit(attributes);
        }
    }

    /// Detach every child of `el` and attach a single new node.
    fn replace_children(&mut self, el: ElementId, kind: NodeKind) {
        let Some(mut node) = self.tree.get_mut(el.0) else {
            return;
        };
        if !node.value().is_element() {
            return;
        }
        while let Some(mut child) = node.first_child() {
            child.detach();
        }
        node.append(kind);
    }
}

impl Document for MemoryDocument {
    fn elements_with_attribute(&self, name: &str) -> Vec<ElementId> {
        self.all_elements()
            .into_iter()
            .filter(|el| {
                self.attributes(*el)
                    .is_some_and(|attrs| attrs.iter().any(|(k, _)| k == name))
            })
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.all_elements().into_iter().find(|el| {
            self.attributes(*el)
                .is_some_and(|attrs| attrs.iter().any(|(k, v)| k == "id" && v == id))
        })
    }

    fn elements_with_class(&self, class: &str) -> Vec<ElementId> {
        self.all_elements()
            .into_iter()
            .filter(|el| self.has_class(*el, class))
            .collect()
    }

    fn descendant_with_class(&self, root: ElementId, class: &str) -> Option<ElementId> {
        self.descendants(root.0)
            .into_iter()
            .find(|el| self.has_class(*el, class))
    }

    fn children(&self, el: ElementId) -> Vec<ElementId> {
        self.node(el).map_or_else(Vec::new, |node| {
            node.children()
                .filter(|c| c.value().is_element())
                .map(|c| ElementId(c.id()))
                .collect()
        })
    }

    fn parent(&self, el: ElementId) -> Option<ElementId> {
        let parent = self.node(el)?.parent()?;
        parent.value().is_element().then_some(ElementId(parent.id()))
    }

    fn tag_name(&self, el: ElementId) -> Option<String> {
        self.tag_of(el).map(str::to_string)
    }

    fn attribute(&self, el: ElementId, name: &str) -> Option<String> {
        self.attributes(el)?
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    fn set_attribute(&mut self, el: ElementId, name: &str, value: &str) {
        self.edit_attributes(el, |attrs| {
            if let Some(slot) = attrs.iter_mut().find(|(k, _)| k == name) {
                slot.1 = value.to_string();
            } else {
                attrs.push((name.to_string(), value.to_string()));
            }
        });
    }

    fn remove_attribute(&mut self, el: ElementId, name: &str) {
        self.edit_attributes(el, |attrs| attrs.retain(|(k, _)| k != name));
    }

    fn text_content(&self, el: ElementId) -> String {
        let mut buf = String::new();
        let Some(node) = self.node(el) else {
            return buf;
        };
        for d in node.descendants() {
            match d.value() {
                NodeKind::Text(t) => buf.push_str(t),
                NodeKind::Markup(m) => {
                    let fragment = Html::parse_fragment(m);
                    buf.extend(fragment.root_element().text());
                }
                _ => {}
            }
        }
        buf
    }

    fn set_text_content(&mut self, el: ElementId, text: &str) {
        self.replace_children(el, NodeKind::Text(text.to_string()));
    }

    fn set_inner_html(&mut self, el: ElementId, html: &str) {
        self.replace_children(el, NodeKind::Markup(html.to_string()));
    }

    fn title(&self) -> Option<String> {
        self.first_with_tag("title").map(|el| self.text_content(el))
    }

    fn set_title(&mut self, title: &str) {
        if let Some(el) = self.first_with_tag("title") {
            self.set_text_content(el, title);
            return;
        }
        let Some(parent) = self
            .first_with_tag("head")
            .or_else(|| self.first_with_tag("html"))
        else {
            tracing::debug!("document has no head, title not set");
            return;
        };
        let el = self.append_element(parent, "title", &[]);
        self.set_text_content(el, title);
    }

    fn set_document_lang(&mut self, lang: &str) {
        let Some(root) = self.first_with_tag("html") else {
            tracing::debug!(lang = %lang, "document has no html element, lang not set");
            return;
        };
        self.set_attribute(root, "lang", lang);
    }
}
