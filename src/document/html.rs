//! HTML parsing and serialization for [`MemoryDocument`].

use ego_tree::iter::Edge;
use scraper::{Html, Node};

use super::MemoryDocument;
use super::memory::NodeKind;

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr", "param",
];

/// Elements whose text is emitted without escaping.
const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

impl MemoryDocument {
    /// What: Parse a full HTML page.
    ///
    /// Inputs:
    /// - `html`: Page markup
    ///
    /// Output:
    /// - Document tree mirroring the parsed page
    ///
    /// Details:
    /// - Parsing is lenient (html5ever error recovery); malformed markup never fails
    /// - Processing instructions are dropped; attributes are kept sorted by name
    /// - The parsed tree is walked edge by edge, so deep nesting does not grow the call stack
    #[must_use]
    pub fn parse_html(html: &str) -> Self {
        let parsed = Html::parse_document(html);
        let mut doc = Self::empty();
        let root = doc.tree.root().id();
        // Target parent for each open source node; transparent nodes reuse their parent.
        let mut parents = vec![root];
        for edge in parsed.tree.root().traverse() {
            match edge {
                Edge::Open(node) => {
                    let parent = parents.last().copied().unwrap_or(root);
                    let target = import_kind(node.value())
                        .map_or(parent, |kind| doc.append_node(parent, kind));
                    parents.push(target);
                }
                Edge::Close(_) => {
                    parents.pop();
                }
            }
        }
        doc
    }

    /// What: Serialize the tree back to HTML.
    ///
    /// Output:
    /// - Markup string; text and attribute values are escaped, trusted markup is emitted verbatim
    ///
    /// Details:
    /// - Children of void elements are not written
    /// - Text inside `script` and `style` is written unescaped
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut buf = String::new();
        let mut raw_depth = 0_usize;
        let mut open_void = None;
        for edge in self.tree.root().traverse() {
            match edge {
                Edge::Open(node) => {
                    if open_void.is_some() {
                        continue;
                    }
                    match node.value() {
                        NodeKind::Root => {}
                        NodeKind::Doctype(name) => {
                            buf.push_str("<!DOCTYPE ");
                            buf.push_str(name);
                            buf.push('>');
                        }
                        NodeKind::Comment(c) => {
                            buf.push_str("<!--");
                            buf.push_str(c);
                            buf.push_str("-->");
                        }
                        NodeKind::Text(t) if raw_depth > 0 => buf.push_str(t),
                        NodeKind::Text(t) => push_escaped(&mut buf, t, false),
                        NodeKind::Markup(m) => buf.push_str(m),
                        NodeKind::Element { tag, attributes } => {
                            push_open_tag(&mut buf, tag, attributes);
                            if VOID_ELEMENTS.contains(&tag.as_str()) {
                                open_void = Some(node.id());
                            } else if RAW_TEXT_ELEMENTS.contains(&tag.as_str()) {
                                raw_depth += 1;
                            }
                        }
                    }
                }
                Edge::Close(node) => {
                    if let Some(void) = open_void {
                        if void == node.id() {
                            open_void = None;
                        }
                        continue;
                    }
                    if let NodeKind::Element { tag, .. } = node.value() {
                        if RAW_TEXT_ELEMENTS.contains(&tag.as_str()) {
                            raw_depth = raw_depth.saturating_sub(1);
                        }
                        buf.push_str("</");
                        buf.push_str(tag);
                        buf.push('>');
                    }
                }
            }
        }
        buf
    }
}

/// What: Payload for one parsed node.
///
/// Output:
/// - `None` for nodes that are not copied (document and fragment roots, processing instructions)
fn import_kind(node: &Node) -> Option<NodeKind> {
    match node {
        Node::Doctype(d) => Some(NodeKind::Doctype(d.name().to_string())),
        Node::Comment(c) => Some(NodeKind::Comment((**c).to_string())),
        Node::Text(t) => Some(NodeKind::Text((**t).to_string())),
        Node::Element(el) => {
            let mut attributes: Vec<(String, String)> = el
                .attrs()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            // Parser attribute order is not guaranteed; sort for stable output.
            attributes.sort_by(|a, b| a.0.cmp(&b.0));
            Some(NodeKind::Element {
                tag: el.name().to_ascii_lowercase(),
                attributes,
            })
        }
        Node::Document | Node::Fragment | Node::ProcessingInstruction(_) => None,
    }
}

/// Write `<tag name="value" ...>`; empty values are written as bare attributes.
fn push_open_tag(buf: &mut String, tag: &str, attributes: &[(String, String)]) {
    buf.push('<');
    buf.push_str(tag);
    for (name, value) in attributes {
        buf.push(' ');
        buf.push_str(name);
        if !value.is_empty() {
            buf.push_str("=\"");
            push_escaped(buf, value, true);
            buf.push('"');
        }
    }
    buf.push('>');
}

/// Escape text (`&`, `<`, `>`) or attribute values (`&`, `"`).
fn push_escaped(buf: &mut String, s: &str, attribute: bool) {
    for c in s.chars() {
        match c {
            '&' => buf.push_str("&amp;"),
            '"' if attribute => buf.push_str("&quot;"),
            '<' if !attribute => buf.push_str("&lt;"),
            '>' if !attribute => buf.push_str("&gt;"),
            '\u{a0}' => buf.push_str("&nbsp;"),
            _ => buf.push(c),
        }
    }
}
