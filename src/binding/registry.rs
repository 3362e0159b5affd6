//! Registry of translation bindings derived from page markers.

use std::collections::BTreeMap;

use crate::binding::markers::{
    ARGS_ATTR, ARIA_ATTR, ATTR_MAP_ATTR, HTML_MODE, I18N_ATTR, INNER_HTML_TARGET, MARKER_ATTRS,
    PLACEHOLDER_ATTR, TEXT_CONTENT_TARGET, parse_args, parse_attr_map,
};
use crate::document::{Document, ElementId};
use crate::i18n::ReplacementSet;

/// Where a resolved string is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderMode {
    /// Text content.
    Text,
    /// Trusted markup content.
    Html,
    /// A named attribute.
    Attribute(String),
    /// The form-field placeholder.
    Placeholder,
    /// The `aria-label` attribute only.
    AriaLabel,
}

/// One renderable association between an element and a translation key.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// Target element.
    pub element: ElementId,
    /// Translation key.
    pub key: String,
    /// Placeholder arguments.
    pub args: ReplacementSet,
    /// Write target.
    pub mode: RenderMode,
}

/// Marker attribute values an element's bindings were derived from.
type MarkerSnapshot = [Option<String>; 6];

/// Bindings of one element plus the markers they came from.
#[derive(Debug, Clone)]
struct Entry {
    /// Marker values at derivation time.
    snapshot: MarkerSnapshot,
    /// Derived bindings, in render order.
    bindings: Vec<Binding>,
}

/// Explicit registry of every binding on a page.
///
/// Bindings are derived from markers once and kept across language
/// switches. [`BindingRegistry::sync`] reconciles the registry with the
/// document before a render pass: elements whose markers changed are
/// re-derived, new marker-bearing elements are added and elements that lost
/// their markers (or left the tree) are dropped.
#[derive(Debug, Clone, Default)]
pub struct BindingRegistry {
    entries: BTreeMap<ElementId, Entry>,
}

impl BindingRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Build a registry from every marker currently in `doc`.
    ///
    /// Inputs:
    /// - `doc`: Page to scan
    ///
    /// Output:
    /// - Registry holding the page's bindings
    #[must_use]
    pub fn collect(doc: &dyn Document) -> Self {
        let mut registry = Self::new();
        registry.sync(doc);
        registry
    }

    /// What: Reconcile the registry with the document's current markers.
    ///
    /// Inputs:
    /// - `doc`: Page to scan
    ///
    /// Output:
    /// - Number of elements whose bindings were (re)derived
    pub fn sync(&mut self, doc: &dyn Document) -> usize {
        let mut marked: Vec<ElementId> = [I18N_ATTR, PLACEHOLDER_ATTR, ATTR_MAP_ATTR, ARIA_ATTR]
            .iter()
            .flat_map(|attr| doc.elements_with_attribute(attr))
            .collect();
        marked.sort_unstable();
        marked.dedup();

        let mut next = BTreeMap::new();
        let mut derived = 0;
        for el in marked {
            let markers = snapshot(doc, el);
            let entry = match self.entries.remove(&el) {
                Some(entry) if entry.snapshot == markers => entry,
                _ => {
                    derived += 1;
                    Entry {
                        bindings: derive_bindings(el, &markers),
                        snapshot: markers,
                    }
                }
            };
            next.insert(el, entry);
        }
        if !self.entries.is_empty() {
            tracing::debug!(dropped = self.entries.len(), "dropping bindings of unmarked elements");
        }
        self.entries = next;
        derived
    }

    /// All bindings, grouped by element.
    #[must_use]
    pub fn bindings(&self) -> impl Iterator<Item = &Binding> {
        self.entries.values().flat_map(|entry| entry.bindings.iter())
    }

    /// Bindings of one element.
    #[must_use]
    pub fn bindings_for(&self, el: ElementId) -> &[Binding] {
        self.entries
            .get(&el)
            .map(|entry| entry.bindings.as_slice())
            .unwrap_or_default()
    }

    /// Total number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(|entry| entry.bindings.len()).sum()
    }

    /// Whether no element is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read every marker attribute of `el`.
fn snapshot(doc: &dyn Document, el: ElementId) -> MarkerSnapshot {
    MARKER_ATTRS.map(|attr| doc.attribute(el, attr))
}

/// What: Turn one element's markers into bindings.
///
/// Inputs:
/// - `el`: Element handle
/// - `snapshot`: Marker values in `MARKER_ATTRS` order
///
/// Output:
/// - Bindings in render order: content, placeholder, attribute map, aria label
///
/// Details:
/// - Malformed `data-i18n-args` counts as an empty argument set
/// - A malformed attribute map contributes no bindings; other markers are unaffected
/// - Placeholder and aria-label bindings are rendered without arguments
fn derive_bindings(el: ElementId, snapshot: &MarkerSnapshot) -> Vec<Binding> {
    let [content, mode, placeholder, attr_map, args, aria] = snapshot;
    let args = parse_args(args.as_deref()).unwrap_or_else(|e| {
        tracing::debug!(element = ?el, error = %e, "ignoring malformed {}", ARGS_ATTR);
        ReplacementSet::new()
    });
    let mut bindings = Vec::new();
    let mut bind = |key: &str, args: ReplacementSet, mode: RenderMode| {
        if !key.trim().is_empty() {
            bindings.push(Binding {
                element: el,
                key: key.trim().to_string(),
                args,
                mode,
            });
        }
    };

    if let Some(key) = content {
        let mode = if mode.as_deref() == Some(HTML_MODE) {
            RenderMode::Html
        } else {
            RenderMode::Text
        };
        bind(key, args.clone(), mode);
    }
    if let Some(key) = placeholder {
        bind(key, ReplacementSet::new(), RenderMode::Placeholder);
    }
    if let Some(raw) = attr_map.as_deref().filter(|raw| !raw.trim().is_empty()) {
        match parse_attr_map(raw) {
            Ok(pairs) => {
                for (target, key) in pairs {
                    let mode = match target.as_str() {
                        TEXT_CONTENT_TARGET => RenderMode::Text,
                        INNER_HTML_TARGET => RenderMode::Html,
                        _ => RenderMode::Attribute(target),
                    };
                    bind(&key, args.clone(), mode);
                }
            }
            Err(e) => {
                tracing::debug!(element = ?el, error = %e, "skipping {}", ATTR_MAP_ATTR);
            }
        }
    }
    if let Some(key) = aria {
        bind(key, ReplacementSet::new(), RenderMode::AriaLabel);
    }
    bindings
}
