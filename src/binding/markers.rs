//! Declarative marker vocabulary and payload parsing.
//!
//! Page authors annotate elements with these attributes:
//!
//! | Attribute | Meaning |
//! |---|---|
//! | `data-i18n` | key rendered as text content |
//! | `data-i18n-mode="html"` | render `data-i18n` as trusted markup instead |
//! | `data-i18n-placeholder` | key rendered into the `placeholder` property |
//! | `data-i18n-attr` | attribute map, JSON object or `name:key;name:key` shorthand |
//! | `data-i18n-args` | JSON object of placeholder arguments |
//! | `data-i18n-select` | key rendered only into `aria-label` |

use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::Value;

use crate::i18n::ReplacementSet;

/// Content key marker.
pub const I18N_ATTR: &str = "data-i18n";
/// Render-mode marker for `data-i18n`.
pub const MODE_ATTR: &str = "data-i18n-mode";
/// Placeholder key marker.
pub const PLACEHOLDER_ATTR: &str = "data-i18n-placeholder";
/// Attribute-map marker.
pub const ATTR_MAP_ATTR: &str = "data-i18n-attr";
/// Serialized replacement arguments.
pub const ARGS_ATTR: &str = "data-i18n-args";
/// Aria-label-only marker.
pub const ARIA_ATTR: &str = "data-i18n-select";

/// Every marker attribute, in the order bindings are derived.
pub const MARKER_ATTRS: [&str; 6] = [
    I18N_ATTR,
    MODE_ATTR,
    PLACEHOLDER_ATTR,
    ATTR_MAP_ATTR,
    ARGS_ATTR,
    ARIA_ATTR,
];

/// `data-i18n-mode` value selecting markup rendering.
pub const HTML_MODE: &str = "html";
/// Attribute-map pseudo-attribute routed to text content.
pub const TEXT_CONTENT_TARGET: &str = "textContent";
/// Attribute-map pseudo-attribute routed to markup content.
pub const INNER_HTML_TARGET: &str = "innerHTML";

/// Why a marker payload could not be used.
#[derive(Debug, thiserror::Error)]
pub enum MarkerError {
    /// `data-i18n-args` is not a JSON object.
    #[error("invalid replacement arguments: {0}")]
    InvalidArgs(#[source] serde_json::Error),
    /// `data-i18n-attr` is neither a JSON object nor shorthand.
    #[error("attribute map is neither JSON nor name:key shorthand: {0:?}")]
    InvalidAttrMap(String),
    /// `data-i18n-attr` parsed but named no attribute.
    #[error("attribute map declares no attributes")]
    EmptyAttrMap,
}

/// What: Parse a `data-i18n-args` payload.
///
/// Inputs:
/// - `raw`: Attribute value, if present
///
/// Output:
/// - Parsed set; an absent or blank payload is an empty set
///
/// # Errors
/// - `MarkerError::InvalidArgs` when the payload is not a JSON object
pub fn parse_args(raw: Option<&str>) -> Result<ReplacementSet, MarkerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(ReplacementSet::new()),
        Some(payload) => ReplacementSet::from_json(payload).map_err(MarkerError::InvalidArgs),
    }
}

/// JSON object entries in declaration order.
///
/// A later duplicate name replaces the earlier value in place.
struct OrderedEntries(Vec<(String, Value)>);

/// Visitor collecting object entries without re-sorting them.
struct OrderedEntriesVisitor;

impl<'de> Visitor<'de> for OrderedEntriesVisitor {
    type Value = OrderedEntries;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries: Vec<(String, Value)> = Vec::new();
        while let Some((name, value)) = map.next_entry::<String, Value>()? {
            if let Some(slot) = entries.iter_mut().find(|(n, _)| *n == name) {
                slot.1 = value;
            } else {
                entries.push((name, value));
            }
        }
        Ok(OrderedEntries(entries))
    }
}

impl<'de> Deserialize<'de> for OrderedEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedEntriesVisitor)
    }
}

/// What: Parse a `data-i18n-attr` payload into `(attribute, key)` pairs.
///
/// Inputs:
/// - `raw`: Attribute value
///
/// Output:
/// - Pairs in declaration order, for JSON objects and shorthand alike
///
/// # Errors
/// - `MarkerError::InvalidAttrMap` when the value is neither a JSON object nor shorthand
/// - `MarkerError::EmptyAttrMap` when it parses but yields no usable pair
///
/// Details:
/// - JSON is tried first: `{"aria-label": "hero.slider.dot"}`; non-string values are skipped
/// - Order matters when one map targets both `textContent` and `innerHTML`: the last one wins
/// - Otherwise, when the value contains `:`, it is read as shorthand (see [`parse_shorthand`])
pub fn parse_attr_map(raw: &str) -> Result<Vec<(String, String)>, MarkerError> {
    let trimmed = raw.trim();
    if let Ok(OrderedEntries(entries)) = serde_json::from_str::<OrderedEntries>(trimmed) {
        let pairs: Vec<(String, String)> = entries
            .into_iter()
            .filter_map(|(name, key)| match key {
                Value::String(key) if !name.trim().is_empty() && !key.trim().is_empty() => {
                    Some((name.trim().to_string(), key.trim().to_string()))
                }
                _ => None,
            })
            .collect();
        return if pairs.is_empty() {
            Err(MarkerError::EmptyAttrMap)
        } else {
            Ok(pairs)
        };
    }
    if !trimmed.contains(':') {
        return Err(MarkerError::InvalidAttrMap(raw.to_string()));
    }
    let pairs = parse_shorthand(trimmed);
    if pairs.is_empty() {
        Err(MarkerError::EmptyAttrMap)
    } else {
        Ok(pairs)
    }
}

/// What: Parse `name:key;name:key` shorthand.
///
/// Inputs:
/// - `raw`: Shorthand text
///
/// Output:
/// - Pairs in declaration order; entries lacking a name or key are dropped
///
/// Details:
/// - Entries are separated by unescaped `;`, name and key by the first unescaped `:`
/// - A backslash makes the next character literal (`\:`, `\;`, `\\`)
/// - Names and keys are trimmed
#[must_use]
pub fn parse_shorthand(raw: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    let mut name = String::new();
    let mut key = String::new();
    let mut in_key = false;
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(next) = chars.next() {
                    if in_key { key.push(next) } else { name.push(next) }
                }
            }
            ':' if !in_key => in_key = true,
            ';' => {
                push_pair(&mut pairs, &name, &key);
                name.clear();
                key.clear();
                in_key = false;
            }
            _ => {
                if in_key { key.push(c) } else { name.push(c) }
            }
        }
    }
    push_pair(&mut pairs, &name, &key);
    pairs
}

/// Keep a shorthand entry when both sides are non-blank.
fn push_pair(pairs: &mut Vec<(String, String)>, name: &str, key: &str) {
    let (name, key) = (name.trim(), key.trim());
    if !name.is_empty() && !key.is_empty() {
        pairs.push((name.to_string(), key.to_string()));
    }
}

/// What: Escape a name or key for use inside shorthand.
///
/// Inputs:
/// - `part`: Attribute name or translation key
///
/// Output:
/// - Text with `\`, `:` and `;` backslash-escaped
#[must_use]
pub fn escape_shorthand(part: &str) -> String {
    let mut out = String::with_capacity(part.len());
    for c in part.chars() {
        if matches!(c, '\\' | ':' | ';') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
