//! Translation maps, replacement sets and the lookup/substitution resolver.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::i18n::language::{DEFAULT_LANGUAGE, Language};
use crate::i18n::store::TranslationStore;

/// Translation map: dot-notation key -> template string.
pub type TranslationMap = HashMap<String, String>;

/// `{{ name }}` token; whitespace around the name is insignificant.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([^{}\s]+)\s*\}\}").expect("placeholder pattern is valid")
});

/// Named arguments substituted into `{{ name }}` placeholders.
///
/// Values are kept as JSON scalars so the set round-trips through the
/// `data-i18n-args` marker unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReplacementSet(BTreeMap<String, Value>);

impl ReplacementSet {
    /// Empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// What: Builder-style insert.
    ///
    /// Inputs:
    /// - `name`: Placeholder name
    /// - `value`: Anything convertible to a JSON value (strings, numbers, bools, `Value::Null`)
    ///
    /// Output:
    /// - The set with the entry added (replacing an existing one)
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace one argument.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Raw value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Whether no arguments are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// What: Display text for one argument.
    ///
    /// Inputs:
    /// - `name`: Placeholder name
    ///
    /// Output:
    /// - `None` when the argument is absent, otherwise its display string
    ///
    /// Details:
    /// - `null` displays as an empty string, never as `"null"`
    /// - Strings are inserted without quotes; numbers and booleans use their plain form
    /// - Arrays join their elements with `,`; objects fall back to compact JSON
    #[must_use]
    pub fn display(&self, name: &str) -> Option<String> {
        self.0.get(name).map(display_value)
    }

    /// What: Parse a serialized argument payload.
    ///
    /// Inputs:
    /// - `raw`: JSON object text, as stored in `data-i18n-args`
    ///
    /// Output:
    /// - Parsed set
    ///
    /// # Errors
    /// - Returns the `serde_json` error when `raw` is not a JSON object
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Compact JSON form used when writing `data-i18n-args` back to an element.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| "{}".to_string())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ReplacementSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Display form of one JSON argument value.
fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => display_number(n),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// What: Plain display form of a JSON number.
///
/// Details:
/// - Integers keep their exact digits; floats use `f64` display, so `2.0` shows as `2`
///   and `1e3` as `1000`
fn display_number(n: &Number) -> String {
    if n.is_f64()
        && let Some(f) = n.as_f64()
    {
        return f.to_string();
    }
    n.to_string()
}

/// What: Substitute `{{ name }}` placeholders in a template.
///
/// Inputs:
/// - `template`: Template text
/// - `args`: Named arguments
///
/// Output:
/// - Template with every token replaced by its argument, or by an empty string when absent
///
/// Details:
/// - Single pass: text coming from an argument is never scanned again, so an argument
///   containing `{{x}}` is inserted verbatim
#[must_use]
pub fn format_translation(template: &str, args: &ReplacementSet) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            args.display(&caps[1]).unwrap_or_default()
        })
        .into_owned()
}

/// What: Resolve a key to display text in a given language.
///
/// Inputs:
/// - `store`: Translation store
/// - `key`: Dot-notation key
/// - `args`: Named placeholder arguments
/// - `lang`: Requested language
///
/// Output:
/// - Substituted template, or `key` verbatim when no language has it
///
/// Details:
/// - Lookup order: `(lang, key)`, then `(DEFAULT_LANGUAGE, key)`, then the key itself
/// - A missing key is returned unsubstituted, exactly as given
/// - An empty key resolves to an empty string
/// - Never panics and never returns an error
#[must_use]
pub fn translate(
    store: &TranslationStore,
    key: &str,
    args: &ReplacementSet,
    lang: Language,
) -> String {
    if key.is_empty() {
        return String::new();
    }
    if let Some(template) = store.get(lang, key) {
        return format_translation(template, args);
    }
    if lang != DEFAULT_LANGUAGE
        && let Some(template) = store.get(DEFAULT_LANGUAGE, key)
    {
        tracing::debug!(key = %key, lang = %lang, "translation missing, using default language");
        return format_translation(template, args);
    }
    tracing::debug!(key = %key, lang = %lang, "missing translation key, returning key as-is");
    key.to_string()
}
