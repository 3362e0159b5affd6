//! Locale file loading and parsing.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::i18n::language::Language;
use crate::i18n::translations::TranslationMap;

/// Locale files compiled into the binary, in allow-list order.
pub(crate) const EMBEDDED_LOCALES: [(Language, &str); 4] = [
    (Language::Es, include_str!("../../config/locales/es.yml")),
    (Language::Ca, include_str!("../../config/locales/ca.yml")),
    (Language::Fr, include_str!("../../config/locales/fr.yml")),
    (Language::En, include_str!("../../config/locales/en.yml")),
];

/// What: Load a locale YAML file and parse it into a `TranslationMap`.
///
/// Inputs:
/// - `lang`: Language whose file should be read
/// - `locales_dir`: Path to locales directory
///
/// Output:
/// - `Result<TranslationMap, String>` containing translations or error
///
/// # Errors
/// - Returns `Err` when the locale file does not exist in the locales directory
/// - Returns `Err` when the locale file cannot be read (I/O error)
/// - Returns `Err` when the locale file is empty
/// - Returns `Err` when the YAML content cannot be parsed
///
/// Details:
/// - Loads file from `locales_dir/{code}.yml`
/// - Nested mappings are flattened to dot-notation keys
pub fn load_locale_file(lang: Language, locales_dir: &Path) -> Result<TranslationMap, String> {
    let file_path = locales_dir.join(format!("{}.yml", lang.code()));

    if !file_path.exists() {
        return Err(format!("Locale file not found: {}", file_path.display()));
    }

    let contents = fs::read_to_string(&file_path)
        .map_err(|e| format!("Failed to read locale file {}: {e}", file_path.display()))?;

    if contents.trim().is_empty() {
        return Err(format!("Locale file is empty: {}", file_path.display()));
    }

    parse_locale_yaml(&contents).map_err(|e| {
        format!(
            "Failed to parse locale file {}: {e}. Please check YAML syntax.",
            file_path.display()
        )
    })
}

/// What: Parse YAML content into a `TranslationMap`.
///
/// Inputs:
/// - `yaml_content`: YAML file content as string
///
/// Output:
/// - `Result<TranslationMap, String>` containing parsed translations
///
/// # Errors
/// - Returns `Err` when the content is not valid YAML
///
/// Details:
/// - Expects a top-level key naming the locale (e.g., "fr:"), which is skipped
/// - Flattens nested structure into dot-notation keys
pub fn parse_locale_yaml(yaml_content: &str) -> Result<TranslationMap, String> {
    let doc: serde_norway::Value =
        serde_norway::from_str(yaml_content).map_err(|e| format!("Failed to parse YAML: {e}"))?;

    let mut translations = HashMap::new();

    if let Some(locale_obj) = doc.as_mapping() {
        for (_locale_key, locale_value) in locale_obj {
            flatten_yaml_value(locale_value, "", &mut translations);
        }
    }

    Ok(translations)
}

/// What: Recursively flatten YAML structure into dot-notation keys.
///
/// Inputs:
/// - `value`: Current YAML value
/// - `prefix`: Current key prefix (e.g., "hero.slider")
/// - `translations`: Map to populate
///
/// Details:
/// - Scalars (numbers, booleans) are stored in their plain text form
/// - Sequences are not templates and are skipped with a debug note
fn flatten_yaml_value(
    value: &serde_norway::Value,
    prefix: &str,
    translations: &mut TranslationMap,
) {
    match value {
        serde_norway::Value::Mapping(map) => {
            for (key, val) in map {
                if let Some(key_str) = key.as_str() {
                    let new_prefix = if prefix.is_empty() {
                        key_str.to_string()
                    } else {
                        format!("{prefix}.{key_str}")
                    };
                    flatten_yaml_value(val, &new_prefix, translations);
                }
            }
        }
        serde_norway::Value::String(s) => {
            translations.insert(prefix.to_string(), s.clone());
        }
        serde_norway::Value::Number(n) => {
            translations.insert(prefix.to_string(), n.to_string());
        }
        serde_norway::Value::Bool(b) => {
            translations.insert(prefix.to_string(), b.to_string());
        }
        serde_norway::Value::Sequence(_) => {
            tracing::debug!(key = %prefix, "skipping sequence value in locale file");
        }
        _ => {}
    }
}
