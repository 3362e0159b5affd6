//! Translation coverage report.

use afa_i18n::i18n::{DEFAULT_LANGUAGE, Language, SUPPORTED_LANGUAGES, TranslationStore};
use serde::Serialize;

use crate::args::utils::print_json;

/// Coverage of one language against the default language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageEntry {
    /// Audited language.
    pub language: Language,
    /// Keys the language defines.
    pub keys: usize,
    /// Default-language keys it lacks, sorted.
    pub missing: Vec<String>,
}

/// What: Audit every non-default language.
///
/// Inputs:
/// - `store`: Translation store
///
/// Output:
/// - One entry per supported language except the default, in selector order
#[must_use]
pub fn coverage_report(store: &TranslationStore) -> Vec<CoverageEntry> {
    SUPPORTED_LANGUAGES
        .into_iter()
        .filter(|lang| *lang != DEFAULT_LANGUAGE)
        .map(|language| CoverageEntry {
            language,
            keys: store.key_count(language),
            missing: store.missing_keys(language),
        })
        .collect()
}

/// What: Print the coverage report.
///
/// Inputs:
/// - `store`: Translation store
/// - `json`: Print JSON instead of plain text
///
/// # Errors
/// - Returns a message when JSON encoding fails
pub fn handle_coverage(store: &TranslationStore, json: bool) -> Result<(), String> {
    let report = coverage_report(store);
    tracing::info!(languages = report.len(), "coverage requested from CLI");
    if json {
        return print_json(&report);
    }
    let total = store.key_count(DEFAULT_LANGUAGE);
    for entry in &report {
        println!(
            "{}: {} keys, {} of {} missing",
            entry.language,
            entry.keys,
            entry.missing.len(),
            total
        );
        for key in &entry.missing {
            println!("  - {key}");
        }
    }
    Ok(())
}
