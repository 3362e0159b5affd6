//! Command-line language selection.

use afa_i18n::i18n::{I18nContext, Language};
use serde::Serialize;

use crate::args::utils::print_json;

/// JSON shape of a language.
#[derive(Debug, Serialize)]
struct LanguageOutput {
    /// Two-letter code.
    code: &'static str,
    /// Native name.
    label: &'static str,
    /// Flag glyph.
    flag: &'static str,
}

impl From<Language> for LanguageOutput {
    fn from(lang: Language) -> Self {
        let meta = lang.meta();
        Self {
            code: lang.code(),
            label: meta.label,
            flag: meta.flag,
        }
    }
}

/// What: Save a language selection.
///
/// Inputs:
/// - `ctx`: Context owning the storage
/// - `code`: Requested code; unsupported codes select the default language
/// - `json`: Print JSON instead of plain text
///
/// # Errors
/// - Returns a message when the storage file cannot be written
pub fn handle_set_language(ctx: &mut I18nContext<'_>, code: &str, json: bool) -> Result<(), String> {
    let lang = Language::from_code_or_default(code);
    tracing::info!(requested = %code, lang = %lang, "set language requested from CLI");
    if !ctx.persist_language(lang) {
        return Err(format!("Failed to save language '{}'", lang.code()));
    }
    if json {
        print_json(&LanguageOutput::from(lang))
    } else {
        let meta = lang.meta();
        println!("Language set to {} {} ({})", meta.flag, meta.label, lang.code());
        Ok(())
    }
}

/// What: Print the language this run resolved to.
///
/// # Errors
/// - Returns a message when JSON encoding fails
pub fn print_current_language(lang: Language, json: bool) -> Result<(), String> {
    if json {
        print_json(&LanguageOutput::from(lang))
    } else {
        let meta = lang.meta();
        println!("Current language: {} {} ({})", meta.flag, meta.label, lang.code());
        Ok(())
    }
}
