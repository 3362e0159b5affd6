//! Command-line key lookup.

use afa_i18n::i18n::{I18nContext, Language};
use serde::Serialize;

use crate::args::utils::{parse_replacements, print_json};

/// JSON shape of a lookup.
#[derive(Debug, Serialize)]
struct TranslateOutput<'a> {
    /// Requested key.
    key: &'a str,
    /// Language the key was resolved in.
    language: Language,
    /// Resolved text.
    value: String,
    /// Whether the text came from the requested language itself.
    found: bool,
}

/// What: Print the translation of `key`.
///
/// Inputs:
/// - `ctx`: Context holding the store
/// - `key`: Dot-notation key
/// - `raw_args`: `--arg` values
/// - `lang`: Language to resolve in
/// - `json`: Print JSON instead of plain text
///
/// # Errors
/// - Returns a message for malformed `--arg` values or JSON encoding failures
///
/// Details:
/// - An unknown key prints the key itself, like the site does
pub fn handle_translate(
    ctx: &I18nContext<'_>,
    key: &str,
    raw_args: &[String],
    lang: Language,
    json: bool,
) -> Result<(), String> {
    let replacements = parse_replacements(raw_args)?;
    let value = ctx.translate_in(key, &replacements, lang);
    let found = ctx.store().get(lang, key).is_some();
    tracing::info!(key = %key, lang = %lang, found, "translate requested from CLI");
    if json {
        print_json(&TranslateOutput {
            key,
            language: lang,
            value,
            found,
        })
    } else {
        println!("{value}");
        Ok(())
    }
}
