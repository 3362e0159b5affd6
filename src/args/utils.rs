//! Shared utilities for argument processing.

use std::path::Path;

use afa_i18n::i18n::{ReplacementSet, TranslationStore};
use serde::Serialize;
use serde_json::Value;

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level` argument.
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Load a translation store from a locales directory.
///
/// Inputs:
/// - `dir`: Directory holding `{code}.yml` files
///
/// Output:
/// - Loaded store
///
/// # Errors
/// - Returns a message naming the directory when the default language cannot be loaded
pub fn load_store(dir: &Path) -> Result<TranslationStore, String> {
    TranslationStore::from_dir(dir)
        .map_err(|e| format!("Failed to load locales from {}: {e}", dir.display()))
}

/// What: Load locales found by the development/installed lookup.
///
/// Inputs:
/// - `dir`: Result of `find_locales_dir`
///
/// Output:
/// - Loaded store, or `None` when no directory was found or it cannot be loaded
///
/// Details:
/// - A broken discovered directory is logged and the caller keeps the embedded locales
pub fn load_discovered_store(dir: Option<&Path>) -> Option<TranslationStore> {
    let dir = dir?;
    match load_store(dir) {
        Ok(store) => {
            tracing::debug!(path = %dir.display(), "using discovered locales directory");
            Some(store)
        }
        Err(e) => {
            tracing::warn!(error = %e, "discovered locales unusable, using embedded copies");
            None
        }
    }
}

/// What: Parse `name=value` pairs into placeholder arguments.
///
/// Inputs:
/// - `pairs`: Raw `--arg` values
///
/// Output:
/// - Replacement set
///
/// # Errors
/// - Returns a message for a pair without `=` or with an empty name
///
/// Details:
/// - Values that read as a JSON number, boolean or `null` keep that type; anything else is text
pub fn parse_replacements(pairs: &[String]) -> Result<ReplacementSet, String> {
    let mut set = ReplacementSet::new();
    for pair in pairs {
        let Some((name, raw)) = pair.split_once('=') else {
            return Err(format!("Invalid --arg '{pair}': expected NAME=VALUE"));
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("Invalid --arg '{pair}': empty name"));
        }
        let value = match serde_json::from_str::<Value>(raw.trim()) {
            Ok(v @ (Value::Number(_) | Value::Bool(_) | Value::Null)) => v,
            _ => Value::String(raw.to_string()),
        };
        set.insert(name, value);
    }
    Ok(set)
}

/// What: Print a value as pretty JSON on stdout.
///
/// # Errors
/// - Returns a message when serialization fails
pub fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let text =
        serde_json::to_string_pretty(value).map_err(|e| format!("Failed to encode JSON: {e}"))?;
    println!("{text}");
    Ok(())
}
