//! Preferred-locale detection.
//!
//! On the site the preference comes from the browser's reported locale; the
//! command-line tool reads the POSIX locale variables instead. Either way only
//! the two-letter language prefix matters.

use std::env;

use crate::i18n::language::Language;

/// Locale variables in priority order.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// What: Detect the user's preferred locale from the environment.
///
/// Output:
/// - Raw locale string such as `fr_FR.UTF-8`, or `None` when unset
///
/// Details:
/// - Checks `LC_ALL`, `LC_MESSAGES` and `LANG` in that order
/// - Skips empty values and the `C`/`POSIX` locales, which carry no language
#[must_use]
pub fn detect_system_locale() -> Option<String> {
    LOCALE_VARS.iter().find_map(|var_name| {
        env::var(var_name).ok().filter(|value| {
            let trimmed = value.trim();
            !trimmed.is_empty() && trimmed != "C" && trimmed != "POSIX"
        })
    })
}

/// What: Map a reported locale onto a supported language.
///
/// Inputs:
/// - `locale`: Browser or system locale (e.g., "fr-FR", "ca_ES.UTF-8", "en")
///
/// Output:
/// - `Some(Language)` when the first two letters name a supported language
///
/// Details:
/// - Only the two-letter prefix is inspected; region, script and encoding are ignored
#[must_use]
pub fn language_from_locale(locale: &str) -> Option<Language> {
    let prefix: String = locale.trim().chars().take(2).collect();
    if prefix.chars().count() < 2 {
        return None;
    }
    Language::from_code(&prefix)
}
