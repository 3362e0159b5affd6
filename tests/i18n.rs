//! Integration tests for lookup, substitution and language state.

#[path = "i18n/language_state.rs"]
mod language_state;
#[path = "i18n/locales_dir.rs"]
mod locales_dir;
#[path = "i18n/resolution.rs"]
mod resolution;
