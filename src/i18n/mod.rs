//! Internationalization (i18n) engine of the academy site.
//!
//! # Overview
//!
//! - **Languages**: closed allow-list `es` (default and fallback), `ca`, `fr`, `en`
//! - **Store**: per-language maps of dot-notation keys to templates, loaded once and never mutated
//! - **Resolver**: [`translate`] looks a key up in the requested language, then in the default
//!   language, then echoes the key; `{{ name }}` placeholders are substituted in a single pass
//! - **Context**: [`I18nContext`] owns the current language, persists it to client storage
//!   and renders pages through the binding registry
//!
//! # Locale Files
//!
//! Locale files live in `config/locales/{code}.yml` and are compiled into the crate. Each holds
//! one top-level key (the language code) with a nested structure flattened to dot keys:
//!
//! ```yaml
//! es:
//!   hero:
//!     slider:
//!       dot: "Diapositiva {{index}}"
//! ```
//!
//! This becomes accessible as `hero.slider.dot`.
//!
//! # Usage
//!
//! ```rust
//! use afa_i18n::i18n::{Language, ReplacementSet, TranslationStore, translate};
//!
//! let store = TranslationStore::embedded();
//! let args = ReplacementSet::new().with("index", 2);
//! assert_eq!(translate(store, "hero.slider.dot", &args, Language::En), "Slide 2");
//! assert_eq!(translate(store, "no.such.key", &args, Language::En), "no.such.key");
//! ```
//!
//! # Error Handling
//!
//! - Missing keys fall back to the default language, then to the key itself (logged at debug)
//! - Unsupported language codes resolve to the default language
//! - Storage failures are logged and treated as "nothing persisted"

mod context;
mod detection;
mod language;
mod loader;
mod store;
pub mod translations;

pub use context::I18nContext;
pub use detection::{detect_system_locale, language_from_locale};
pub use language::{DEFAULT_LANGUAGE, Language, LanguageMeta, SUPPORTED_LANGUAGES};
pub use loader::{load_locale_file, parse_locale_yaml};
pub use store::TranslationStore;
pub use translations::{ReplacementSet, TranslationMap, format_translation, translate};

use std::path::PathBuf;

/// What: Find the locales directory in development and installed locations.
///
/// Output:
/// - `Some(PathBuf)` pointing to the first existing locales directory found, or `None` if not found
///
/// Details:
/// - Tries locations in order:
///   1. Development location: `CARGO_MANIFEST_DIR/config/locales` (prioritized when running from source)
///   2. Installed location: `/usr/share/afa-i18n/locales`
/// - Only needed to edit locales without rebuilding; the embedded copies are used otherwise
#[must_use]
pub fn find_locales_dir() -> Option<PathBuf> {
    let dev_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("config")
        .join("locales");
    if dev_path.is_dir() {
        return Some(dev_path);
    }

    let installed_path = PathBuf::from("/usr/share/afa-i18n/locales");
    if installed_path.is_dir() {
        return Some(installed_path);
    }

    None
}
