//! Supported site languages and their selector metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages the site ships translations for.
///
/// The set is closed: anything else resolves to [`DEFAULT_LANGUAGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Spanish, the default and fallback language.
    Es,
    /// Catalan.
    Ca,
    /// French.
    Fr,
    /// English.
    En,
}

/// Language consulted when a key is missing and used for unsupported codes.
pub const DEFAULT_LANGUAGE: Language = Language::Es;

/// Allow-list in selector order.
pub const SUPPORTED_LANGUAGES: [Language; 4] =
    [Language::Es, Language::Ca, Language::Fr, Language::En];

/// Display data for the language selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageMeta {
    /// Native name shown in the selector button.
    pub label: &'static str,
    /// Flag glyph shown next to the label.
    pub flag: &'static str,
}

impl Language {
    /// What: Canonical two-letter code.
    ///
    /// Output:
    /// - Code used in storage, the `lang` attribute and locale file names.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::Ca => "ca",
            Self::Fr => "fr",
            Self::En => "en",
        }
    }

    /// What: Parse an exact supported code.
    ///
    /// Inputs:
    /// - `code`: Candidate code (surrounding whitespace and case ignored)
    ///
    /// Output:
    /// - `Some(Language)` for a member of the allow-list, `None` otherwise
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "es" => Some(Self::Es),
            "ca" => Some(Self::Ca),
            "fr" => Some(Self::Fr),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// What: Parse a code, substituting the default for anything unsupported.
    ///
    /// Inputs:
    /// - `code`: Candidate code
    ///
    /// Output:
    /// - Parsed language or [`DEFAULT_LANGUAGE`]
    #[must_use]
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_else(|| {
            tracing::debug!(code = %code, fallback = %DEFAULT_LANGUAGE, "unsupported language code");
            DEFAULT_LANGUAGE
        })
    }

    /// Selector label and flag for this language.
    #[must_use]
    pub const fn meta(self) -> LanguageMeta {
        match self {
            Self::Es => LanguageMeta {
                label: "Español",
                flag: "🇪🇸",
            },
            Self::Ca => LanguageMeta {
                label: "Català",
                flag: "🇦🇩",
            },
            Self::Fr => LanguageMeta {
                label: "Français",
                flag: "🇫🇷",
            },
            Self::En => LanguageMeta {
                label: "English",
                flag: "🇬🇧",
            },
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        DEFAULT_LANGUAGE
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("fr"), Some(Language::Fr));
        assert_eq!(Language::from_code(" EN "), Some(Language::En));
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::from_code(""), None);
        // Region tags are not codes; prefix handling lives in detection.
        assert_eq!(Language::from_code("ca-ES"), None);
    }

    #[test]
    fn test_from_code_or_default() {
        assert_eq!(Language::from_code_or_default("ca"), Language::Ca);
        assert_eq!(Language::from_code_or_default("de"), DEFAULT_LANGUAGE);
        assert_eq!(Language::from_code_or_default("  "), DEFAULT_LANGUAGE);
    }

    #[test]
    fn test_codes_round_trip_through_allow_list() {
        for lang in SUPPORTED_LANGUAGES {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
            assert_eq!(lang.to_string(), lang.code());
        }
    }

    #[test]
    fn test_meta_labels() {
        assert_eq!(Language::Es.meta().label, "Español");
        assert_eq!(Language::Ca.meta().label, "Català");
        assert_eq!(Language::Fr.meta().flag, "🇫🇷");
        assert_eq!(Language::default(), Language::Es);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Language::Fr).expect("serialize language");
        assert_eq!(json, "\"fr\"");
        let back: Language = serde_json::from_str("\"ca\"").expect("deserialize language");
        assert_eq!(back, Language::Ca);
    }
}
