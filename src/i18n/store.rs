//! Read-only translation store keyed by language.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use crate::i18n::language::{DEFAULT_LANGUAGE, Language, SUPPORTED_LANGUAGES};
use crate::i18n::loader::{EMBEDDED_LOCALES, load_locale_file, parse_locale_yaml};
use crate::i18n::translations::TranslationMap;

/// Static dictionary: language -> key -> template.
///
/// Built once and never mutated afterwards; the default language's map is
/// expected to be complete, other languages may be partial.
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    maps: HashMap<Language, TranslationMap>,
}

impl TranslationStore {
    /// What: Build a store from ready-made maps.
    ///
    /// Inputs:
    /// - `maps`: `(language, map)` pairs; later pairs for the same language replace earlier ones
    ///
    /// Output:
    /// - New store
    #[must_use]
    pub fn from_maps<I>(maps: I) -> Self
    where
        I: IntoIterator<Item = (Language, TranslationMap)>,
    {
        Self {
            maps: maps.into_iter().collect(),
        }
    }

    /// What: Store backed by the locale files compiled into the crate.
    ///
    /// Output:
    /// - Process-wide store, parsed on first use
    ///
    /// Details:
    /// - A locale that fails to parse is logged and left empty so lookups fall back to the
    ///   default language instead of failing
    #[must_use]
    pub fn embedded() -> &'static Self {
        static EMBEDDED: OnceLock<TranslationStore> = OnceLock::new();
        EMBEDDED.get_or_init(|| {
            let maps = EMBEDDED_LOCALES.iter().map(|(lang, yaml)| {
                let map = parse_locale_yaml(yaml).unwrap_or_else(|e| {
                    tracing::warn!(lang = %lang, error = %e, "embedded locale failed to parse");
                    TranslationMap::new()
                });
                tracing::debug!(lang = %lang, keys = map.len(), "loaded embedded locale");
                (*lang, map)
            });
            Self::from_maps(maps)
        })
    }

    /// What: Load every supported language from a locales directory.
    ///
    /// Inputs:
    /// - `locales_dir`: Directory holding `{code}.yml` files
    ///
    /// Output:
    /// - Store with whatever files could be loaded
    ///
    /// # Errors
    /// - Returns `Err` when the default language's file cannot be loaded, since every other
    ///   language falls back to it
    ///
    /// Details:
    /// - Missing or invalid files for non-default languages are logged and skipped
    pub fn from_dir(locales_dir: &Path) -> Result<Self, String> {
        let mut maps = HashMap::new();
        for lang in SUPPORTED_LANGUAGES {
            match load_locale_file(lang, locales_dir) {
                Ok(map) => {
                    tracing::debug!(lang = %lang, keys = map.len(), "loaded locale file");
                    maps.insert(lang, map);
                }
                Err(e) if lang == DEFAULT_LANGUAGE => return Err(e),
                Err(e) => {
                    tracing::warn!(lang = %lang, error = %e, "failed to load locale, using fallback");
                }
            }
        }
        Ok(Self { maps })
    }

    /// What: Template for `(lang, key)`.
    ///
    /// Inputs:
    /// - `lang`: Language to read
    /// - `key`: Dot-notation key
    ///
    /// Output:
    /// - Template text or `None`; no fallback is applied here
    #[must_use]
    pub fn get(&self, lang: Language, key: &str) -> Option<&str> {
        self.maps
            .get(&lang)
            .and_then(|map| map.get(key))
            .map(String::as_str)
    }

    /// Number of keys defined for `lang`.
    #[must_use]
    pub fn key_count(&self, lang: Language) -> usize {
        self.maps.get(&lang).map_or(0, HashMap::len)
    }

    /// What: Default-language keys that `lang` does not define.
    ///
    /// Inputs:
    /// - `lang`: Language to audit
    ///
    /// Output:
    /// - Sorted list of keys that will render through the fallback
    #[must_use]
    pub fn missing_keys(&self, lang: Language) -> Vec<String> {
        let Some(default_map) = self.maps.get(&DEFAULT_LANGUAGE) else {
            return Vec::new();
        };
        let mut missing: Vec<String> = default_map
            .keys()
            .filter(|key| self.get(lang, key).is_none())
            .cloned()
            .collect();
        missing.sort();
        missing
    }
}
