//! Localization engine for the Aran Football Academy site.
//!
//! Resolves dot-notation keys to per-language templates with fallback,
//! substitutes named placeholders, and renders declarative `data-i18n*`
//! markers of a page document in the selected language.

pub mod binding;
pub mod document;
pub mod i18n;
pub mod storage;
pub mod util;

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a shared mutex to serialize tests that mutate process-wide state.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
///
/// Details:
/// - Callers lock it around environment-variable changes.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
