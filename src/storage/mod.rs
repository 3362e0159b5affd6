//! Client-side key/value storage for user preferences.
//!
//! Mirrors the browser's `localStorage`: string keys, string values,
//! synchronous access. Every backend may fail; callers that only need a
//! preference go through [`read_best_effort`] / [`write_best_effort`], which
//! log the failure and carry on as if the value were absent.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Storage entry holding the last selected language code.
pub const LANGUAGE_STORAGE_KEY: &str = "afa-lang";

/// Failures a storage backend can report.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Underlying file could not be read or written.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// Stored data is not a JSON object of strings.
    #[error("storage data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    /// Backend refuses access (disabled storage, quota exceeded).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Synchronous string key/value store.
pub trait Storage {
    /// What: Read one entry.
    ///
    /// # Errors
    /// - Returns a [`StorageError`] when the backend cannot be read
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// What: Write one entry, replacing any previous value.
    ///
    /// # Errors
    /// - Returns a [`StorageError`] when the backend cannot be written
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// What: Delete one entry; deleting a missing entry is not an error.
    ///
    /// # Errors
    /// - Returns a [`StorageError`] when the backend cannot be written
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// What: Read an entry, treating every failure as "absent".
///
/// Inputs:
/// - `storage`: Backend to read
/// - `key`: Entry name
///
/// Output:
/// - Stored value, or `None` when missing or unreadable
#[must_use]
pub fn read_best_effort(storage: &dyn Storage, key: &str) -> Option<String> {
    match storage.get_item(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "[Storage] read failed, treating as absent");
            None
        }
    }
}

/// What: Write an entry, logging instead of propagating failures.
///
/// Inputs:
/// - `storage`: Backend to write
/// - `key`: Entry name
/// - `value`: New value
///
/// Output:
/// - `true` when the write succeeded
pub fn write_best_effort(storage: &mut dyn Storage, key: &str, value: &str) -> bool {
    match storage.set_item(key, value) {
        Ok(()) => {
            tracing::debug!(key = %key, value = %value, "[Storage] entry written");
            true
        }
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "[Storage] write failed, value not persisted");
            false
        }
    }
}
