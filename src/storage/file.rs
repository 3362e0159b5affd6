//! JSON-file storage backend used by the command-line tool.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{Storage, StorageError};

/// Key/value entries persisted as one JSON object on disk.
///
/// The file is read on every access and rewritten whole on every change, so
/// separate processes observe each other's writes.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// What: Storage backed by `path`.
    ///
    /// Inputs:
    /// - `path`: JSON file; it does not need to exist yet
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// What: Read all entries.
    ///
    /// Output:
    /// - Entries, empty when the file does not exist or is blank
    ///
    /// # Errors
    /// - `StorageError::Io` when the file exists but cannot be read
    /// - `StorageError::Corrupt` when the content is not a JSON object of strings
    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    /// What: Write all entries, creating parent directories as needed.
    ///
    /// # Errors
    /// - `StorageError::Io` when the directory or file cannot be written
    /// - `StorageError::Corrupt` when serialization fails
    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let s = serde_json::to_string_pretty(entries)?;
        tracing::trace!(
            path = %self.path.display(),
            bytes = s.len(),
            "[Storage] Writing storage file"
        );
        fs::write(&self.path, s)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.load().unwrap_or_else(|e| {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "[Storage] Discarding unreadable storage file"
            );
            BTreeMap::new()
        });
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_across_instances() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
        let path = temp_dir.path().join("nested").join("storage.json");

        let mut writer = FileStorage::new(path.clone());
        assert_eq!(writer.get_item("afa-lang").expect("read missing file"), None);
        writer.set_item("afa-lang", "fr").expect("write storage");

        let reader = FileStorage::new(path);
        assert_eq!(
            reader.get_item("afa-lang").expect("read storage").as_deref(),
            Some("fr")
        );
    }

    #[test]
    fn test_corrupt_file_reads_as_error_and_is_overwritten() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
        let path = temp_dir.path().join("storage.json");
        fs::write(&path, "{not json").expect("Failed to write corrupt storage");

        let mut storage = FileStorage::new(path);
        assert!(matches!(
            storage.get_item("afa-lang"),
            Err(StorageError::Corrupt(_))
        ));
        storage.set_item("afa-lang", "en").expect("overwrite corrupt file");
        assert_eq!(
            storage.get_item("afa-lang").expect("read storage").as_deref(),
            Some("en")
        );
    }

    #[test]
    fn test_remove_item() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
        let mut storage = FileStorage::new(temp_dir.path().join("storage.json"));
        storage.set_item("a", "1").expect("write a");
        storage.set_item("b", "2").expect("write b");
        storage.remove_item("a").expect("remove a");
        storage.remove_item("missing").expect("remove missing");
        assert_eq!(storage.get_item("a").expect("read a"), None);
        assert_eq!(storage.get_item("b").expect("read b").as_deref(), Some("2"));
    }
}
