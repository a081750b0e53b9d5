//! File-based Key-Value Store Adapter
//!
//! Stores each key as its own file under a base directory. Writes go to a
//! temporary sibling first and are renamed into place, so a reader sees
//! either the old value or the new one.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::ports::{KeyValueStore, StoreError};

/// File-based storage for device-scoped values
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a new file store rooted at a base directory
    ///
    /// The directory is created lazily on first write.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileKeyValueStore::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Returns the directory holding the value files.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Keys become file names, so only a safe character set is accepted
    fn validate_key(key: &str) -> Result<(), StoreError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if valid {
            Ok(())
        } else {
            Err(StoreError::InvalidKey(key.to_string()))
        }
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!(".{}.json.tmp", key))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::validate_key(key)?;

        match fs::read_to_string(self.value_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::IoError(e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::validate_key(key)?;

        fs::create_dir_all(&self.base_path).map_err(|e| StoreError::IoError(e.to_string()))?;

        let temp_path = self.temp_path(key);
        let mut file =
            fs::File::create(&temp_path).map_err(|e| StoreError::IoError(e.to_string()))?;
        file.write_all(value.as_bytes())
            .and_then(|_| file.sync_all())
            .map_err(|e| StoreError::IoError(e.to_string()))?;
        drop(file);

        fs::rename(&temp_path, self.value_path(key))
            .map_err(|e| StoreError::IoError(e.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Self::validate_key(key)?;

        match fs::remove_file(self.value_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::IoError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_set_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        store.set("progress", "{\"a\":1}").unwrap();

        assert_eq!(store.get("progress").unwrap().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn test_file_store_get_missing_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        assert_eq!(store.get("nothing").unwrap(), None);
    }

    #[test]
    fn test_file_store_overwrite_replaces_whole_value() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        store.set("k", "a much longer first value").unwrap();
        store.set("k", "short").unwrap();

        assert_eq!(store.get("k").unwrap().as_deref(), Some("short"));
    }

    #[test]
    fn test_file_store_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        store.set("k", "v").unwrap();

        let names: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["k.json".to_string()]);
    }

    #[test]
    fn test_file_store_remove_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();

        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        assert!(matches!(
            store.set("../escape", "v"),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(matches!(store.get(".hidden"), Err(StoreError::InvalidKey(_))));
        assert!(matches!(store.remove(""), Err(StoreError::InvalidKey(_))));
    }

    #[test]
    fn test_file_store_creates_missing_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().join("nested").join("dir"));

        store.set("k", "v").unwrap();

        assert!(store.base_path().exists());
    }
}
