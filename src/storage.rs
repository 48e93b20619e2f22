//! Durable key-value storage
//!
//! The question repository keeps its whole list under a single key of a
//! string key-value store. This module defines that port together with an
//! in-memory implementation and a directory-backed one for native hosts.

use std::{
    collections::HashMap,
    convert::Infallible,
    fs, io,
    path::{Path, PathBuf},
};

/// A string key-value store with overwrite semantics
pub trait Storage {
    /// Error produced by the underlying store
    type Error: std::error::Error + Send + Sync + 'static;

    /// Reads the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns the store's error if the value exists but cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Replaces the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns the store's error if the value cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// Storage held entirely in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates a store pre-populated with a single entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_owned(), value.to_owned());
        Self { entries }
    }
}

impl Storage for MemoryStorage {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Storage keeping one `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    directory: PathBuf,
}

impl FileStorage {
    /// Creates a store rooted at `directory`
    ///
    /// The directory is created lazily on the first write.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Returns the directory this store writes into
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    type Error = io::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        match fs::read_to_string(self.path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        fs::create_dir_all(&self.directory)?;
        fs::write(self.path(key), value)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_missing_key() {
        let storage = MemoryStorage::default();
        assert_eq!(storage.get("nothing").unwrap(), None);
    }

    #[test]
    fn test_memory_storage_overwrites() {
        let mut storage = MemoryStorage::with_entry("key", "first");
        storage.set("key", "second").unwrap();
        assert_eq!(storage.get("key").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_file_storage_round_trip() {
        let directory = std::env::temp_dir().join(format!(
            "feud-storage-test-{}-{}",
            std::process::id(),
            web_time::SystemTime::now()
                .duration_since(web_time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        let mut storage = FileStorage::new(&directory);

        assert_eq!(storage.get("questions").unwrap(), None);
        storage.set("questions", "[]").unwrap();
        assert_eq!(storage.get("questions").unwrap().as_deref(), Some("[]"));
        storage.set("questions", "[1]").unwrap();
        assert_eq!(storage.get("questions").unwrap().as_deref(), Some("[1]"));

        fs::remove_dir_all(storage.directory()).unwrap();
    }
}
