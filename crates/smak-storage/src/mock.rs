//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::storage::{Storage, StorageError, normalize_key};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// Mock storage for testing.
///
/// Stores file contents in memory, keyed by normalized site key. Use the
/// builder methods to configure the mock with test data.
///
/// # Example
///
/// ```ignore
/// use smak_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_file("tpl/about.tpl", "<p>About</p>")
///     .with_file("shl/default.shl", "%body%");
///
/// assert!(storage.exists("tpl/about.tpl"));
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    files: RwLock<HashMap<String, String>>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given key and content.
    ///
    /// # Panics
    ///
    /// Panics if the key is not a valid site key or the internal lock is poisoned.
    #[must_use]
    pub fn with_file(self, key: &str, content: impl Into<String>) -> Self {
        self.insert(key, content);
        self
    }

    /// Insert or replace a file after construction.
    ///
    /// # Panics
    ///
    /// Panics if the key is not a valid site key or the internal lock is poisoned.
    pub fn insert(&self, key: &str, content: impl Into<String>) {
        let key = normalize_key(key).unwrap();
        self.files.write().unwrap().insert(key, content.into());
    }

    /// Remove a file.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn remove(&self, key: &str) {
        if let Ok(key) = normalize_key(key) {
            self.files.write().unwrap().remove(&key);
        }
    }
}

impl Storage for MockStorage {
    fn read(&self, key: &str) -> Result<String, StorageError> {
        let normalized = normalize_key(key).map_err(|e| e.with_backend(BACKEND))?;
        self.files
            .read()
            .unwrap()
            .get(&normalized)
            .cloned()
            .ok_or_else(|| StorageError::not_found(normalized).with_backend(BACKEND))
    }

    fn exists(&self, key: &str) -> bool {
        normalize_key(key).is_ok_and(|k| self.files.read().unwrap().contains_key(&k))
    }
}
