//! Filesystem storage backend.

use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::{Storage, StorageError, normalize_key};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem storage rooted at the site directory.
///
/// Every key is normalized with [`normalize_key`] before it touches the
/// filesystem, so lookups never leave `root`.
#[derive(Debug, Clone)]
pub struct FsStorage {
    /// Site root directory (the original include path).
    root: PathBuf,
}

impl FsStorage {
    /// Create a new filesystem storage rooted at `root`.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Root directory of this storage.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a key to an absolute filesystem path under the root.
    fn resolve(&self, key: &str) -> Result<PathBuf, StorageError> {
        let normalized = normalize_key(key).map_err(|e| e.with_backend(BACKEND))?;
        Ok(self.root.join(normalized))
    }
}

impl Storage for FsStorage {
    fn read(&self, key: &str) -> Result<String, StorageError> {
        let path = self.resolve(key)?;
        tracing::debug!(path = %path.display(), "Reading file");
        fs::read_to_string(&path)
            .map_err(|e| StorageError::io(e, Some(path)).with_backend(BACKEND))
    }

    fn exists(&self, key: &str) -> bool {
        self.resolve(key).is_ok_and(|path| path.is_file())
    }
}
