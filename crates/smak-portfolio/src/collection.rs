//! Collections of photo sets.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PortfolioError;
use crate::set::Set;

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryKind {
    File,
    Dir,
}

/// Non-hidden entries of `dir` of the given kind as `(file name, path)`,
/// sorted by file name.
pub(crate) fn visible_entries(
    dir: &Path,
    kind: EntryKind,
) -> Result<Vec<(String, PathBuf)>, PortfolioError> {
    let entries = fs::read_dir(dir).map_err(|e| PortfolioError::io(dir, e))?;

    let mut found: Vec<(String, PathBuf)> = entries
        .filter_map(Result::ok)
        .filter(|e| {
            e.file_type().is_ok_and(|t| match kind {
                EntryKind::File => t.is_file(),
                EntryKind::Dir => t.is_dir(),
            })
        })
        .map(|e| (e.file_name().to_string_lossy().into_owned(), e.path()))
        .filter(|(name, _)| !name.starts_with('.'))
        .collect();

    found.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(found)
}

/// A directory whose subdirectories are photo sets.
#[derive(Clone, Debug)]
pub struct Collection {
    path: PathBuf,
    extensions: Option<Vec<String>>,
    template_extensions: Option<Vec<String>>,
}

impl Collection {
    /// Open a collection directory.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::NotADirectory`] if `dir` is not a directory.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, PortfolioError> {
        let dir = dir.as_ref();
        let path = dir
            .canonicalize()
            .map_err(|e| PortfolioError::io(dir, e))?;
        if !path.is_dir() {
            return Err(PortfolioError::NotADirectory(path));
        }
        Ok(Self::from_dir(path))
    }

    pub(crate) fn from_dir(path: PathBuf) -> Self {
        Self {
            path,
            extensions: None,
            template_extensions: None,
        }
    }

    /// Photo extensions applied to every set of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::EmptyExtensions`] for an empty list.
    pub fn set_extensions(&mut self, extensions: Vec<String>) -> Result<&mut Self, PortfolioError> {
        if extensions.is_empty() {
            return Err(PortfolioError::EmptyExtensions { kind: "photo" });
        }
        self.extensions = Some(extensions);
        Ok(self)
    }

    /// Template extensions applied to every set of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::EmptyExtensions`] for an empty list.
    pub fn set_template_extensions(
        &mut self,
        extensions: Vec<String>,
    ) -> Result<&mut Self, PortfolioError> {
        if extensions.is_empty() {
            return Err(PortfolioError::EmptyExtensions { kind: "template" });
        }
        self.template_extensions = Some(extensions);
        Ok(self)
    }

    /// Collection directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sets of the collection, sorted by name. Hidden directories are skipped.
    pub fn sets(&self) -> Result<Vec<Set>, PortfolioError> {
        visible_entries(&self.path, EntryKind::Dir)?
            .into_iter()
            .map(|(_, path)| self.open_set(&path))
            .collect()
    }

    /// Set named `name`.
    pub fn set_by_name(&self, name: &str) -> Result<Option<Set>, PortfolioError> {
        Ok(self.sets()?.into_iter().find(|set| set.name() == name))
    }

    fn open_set(&self, path: &Path) -> Result<Set, PortfolioError> {
        let mut set = Set::open(path)?;
        if let Some(extensions) = &self.extensions {
            set.set_extensions(extensions.clone())?;
        }
        if let Some(extensions) = &self.template_extensions {
            set.set_template_extensions(extensions.clone())?;
        }
        Ok(set)
    }
}
