//! Photo sets.

use std::path::{Path, PathBuf};

use crate::collection::{Collection, EntryKind, visible_entries};
use crate::error::PortfolioError;

/// Photo extensions recognized by default.
pub const DEFAULT_PHOTO_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".jpf", ".png"];

/// Set description template extensions recognized by default.
pub const DEFAULT_TEMPLATE_EXTENSIONS: &[&str] = &[".html.twig"];

/// A photo file inside a set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Photo {
    path: PathBuf,
    file_name: String,
    name: String,
}

impl Photo {
    /// Path of the photo file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name with extension (e.g. `beach.JPG`).
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// File name without the matched extension (e.g. `beach`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A directory of photos.
#[derive(Clone, Debug)]
pub struct Set {
    path: PathBuf,
    name: String,
    extensions: Vec<String>,
    template_extensions: Vec<String>,
}

impl Set {
    /// Open a set directory.
    ///
    /// The set is named after the directory.
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

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            path,
            name,
            extensions: to_owned_list(DEFAULT_PHOTO_EXTENSIONS),
            template_extensions: to_owned_list(DEFAULT_TEMPLATE_EXTENSIONS),
        })
    }

    /// Set name (directory name).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Allowed photo extensions.
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Replace the allowed photo extensions.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::EmptyExtensions`] for an empty list.
    pub fn set_extensions(&mut self, extensions: Vec<String>) -> Result<&mut Self, PortfolioError> {
        if extensions.is_empty() {
            return Err(PortfolioError::EmptyExtensions { kind: "photo" });
        }
        self.extensions = extensions;
        Ok(self)
    }

    /// Allowed description template extensions.
    #[must_use]
    pub fn template_extensions(&self) -> &[String] {
        &self.template_extensions
    }

    /// Replace the allowed description template extensions.
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
        self.template_extensions = extensions;
        Ok(self)
    }

    /// Photos of the set, sorted by file name.
    ///
    /// Hidden files and files without an allowed extension (compared
    /// case-insensitively) are skipped. Subdirectories are not searched.
    pub fn photos(&self) -> Result<Vec<Photo>, PortfolioError> {
        let photos = visible_entries(&self.path, EntryKind::File)?
            .into_iter()
            .filter_map(|(file_name, path)| {
                let name = self.strip_extension(&file_name)?.to_owned();
                Some(Photo {
                    path,
                    file_name,
                    name,
                })
            })
            .collect();
        Ok(photos)
    }

    /// Photo whose name without extension equals `name`.
    pub fn photo_by_name(&self, name: &str) -> Result<Option<Photo>, PortfolioError> {
        Ok(self.photos()?.into_iter().find(|photo| photo.name == name))
    }

    /// Description template: the first existing `<set>/<set name><ext>`.
    #[must_use]
    pub fn template(&self) -> Option<PathBuf> {
        self.template_extensions
            .iter()
            .map(|ext| self.path.join(format!("{}{ext}", self.name)))
            .find(|path| path.is_file())
    }

    /// View the set directory as a collection of nested sets.
    #[must_use]
    pub fn as_collection(&self) -> Collection {
        Collection::from_dir(self.path.clone())
    }

    fn strip_extension<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        self.extensions.iter().find_map(|ext| {
            let split = file_name.len().checked_sub(ext.len()).filter(|&n| n > 0)?;
            let suffix = file_name.get(split..)?;
            suffix
                .eq_ignore_ascii_case(ext)
                .then(|| &file_name[..split])
        })
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|&s| s.to_owned()).collect()
}
