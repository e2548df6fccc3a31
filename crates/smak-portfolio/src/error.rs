use std::path::PathBuf;

/// Error returned by portfolio operations.
#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    /// Path is not a directory.
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    /// Extension list replaced by an empty one.
    #[error("Allowed {kind} extensions must not be empty")]
    EmptyExtensions {
        /// "photo" or "template".
        kind: &'static str,
    },
    /// Filesystem failure.
    #[error("Unable to read {}: {source}", path.display())]
    Io {
        /// Path being read.
        path: PathBuf,
        /// I/O failure.
        source: std::io::Error,
    },
}

impl PortfolioError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
