//! Site error types.
//!
//! Every variant is a configuration problem: the site refuses to serve until
//! it is fixed. Per-request outcomes (not found, redirect) are
//! [`Resolution`](crate::Resolution) values, not errors.

use smak_storage::StorageError;

use crate::plugin::PluginError;

/// Error returned when the site is misconfigured.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Request reached the resolver without the template parameter.
    #[error(
        "Unable to get requested template for {path}: check the rewrite rule and the `{param}` parameter"
    )]
    Routing {
        /// Request path.
        path: String,
        /// Expected query parameter name.
        param: String,
    },
    /// Navigation used before `load_navigation()`.
    #[error("Navigation not loaded: call load_navigation() before rendering")]
    NavigationNotLoaded,
    /// Navigation file could not be read.
    #[error("Unable to load navigation file {file}: {source}")]
    NavigationRead {
        /// Navigation site key.
        file: String,
        /// Storage failure.
        source: StorageError,
    },
    /// Navigation file is not a valid navigation document.
    #[error("Unable to parse navigation file {file}: {source}")]
    NavigationParse {
        /// Navigation site key.
        file: String,
        /// JSON failure.
        source: serde_json::Error,
    },
    /// Selected shell does not exist.
    #[error("Unable to load the shell {0}")]
    ShellNotFound(String),
    /// Default template or shell does not exist.
    #[error("Unable to find the default {kind} file {key}")]
    DefaultNotFound {
        /// "template" or "shell".
        kind: &'static str,
        /// Missing site key.
        key: String,
    },
    /// Title format lacks the `%title%` placeholder.
    #[error("Title format {0:?} must contain the %title% placeholder")]
    InvalidTitleFormat(String),
    /// Extension does not look like `.abc`.
    #[error("Invalid {kind} extension {ext:?}: expected a dot followed by 1 to 6 letters or digits")]
    InvalidExtension {
        /// "template" or "shell".
        kind: &'static str,
        /// Rejected extension.
        ext: String,
    },
    /// Shell references a plugin that is not registered.
    #[error("There is no registered plugin {0}")]
    PluginNotRegistered(String),
    /// Plugin failed while rendering.
    #[error("Plugin {name} failed: {source}")]
    Plugin {
        /// Plugin name.
        name: String,
        /// Plugin failure.
        source: PluginError,
    },
    /// Storage failure while reading a template or shell.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
