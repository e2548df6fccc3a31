//! Application state.
//!
//! Shared state for all request handlers.

use std::path::PathBuf;
use std::sync::Arc;

use smak_site::Site;

/// Directory served under a URL prefix.
#[derive(Clone, Debug)]
pub(crate) struct Mount {
    /// URL prefix without trailing slash (e.g. "/photos").
    pub(crate) url: String,
    /// Directory to serve.
    pub(crate) dir: PathBuf,
}

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Front controller.
    pub(crate) site: Arc<Site>,
    /// Storage key of the navigation file, re-read on reload.
    pub(crate) navigation_file: String,
    /// Rewrite pretty paths into the template query parameter.
    pub(crate) rewrite: bool,
    /// Static assets served before the front controller.
    pub(crate) static_dir: Option<PathBuf>,
    /// Portfolio photos.
    pub(crate) photos: Option<Mount>,
    /// Application version for cache invalidation.
    pub(crate) version: String,
}
