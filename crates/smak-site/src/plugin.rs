//! Plugin registry.
//!
//! Plugins contribute HTML fragments to shells through `%plugin:NAME%`
//! placeholders. The registry is filled while the site is configured and is
//! read-only afterwards.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::SiteError;
use crate::request::RequestedTemplate;

/// Error reported by a plugin while rendering.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct PluginError {
    message: String,
}

impl PluginError {
    /// Create a plugin error from any displayable cause.
    pub fn new(message: impl fmt::Display) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// A named capability that renders a fragment for the current request.
pub trait Plugin: Send + Sync {
    /// Registry key, referenced from shells as `%plugin:NAME%`.
    fn name(&self) -> &str;

    /// Render the fragment for `requested`.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError`] when the fragment cannot be produced.
    fn render(&self, requested: &RequestedTemplate) -> Result<String, PluginError>;
}

/// Registry mapping plugin names to instances.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: BTreeMap<String, Arc<dyn Plugin>>,
}

impl PluginRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin under its own name.
    ///
    /// The first registration for a name wins; later ones are ignored.
    pub fn register(&mut self, plugin: Arc<dyn Plugin>) -> &mut Self {
        let name = plugin.name().to_owned();
        if self.plugins.contains_key(&name) {
            tracing::warn!(plugin = %name, "Plugin already registered, ignoring");
        } else {
            tracing::debug!(plugin = %name, "Registered plugin");
            self.plugins.insert(name, plugin);
        }
        self
    }

    /// Remove a plugin, returning it if it was registered.
    pub fn unregister(&mut self, name: &str) -> Option<Arc<dyn Plugin>> {
        self.plugins.remove(name)
    }

    /// Whether a plugin is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    /// Look up a plugin.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Plugin>> {
        self.plugins.get(name)
    }

    /// Look up a plugin that shells require.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::PluginNotRegistered`] if no plugin has that name.
    pub fn require(&self, name: &str) -> Result<&dyn Plugin, SiteError> {
        self.get(name)
            .map(AsRef::as_ref)
            .ok_or_else(|| SiteError::PluginNotRegistered(name.to_owned()))
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plugins.keys().map(String::as_str)
    }

    /// Number of registered plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether no plugin is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
