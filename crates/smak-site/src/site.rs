//! Front controller.
//!
//! [`Site`] ties configuration, storage, navigation and plugins together:
//! it resolves requests and renders the selected shell with the page title,
//! menu, body and side templates and plugin output filled in.
//!
//! # Thread Safety
//!
//! `Site` is shared between request handlers behind an `Arc`:
//! - configuration and plugins are fixed at construction
//! - the navigation tree lives in `RwLock<Option<Arc<NavigationTree>>>`;
//!   readers clone the `Arc` and reloading swaps it

use std::sync::{Arc, RwLock};

use smak_storage::Storage;

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::html::escape_html;
use crate::navigation::{NavMatcher, NavigationTree};
use crate::plugin::PluginRegistry;
use crate::request::{RequestContext, RequestedTemplate, Resolution, Resolver, TemplateId};
use crate::shell::{Placeholder, render_shell};
use crate::title::TitleBuilder;

/// Result of rendering a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedPage {
    /// Complete HTML document.
    pub html: String,
    /// Page title, before HTML escaping.
    pub title: String,
    /// Name of the shell the page was rendered with.
    pub shell: String,
}

/// Smak site: request resolution and page rendering over a [`Storage`].
pub struct Site {
    storage: Arc<dyn Storage>,
    config: SiteConfig,
    plugins: PluginRegistry,
    navigation: RwLock<Option<Arc<NavigationTree>>>,
}

impl Site {
    /// Create a site.
    ///
    /// # Arguments
    ///
    /// * `storage` - Storage holding templates, shells and the navigation file
    /// * `config` - Site configuration
    /// * `plugins` - Plugins available to shells
    ///
    /// # Errors
    ///
    /// Returns [`SiteError`] if the title format or an extension is invalid,
    /// or if the default template or default shell does not exist.
    pub fn new(
        storage: Arc<dyn Storage>,
        config: SiteConfig,
        plugins: PluginRegistry,
    ) -> Result<Self, SiteError> {
        config.validate()?;

        let template_key = config.templates.body_key(&config.templates.default);
        if !storage.exists(&template_key) {
            return Err(SiteError::DefaultNotFound {
                kind: "template",
                key: template_key,
            });
        }

        let shell_key = config.shells.key(&config.shells.default);
        if !storage.exists(&shell_key) {
            return Err(SiteError::DefaultNotFound {
                kind: "shell",
                key: shell_key,
            });
        }

        Ok(Self {
            storage,
            config,
            plugins,
            navigation: RwLock::new(None),
        })
    }

    /// Site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Registered plugins.
    #[must_use]
    pub fn plugins(&self) -> &PluginRegistry {
        &self.plugins
    }

    /// Resolve a request against the template directory.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Routing`] when the request carries no template
    /// parameter and is neither `/` nor the entry path.
    pub fn resolve(&self, ctx: &RequestContext) -> Result<Resolution, SiteError> {
        Resolver::new(&self.config, self.storage.as_ref()).resolve(ctx)
    }

    /// Load the navigation JSON document stored under `key`.
    ///
    /// The parsed tree replaces the current one; readers holding the previous
    /// tree keep using it.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::NavigationRead`] if the file cannot be read and
    /// [`SiteError::NavigationParse`] if it is not a navigation document.
    pub fn load_navigation(&self, key: &str) -> Result<Arc<NavigationTree>, SiteError> {
        let json = self
            .storage
            .read(key)
            .map_err(|source| SiteError::NavigationRead {
                file: key.to_owned(),
                source,
            })?;
        let tree = NavigationTree::from_json(&json).map_err(|source| {
            SiteError::NavigationParse {
                file: key.to_owned(),
                source,
            }
        })?;

        tracing::info!(file = %key, nodes = tree.len(), "Loaded navigation");

        let tree = Arc::new(tree);
        *self.navigation.write().unwrap() = Some(Arc::clone(&tree));
        Ok(tree)
    }

    /// Current navigation tree.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::NavigationNotLoaded`] before the first successful
    /// [`load_navigation`](Self::load_navigation).
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    pub fn navigation(&self) -> Result<Arc<NavigationTree>, SiteError> {
        self.navigation
            .read()
            .unwrap()
            .clone()
            .ok_or(SiteError::NavigationNotLoaded)
    }

    /// Formatted page title, not HTML-escaped.
    #[must_use]
    pub fn title(&self, requested: &RequestedTemplate) -> String {
        TitleBuilder::new(&self.config.title).build(requested)
    }

    /// Navigation menu for a request.
    ///
    /// # Arguments
    ///
    /// * `requested` - Resolved request
    /// * `attributes` - Raw HTML attributes for the `<ul>` element
    pub fn nav_menu(
        &self,
        requested: &RequestedTemplate,
        attributes: &[&str],
    ) -> Result<String, SiteError> {
        let tree = self.navigation()?;
        Ok(self.matcher(&tree, requested).render_menu(attributes))
    }

    /// Name of the shell to render a request with.
    pub fn select_shell(&self, requested: &RequestedTemplate) -> Result<String, SiteError> {
        let tree = self.navigation()?;
        let matcher = self.matcher(&tree, requested);
        Ok(matcher.select_layout(&self.config.shells.default).to_owned())
    }

    /// Content of a body template.
    ///
    /// Uses `name` when given, else the requested template, else the default
    /// template. A missing file yields an empty string.
    pub fn body_template(
        &self,
        name: Option<&str>,
        requested: &RequestedTemplate,
    ) -> Result<String, SiteError> {
        let name = self.template_name(name, requested);
        self.read_optional(&self.config.templates.body_key(name))
    }

    /// Content of a side template, looked up like [`body_template`](Self::body_template)
    /// in the side template directory.
    pub fn side_template(
        &self,
        name: Option<&str>,
        requested: &RequestedTemplate,
    ) -> Result<String, SiteError> {
        let name = self.template_name(name, requested);
        self.read_optional(&self.config.templates.side_key(name))
    }

    /// Render the page for a resolved request.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::NavigationNotLoaded`] before navigation is loaded,
    /// [`SiteError::ShellNotFound`] if the selected shell is missing, and
    /// plugin errors raised while filling `%plugin:NAME%` placeholders.
    pub fn render(&self, requested: &RequestedTemplate) -> Result<RenderedPage, SiteError> {
        let tree = self.navigation()?;
        let matcher = self.matcher(&tree, requested);

        let shell = matcher
            .select_layout(&self.config.shells.default)
            .to_owned();
        let shell_key = self.config.shells.key(&shell);
        if !self.storage.exists(&shell_key) {
            return Err(SiteError::ShellNotFound(shell_key));
        }
        let shell_source = self.storage.read(&shell_key)?;

        let title = self.title(requested);
        let html = render_shell(&shell_source, |placeholder| match placeholder {
            Placeholder::Title => Ok(escape_html(&title)),
            Placeholder::Nav(attributes) => Ok(matcher.render_menu(attributes.as_slice())),
            Placeholder::Body => self.body_template(None, requested),
            Placeholder::Side => self.side_template(None, requested),
            Placeholder::Plugin(name) => self.render_plugin(name, requested),
        })?;

        tracing::debug!(
            template = requested.template_id().map_or("", TemplateId::as_str),
            shell = %shell,
            "Rendered page"
        );

        Ok(RenderedPage { html, title, shell })
    }

    fn matcher<'a>(
        &'a self,
        tree: &'a NavigationTree,
        requested: &'a RequestedTemplate,
    ) -> NavMatcher<'a> {
        NavMatcher::new(tree, requested, &self.config.templates.default)
    }

    fn template_name<'a>(
        &'a self,
        name: Option<&'a str>,
        requested: &'a RequestedTemplate,
    ) -> &'a str {
        name.or_else(|| requested.template_id().map(TemplateId::as_str))
            .unwrap_or(self.config.templates.default.as_str())
    }

    fn read_optional(&self, key: &str) -> Result<String, SiteError> {
        if self.storage.exists(key) {
            Ok(self.storage.read(key)?)
        } else {
            tracing::debug!(key = %key, "Template not found, using empty content");
            Ok(String::new())
        }
    }

    fn render_plugin(
        &self,
        name: &str,
        requested: &RequestedTemplate,
    ) -> Result<String, SiteError> {
        self.plugins
            .require(name)?
            .render(requested)
            .map_err(|source| SiteError::Plugin {
                name: name.to_owned(),
                source,
            })
    }
}
