//! Request resolution.
//!
//! Turns the inbound request (path plus the template query parameter set by
//! the rewrite rule) into a [`Resolution`]. The resolver never talks HTTP:
//! redirects and not-found are returned as values for the caller to act on.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use smak_storage::Storage;

use crate::config::SiteConfig;
use crate::error::SiteError;

/// Whitelist for requested template names (e.g. `foo-bAr/baZ_12`).
static TEMPLATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_/-]+$").unwrap());

/// The parts of an inbound request the resolver needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestContext {
    path: String,
    param: Option<String>,
}

impl RequestContext {
    /// Create a request context.
    ///
    /// # Arguments
    ///
    /// * `path` - Request path without query string (e.g. "/", "/index.php")
    /// * `param` - Value of the template query parameter, if present
    pub fn new(path: impl Into<String>, param: Option<String>) -> Self {
        Self {
            path: path.into(),
            param,
        }
    }

    /// Request path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Template query parameter value.
    #[must_use]
    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }
}

/// A whitelisted, lowercased template identifier without extension.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TemplateId(String);

impl TemplateId {
    /// Check a raw value against the template whitelist.
    #[must_use]
    pub fn is_valid(raw: &str) -> bool {
        TEMPLATE_PATTERN.is_match(raw)
    }

    /// Validate and lowercase a raw value.
    ///
    /// Returns `None` if the value contains anything besides ASCII letters,
    /// digits, `_`, `-` and `/`, or is empty.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::is_valid(raw).then(|| Self(raw.to_lowercase()))
    }

    /// Identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Slash-separated path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }
}

impl AsRef<str> for TemplateId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolved template state of the current request.
///
/// Computed once per request and never mutated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestedTemplate {
    raw_param: Option<String>,
    template_id: Option<TemplateId>,
}

impl RequestedTemplate {
    /// The bare index route (no template requested).
    #[must_use]
    pub fn index() -> Self {
        Self::default()
    }

    /// A resolved template.
    #[must_use]
    pub fn resolved(raw_param: impl Into<String>, template_id: TemplateId) -> Self {
        Self {
            raw_param: Some(raw_param.into()),
            template_id: Some(template_id),
        }
    }

    /// Raw query parameter value, before lowercasing.
    #[must_use]
    pub fn raw_param(&self) -> Option<&str> {
        self.raw_param.as_deref()
    }

    /// Resolved template identifier, `None` for the index route.
    #[must_use]
    pub fn template_id(&self) -> Option<&TemplateId> {
        self.template_id.as_ref()
    }

    /// Whether this is the bare index route.
    #[must_use]
    pub fn is_index(&self) -> bool {
        self.template_id.is_none()
    }
}

/// Outcome of resolving a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Render a page for this template.
    Page(RequestedTemplate),
    /// Redirect to `location` and stop.
    Redirect {
        /// Redirect target.
        location: String,
    },
    /// Respond 404 with no body and stop.
    NotFound,
}

/// Resolves requests against the configured template directory.
pub struct Resolver<'a> {
    config: &'a SiteConfig,
    storage: &'a dyn Storage,
}

impl<'a> Resolver<'a> {
    /// Create a resolver.
    #[must_use]
    pub fn new(config: &'a SiteConfig, storage: &'a dyn Storage) -> Self {
        Self { config, storage }
    }

    /// Resolve a request.
    ///
    /// The template parameter takes precedence over the path. Without it,
    /// `/` is the index route and the entry path redirects to `/`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Routing`] when neither the parameter nor a known
    /// path is present, which means the rewrite rule is misconfigured.
    pub fn resolve(&self, ctx: &RequestContext) -> Result<Resolution, SiteError> {
        if let Some(raw) = ctx.param() {
            return Ok(self.resolve_param(raw));
        }

        if ctx.path() == "/" {
            return Ok(Resolution::Page(RequestedTemplate::index()));
        }

        if ctx.path() == self.config.routing.entry_path {
            tracing::debug!(path = %ctx.path(), "Redirecting entry path to /");
            return Ok(Resolution::Redirect {
                location: "/".to_owned(),
            });
        }

        Err(SiteError::Routing {
            path: ctx.path().to_owned(),
            param: self.config.routing.param.clone(),
        })
    }

    fn resolve_param(&self, raw: &str) -> Resolution {
        if TemplateId::is_valid(raw)
            && self.storage.exists(&self.config.templates.body_key(raw))
            && let Some(id) = TemplateId::parse(raw)
        {
            return Resolution::Page(RequestedTemplate::resolved(raw, id));
        }

        tracing::debug!(param = %raw, "Requested template not found");
        Resolution::NotFound
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use smak_storage::MockStorage;

    use super::*;

    fn storage() -> MockStorage {
        MockStorage::new()
            .with_file("tpl/index.tpl", "Welcome")
            .with_file("tpl/about.tpl", "About")
            .with_file("tpl/Contact.tpl", "Contact")
            .with_file("tpl/foo-bar/baz_1.tpl", "Baz")
    }

    fn resolve(path: &str, param: Option<&str>) -> Result<Resolution, SiteError> {
        let config = SiteConfig::default();
        let storage = storage();
        let resolver = Resolver::new(&config, &storage);
        resolver.resolve(&RequestContext::new(path, param.map(str::to_owned)))
    }

    #[test]
    fn test_root_without_param_is_index_route() {
        let resolution = resolve("/", None).unwrap();

        assert_eq!(resolution, Resolution::Page(RequestedTemplate::index()));
    }

    #[test]
    fn test_entry_path_redirects_to_root() {
        let resolution = resolve("/index.php", None).unwrap();

        assert_eq!(
            resolution,
            Resolution::Redirect {
                location: "/".to_owned()
            }
        );
    }

    #[test]
    fn test_existing_template_resolves() {
        let resolution = resolve("/about", Some("about")).unwrap();

        let Resolution::Page(requested) = resolution else {
            panic!("expected page, got {resolution:?}");
        };
        assert_eq!(requested.template_id().unwrap().as_str(), "about");
        assert_eq!(requested.raw_param(), Some("about"));
        assert!(!requested.is_index());
    }

    #[test]
    fn test_resolved_template_is_lowercased() {
        let resolution = resolve("/Contact", Some("Contact")).unwrap();

        let Resolution::Page(requested) = resolution else {
            panic!("expected page, got {resolution:?}");
        };
        assert_eq!(requested.template_id().unwrap().as_str(), "contact");
        assert_eq!(requested.raw_param(), Some("Contact"));
    }

    #[test]
    fn test_nested_template_resolves() {
        let resolution = resolve("/foo-bar/baz_1", Some("foo-bar/baz_1")).unwrap();

        assert!(matches!(resolution, Resolution::Page(_)));
    }

    #[test]
    fn test_param_wins_over_root_path() {
        let resolution = resolve("/", Some("missing")).unwrap();

        assert_eq!(resolution, Resolution::NotFound);
    }

    #[test]
    fn test_missing_template_is_not_found() {
        assert_eq!(resolve("/x", Some("contact-us")).unwrap(), Resolution::NotFound);
    }

    #[test]
    fn test_path_traversal_is_not_found() {
        assert_eq!(
            resolve("/x", Some("../etc/passwd")).unwrap(),
            Resolution::NotFound
        );
    }

    #[test]
    fn test_non_whitelisted_characters_are_not_found() {
        for param in ["", "about.tpl", "about?x=1", "ab out", "caf\u{e9}", "a\\b"] {
            assert_eq!(
                resolve("/x", Some(param)).unwrap(),
                Resolution::NotFound,
                "{param:?}"
            );
        }
    }

    #[test]
    fn test_unknown_path_without_param_is_routing_error() {
        let err = resolve("/about", None).unwrap_err();

        assert!(matches!(err, SiteError::Routing { .. }));
        assert!(err.to_string().contains("`tpl`"));
    }

    #[test]
    fn test_template_id_parse() {
        assert_eq!(TemplateId::parse("Foo-bAr/baZ_12").unwrap().as_str(), "foo-bar/baz_12");
        assert!(TemplateId::parse("../x").is_none());
        assert_eq!(
            TemplateId::parse("a/b/c").unwrap().segments().collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
    }
}
