//! Runtime configuration for [`Site`](crate::Site).
//!
//! These are resolved settings: directories are site keys relative to the
//! storage root, and every value is fixed once a `Site` is built.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::SiteError;

/// Allowed shape of template and shell extensions (e.g. `.tpl`, `.shl`).
static EXTENSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.[A-Za-z0-9]{1,6}$").unwrap());

/// Placeholder that title formats must contain.
pub(crate) const TITLE_PLACEHOLDER: &str = "%title%";

/// Build a site key from a directory, a file stem and an extension.
fn file_key(dir: &str, name: &str, ext: &str) -> String {
    format!("{}/{name}{ext}", dir.trim_end_matches('/'))
}

/// Request routing settings.
#[derive(Clone, Debug)]
pub struct RoutingSettings {
    /// Query parameter carrying the requested template (fed by the rewrite rule).
    pub param: String,
    /// Path of the bootstrap entry file; requests to it redirect to `/`.
    pub entry_path: String,
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            param: "tpl".to_owned(),
            entry_path: "/index.php".to_owned(),
        }
    }
}

/// Body and side template settings.
#[derive(Clone, Debug)]
pub struct TemplateSettings {
    /// Directory holding body templates.
    pub dir: String,
    /// Directory holding side templates.
    pub side_dir: String,
    /// Template file extension, including the leading dot.
    pub ext: String,
    /// Template used for the index route.
    pub default: String,
}

impl TemplateSettings {
    /// Site key of a body template.
    #[must_use]
    pub fn body_key(&self, name: &str) -> String {
        file_key(&self.dir, name, &self.ext)
    }

    /// Site key of a side template.
    #[must_use]
    pub fn side_key(&self, name: &str) -> String {
        file_key(&self.side_dir, name, &self.ext)
    }
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            dir: "tpl".to_owned(),
            side_dir: "tpl/side".to_owned(),
            ext: ".tpl".to_owned(),
            default: "index".to_owned(),
        }
    }
}

/// Shell (layout) settings.
#[derive(Clone, Debug)]
pub struct ShellSettings {
    /// Directory holding shells.
    pub dir: String,
    /// Shell file extension, including the leading dot.
    pub ext: String,
    /// Shell used when no navigation node overrides it.
    pub default: String,
}

impl ShellSettings {
    /// Site key of a shell.
    #[must_use]
    pub fn key(&self, name: &str) -> String {
        file_key(&self.dir, name, &self.ext)
    }
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            dir: "shl".to_owned(),
            ext: ".shl".to_owned(),
            default: "default".to_owned(),
        }
    }
}

/// Page title settings.
#[derive(Clone, Debug)]
pub struct TitleSettings {
    /// Title pattern; `%title%` is replaced by the computed title.
    pub format: String,
    /// Separator placed between path segments.
    pub separator: String,
    /// Title of the index route.
    pub index: String,
}

impl Default for TitleSettings {
    fn default() -> Self {
        Self {
            format: TITLE_PLACEHOLDER.to_owned(),
            separator: " \u{bb} ".to_owned(),
            index: "Homepage".to_owned(),
        }
    }
}

/// Configuration for [`Site`](crate::Site).
#[derive(Clone, Debug, Default)]
pub struct SiteConfig {
    /// Request routing.
    pub routing: RoutingSettings,
    /// Body and side templates.
    pub templates: TemplateSettings,
    /// Shells.
    pub shells: ShellSettings,
    /// Page titles.
    pub title: TitleSettings,
}

impl SiteConfig {
    /// Validate values that do not depend on storage.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::InvalidTitleFormat`] or [`SiteError::InvalidExtension`].
    pub fn validate(&self) -> Result<(), SiteError> {
        if !self.title.format.contains(TITLE_PLACEHOLDER) {
            return Err(SiteError::InvalidTitleFormat(self.title.format.clone()));
        }
        validate_extension("template", &self.templates.ext)?;
        validate_extension("shell", &self.shells.ext)?;
        Ok(())
    }
}

fn validate_extension(kind: &'static str, ext: &str) -> Result<(), SiteError> {
    if EXTENSION_PATTERN.is_match(ext) {
        Ok(())
    } else {
        Err(SiteError::InvalidExtension {
            kind,
            ext: ext.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        SiteConfig::default().validate().unwrap();
    }

    #[test]
    fn test_template_keys() {
        let templates = TemplateSettings::default();

        assert_eq!(templates.body_key("about"), "tpl/about.tpl");
        assert_eq!(templates.side_key("about"), "tpl/side/about.tpl");
    }

    #[test]
    fn test_keys_tolerate_trailing_slash() {
        let shells = ShellSettings {
            dir: "shl/".to_owned(),
            ..Default::default()
        };

        assert_eq!(shells.key("default"), "shl/default.shl");
    }

    #[test]
    fn test_title_format_requires_placeholder() {
        let mut config = SiteConfig::default();
        config.title.format = "My site".to_owned();

        let err = config.validate().unwrap_err();

        assert!(matches!(err, SiteError::InvalidTitleFormat(_)));
    }

    #[test]
    fn test_extension_validation() {
        for ext in [".tpl", ".html", ".PHTML"] {
            assert!(validate_extension("template", ext).is_ok(), "{ext}");
        }
        for ext in ["tpl", ".", ".toolong", ".t-l", ".html.twig"] {
            assert!(validate_extension("template", ext).is_err(), "{ext}");
        }
    }
}
