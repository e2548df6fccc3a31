//! Configuration management for Smak.
//!
//! Parses `smak.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `server.static_dir`
//! - `site.root`
//! - `title.format`
//! - `title.index`
//! - `portfolio.dir`
//! - `portfolio.url`
//!
//! ## Paths
//!
//! `site.root`, `server.static_dir` and `portfolio.dir` are filesystem paths
//! resolved against the config file directory. Template, shell and
//! navigation locations are keys relative to the site root.

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override site root directory.
    pub root: Option<PathBuf>,
    /// Override static files directory.
    pub static_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "smak.toml";

/// Placeholder required in `title.format`.
const TITLE_PLACEHOLDER: &str = "%title%";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Site configuration (paths are relative strings from TOML).
    site: SiteConfigRaw,
    /// Request routing.
    pub routing: RoutingConfig,
    /// Body and side templates.
    pub templates: TemplatesConfig,
    /// Shells.
    pub shells: ShellsConfig,
    /// Page titles.
    pub title: TitleConfig,
    /// Navigation source.
    pub navigation: NavigationConfig,
    /// Portfolio configuration (optional section).
    /// When present, `dir` is required.
    portfolio: Option<PortfolioConfigRaw>,

    /// Resolved site paths (set after loading).
    #[serde(skip)]
    pub site_resolved: SitePaths,
    /// Resolved portfolio configuration (set after loading).
    #[serde(skip)]
    pub portfolio_resolved: Option<PortfolioConfig>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Directory of static assets served before the front controller.
    static_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
            static_dir: None,
        }
    }
}

/// Raw site configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    root: Option<String>,
}

/// Resolved site paths.
#[derive(Debug, Default)]
pub struct SitePaths {
    /// Site root holding templates, shells and the navigation file.
    pub root: PathBuf,
    /// Static assets directory.
    pub static_dir: Option<PathBuf>,
}

/// Request routing configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Query parameter carrying the requested template.
    pub param: String,
    /// Entry path redirected to `/`.
    pub entry: String,
    /// Whether the server rewrites pretty paths to the query parameter.
    pub rewrite: bool,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            param: "tpl".to_owned(),
            entry: "/index.php".to_owned(),
            rewrite: true,
        }
    }
}

/// Template configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Body template directory, relative to the site root.
    pub dir: String,
    /// Side template directory, relative to the site root.
    pub side_dir: String,
    /// Template extension.
    pub ext: String,
    /// Template of the index route.
    pub default: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            dir: "tpl".to_owned(),
            side_dir: "tpl/side".to_owned(),
            ext: ".tpl".to_owned(),
            default: "index".to_owned(),
        }
    }
}

/// Shell configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ShellsConfig {
    /// Shell directory, relative to the site root.
    pub dir: String,
    /// Shell extension.
    pub ext: String,
    /// Default shell.
    pub default: String,
}

impl Default for ShellsConfig {
    fn default() -> Self {
        Self {
            dir: "shl".to_owned(),
            ext: ".shl".to_owned(),
            default: "default".to_owned(),
        }
    }
}

/// Title configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TitleConfig {
    /// Title pattern containing `%title%`.
    pub format: String,
    /// Separator between path segments.
    pub separator: String,
    /// Title of the index route.
    pub index: String,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            format: TITLE_PLACEHOLDER.to_owned(),
            separator: " \u{bb} ".to_owned(),
            index: "Homepage".to_owned(),
        }
    }
}

/// Navigation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Navigation JSON file, relative to the site root.
    pub file: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            file: "nav.json".to_owned(),
        }
    }
}

/// Raw portfolio configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct PortfolioConfigRaw {
    dir: Option<String>,
    url: Option<String>,
    extensions: Option<Vec<String>>,
    template_extensions: Option<Vec<String>>,
}

/// Resolved portfolio configuration.
#[derive(Debug)]
pub struct PortfolioConfig {
    /// Collection directory.
    pub dir: PathBuf,
    /// URL prefix photos are served under.
    pub url: String,
    /// Photo extensions, `None` for the defaults.
    pub extensions: Option<Vec<String>>,
    /// Set template extensions, `None` for the defaults.
    pub template_extensions: Option<Vec<String>>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.root`").
        field: String,
        /// Error message (e.g., "${`SMAK_ROOT`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL path field to start with `/`.
fn require_absolute_path(value: &str, field: &str) -> Result<(), ConfigError> {
    if !value.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "{field} must start with /"
        )));
    }
    Ok(())
}

/// Require an extension list, when given, to be non-empty.
fn require_non_empty_list(value: Option<&Vec<String>>, field: &str) -> Result<(), ConfigError> {
    if value.is_some_and(Vec::is_empty) {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `smak.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(root) = &settings.root {
            self.site_resolved.root.clone_from(root);
        }
        if let Some(static_dir) = &settings.static_dir {
            self.site_resolved.static_dir = Some(static_dir.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            site: SiteConfigRaw::default(),
            routing: RoutingConfig::default(),
            templates: TemplatesConfig::default(),
            shells: ShellsConfig::default(),
            title: TitleConfig::default(),
            navigation: NavigationConfig::default(),
            portfolio: None,
            site_resolved: SitePaths {
                root: base.to_path_buf(),
                static_dir: None,
            },
            portfolio_resolved: None,
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file. Template and shell
    /// extensions are checked when the site is built.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_routing()?;
        self.validate_site()?;
        self.validate_portfolio()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 lets the OS pick a port, which is never what a config file means
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    fn validate_routing(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.routing.param, "routing.param")?;
        require_absolute_path(&self.routing.entry, "routing.entry")?;
        if self.routing.entry == "/" {
            return Err(ConfigError::Validation(
                "routing.entry cannot be /".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.templates.dir, "templates.dir")?;
        require_non_empty(&self.templates.default, "templates.default")?;
        require_non_empty(&self.shells.dir, "shells.dir")?;
        require_non_empty(&self.shells.default, "shells.default")?;
        require_non_empty(&self.navigation.file, "navigation.file")?;
        if !self.title.format.contains(TITLE_PLACEHOLDER) {
            return Err(ConfigError::Validation(format!(
                "title.format must contain {TITLE_PLACEHOLDER}"
            )));
        }
        Ok(())
    }

    fn validate_portfolio(&self) -> Result<(), ConfigError> {
        let Some(portfolio) = &self.portfolio_resolved else {
            return Ok(());
        };
        require_absolute_path(&portfolio.url, "portfolio.url")?;
        if portfolio.url.trim_end_matches('/').is_empty() {
            return Err(ConfigError::Validation(
                "portfolio.url cannot be /".to_owned(),
            ));
        }
        require_non_empty_list(portfolio.extensions.as_ref(), "portfolio.extensions")?;
        require_non_empty_list(
            portfolio.template_extensions.as_ref(),
            "portfolio.template_extensions",
        )?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;
        self.server.static_dir =
            expand::expand_env_opt(self.server.static_dir.as_ref(), "server.static_dir")?;
        self.site.root = expand::expand_env_opt(self.site.root.as_ref(), "site.root")?;
        self.title.format = expand::expand_env(&self.title.format, "title.format")?;
        self.title.index = expand::expand_env(&self.title.index, "title.index")?;

        if let Some(ref mut portfolio) = self.portfolio {
            portfolio.dir = expand::expand_env_opt(portfolio.dir.as_ref(), "portfolio.dir")?;
            portfolio.url = expand::expand_env_opt(portfolio.url.as_ref(), "portfolio.url")?;
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    ///
    /// Validates that `dir` is provided when `[portfolio]` section exists.
    fn resolve_paths(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        self.site_resolved = SitePaths {
            root: self
                .site
                .root
                .as_ref()
                .map_or_else(|| config_dir.to_path_buf(), |root| config_dir.join(root)),
            static_dir: self.server.static_dir.as_ref().map(|d| config_dir.join(d)),
        };

        self.portfolio_resolved = match &self.portfolio {
            Some(portfolio) => {
                let dir = portfolio.dir.as_ref().ok_or_else(|| {
                    ConfigError::Validation("[portfolio] section requires dir to be set".to_owned())
                })?;
                Some(PortfolioConfig {
                    dir: config_dir.join(dir),
                    url: portfolio.url.clone().unwrap_or_else(|| "/photos".to_owned()),
                    extensions: portfolio.extensions.clone(),
                    template_extensions: portfolio.template_extensions.clone(),
                })
            }
            None => None,
        };

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.site_resolved.root, PathBuf::from("/test"));
        assert!(config.site_resolved.static_dir.is_none());
        assert_eq!(config.routing.param, "tpl");
        assert_eq!(config.routing.entry, "/index.php");
        assert!(config.routing.rewrite);
        assert_eq!(config.templates.side_dir, "tpl/side");
        assert_eq!(config.shells.default, "default");
        assert_eq!(config.title.separator, " \u{bb} ");
        assert_eq!(config.navigation.file, "nav.json");
        assert!(config.portfolio_resolved.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.templates.ext, ".tpl");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
host = "0.0.0.0"
port = 9000

[routing]
param = "page"
entry = "/index.html"
rewrite = false

[templates]
dir = "pages"
side_dir = "pages/aside"
ext = ".html"
default = "home"

[shells]
dir = "layouts"
ext = ".html"
default = "main"

[title]
format = "%title% | Example"
separator = " / "
index = "Welcome"

[navigation]
file = "menu.json"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.routing.param, "page");
        assert_eq!(config.routing.entry, "/index.html");
        assert!(!config.routing.rewrite);
        assert_eq!(config.templates.dir, "pages");
        assert_eq!(config.templates.default, "home");
        assert_eq!(config.shells.dir, "layouts");
        assert_eq!(config.title.index, "Welcome");
        assert_eq!(config.navigation.file, "menu.json");
        config.validate().unwrap();
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[server]
static_dir = "public"

[site]
root = "site"

[portfolio]
dir = "photos"
extensions = [".jpg"]
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project")).unwrap();

        assert_eq!(config.site_resolved.root, PathBuf::from("/project/site"));
        assert_eq!(
            config.site_resolved.static_dir,
            Some(PathBuf::from("/project/public"))
        );
        let portfolio = config.portfolio_resolved.unwrap();
        assert_eq!(portfolio.dir, PathBuf::from("/project/photos"));
        assert_eq!(portfolio.url, "/photos");
        assert_eq!(portfolio.extensions, Some(vec![".jpg".to_owned()]));
        assert!(portfolio.template_extensions.is_none());
    }

    #[test]
    fn test_root_defaults_to_config_dir() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve_paths(Path::new("/project")).unwrap();

        assert_eq!(config.site_resolved.root, PathBuf::from("/project"));
    }

    #[test]
    fn test_portfolio_section_requires_dir() {
        let toml = r#"
[portfolio]
url = "/gallery"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.resolve_paths(Path::new("/project")).unwrap_err();

        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        assert!(err.to_string().contains("dir"));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));

        let overrides = CliSettings {
            host: Some("0.0.0.0".to_owned()),
            port: Some(9000),
            root: Some(PathBuf::from("/custom/site")),
            static_dir: Some(PathBuf::from("/custom/public")),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.site_resolved.root, PathBuf::from("/custom/site"));
        assert_eq!(
            config.site_resolved.static_dir,
            Some(PathBuf::from("/custom/public"))
        );
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.site_resolved.root, PathBuf::from("/test"));
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SMAK_TEST_ROOT", "/srv/site");
            std::env::set_var("SMAK_TEST_SITE_NAME", "Example");
        }

        let toml = r#"
[site]
root = "${SMAK_TEST_ROOT}"

[title]
format = "%title% | ${SMAK_TEST_SITE_NAME}"

[portfolio]
dir = "${SMAK_TEST_PHOTOS:-photos}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();
        config.resolve_paths(Path::new("/project")).unwrap();

        assert_eq!(config.site_resolved.root, PathBuf::from("/srv/site"));
        assert_eq!(config.title.format, "%title% | Example");
        assert_eq!(
            config.portfolio_resolved.unwrap().dir,
            PathBuf::from("/project/photos")
        );

        unsafe {
            std::env::remove_var("SMAK_TEST_ROOT");
            std::env::remove_var("SMAK_TEST_SITE_NAME");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SMAK_TEST_MISSING_HOST");
        }

        let toml = r#"
[server]
host = "${SMAK_TEST_MISSING_HOST}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { ref field, .. } if field == "server.host"));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"
[site]
root = "site"

[title]
index = "Home"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site_resolved.root, temp_dir.path().join("site"));
        assert_eq!(config.title.index, "Home");
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing.toml");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[server\nport = 1").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_applies_cli_settings() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[server]\nport = 9000\n").unwrap();
        let settings = CliSettings {
            port: Some(9001),
            ..Default::default()
        };

        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.server.port, 9001);
    }

    #[test]
    fn test_validate_default_config_passes() {
        Config::default_with_base(Path::new("/test")).validate().unwrap();
    }

    #[test]
    fn test_validate_server_port_zero() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.server.port = 0;

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("server.port"));
    }

    #[test]
    fn test_validate_routing() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.routing.entry = "index.php".to_owned();
        assert!(config.validate().unwrap_err().to_string().contains("routing.entry"));

        config.routing.entry = "/".to_owned();
        assert!(config.validate().is_err());

        config.routing.entry = "/index.php".to_owned();
        config.routing.param = String::new();
        assert!(config.validate().unwrap_err().to_string().contains("routing.param"));
    }

    #[test]
    fn test_validate_title_format() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.title.format = "My site".to_owned();

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("title.format"));
    }

    #[test]
    fn test_validate_portfolio() {
        let toml = r#"
[portfolio]
dir = "photos"
url = "photos"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project")).unwrap();
        assert!(config.validate().unwrap_err().to_string().contains("portfolio.url"));

        let toml = r#"
[portfolio]
dir = "photos"
extensions = []
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project")).unwrap();
        assert!(
            config
                .validate()
                .unwrap_err()
                .to_string()
                .contains("portfolio.extensions")
        );
    }
}
