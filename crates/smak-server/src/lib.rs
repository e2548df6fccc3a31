//! HTTP front controller for Smak.
//!
//! This crate serves a Smak site over HTTP using axum:
//! - page requests go through [`Site`](smak_site::Site) resolution and rendering
//! - `/_smak/navigation` exposes and reloads the navigation tree
//! - portfolio photos and static assets are served from disk
//!
//! # Quick Start
//!
//! ```ignore
//! use smak_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         root: "site".into(),
//!         version: "1.0.0".to_owned(),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum router (smak-server)
//!                        │
//!                        ├─► /_smak/navigation ──► Site navigation tree
//!                        │
//!                        ├─► Portfolio photos and static files (tower-http)
//!                        │
//!                        └─► Front controller ──► Site (resolve + render)
//!                                                     │
//!                                                     └─► FsStorage (site root)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use smak_portfolio::{Collection, PortfolioPlugin};
use smak_site::{
    PluginRegistry, RoutingSettings, ShellSettings, Site, SiteConfig, TemplateSettings,
    TitleSettings,
};
use smak_storage::FsStorage;
use state::{AppState, Mount};

pub use error::ServerError;
pub use handlers::request_context;

/// Portfolio served by the site.
#[derive(Clone, Debug)]
pub struct PortfolioSettings {
    /// Collection directory.
    pub dir: PathBuf,
    /// URL prefix photos are served under.
    pub url: String,
    /// Photo extensions (`None` keeps the built-in list).
    pub extensions: Option<Vec<String>>,
    /// Set template extensions (`None` keeps the built-in list).
    pub template_extensions: Option<Vec<String>>,
}

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Site root holding templates, shells and the navigation file.
    pub root: PathBuf,
    /// Static assets served before the front controller.
    pub static_dir: Option<PathBuf>,
    /// Map pretty paths to the template parameter.
    pub rewrite: bool,
    /// Navigation file, relative to the site root.
    pub navigation_file: String,
    /// Site settings.
    pub site: SiteConfig,
    /// Portfolio plugin (`None` disables it).
    pub portfolio: Option<PortfolioSettings>,
    /// Application version (for cache invalidation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
            root: PathBuf::from("."),
            static_dir: None,
            rewrite: true,
            navigation_file: "nav.json".to_owned(),
            site: SiteConfig::default(),
            portfolio: None,
            version: String::new(),
        }
    }
}

/// Build the site described by `config` and load its navigation.
///
/// # Errors
///
/// Returns [`ServerError`] if the portfolio cannot be opened, the site
/// configuration is invalid or the navigation file cannot be loaded.
pub fn build_site(config: &ServerConfig) -> Result<Site, ServerError> {
    let storage = Arc::new(FsStorage::new(config.root.clone()));

    let mut plugins = PluginRegistry::new();
    if let Some(portfolio) = &config.portfolio {
        let mut collection = Collection::open(&portfolio.dir)?;
        if let Some(extensions) = &portfolio.extensions {
            collection.set_extensions(extensions.clone())?;
        }
        if let Some(extensions) = &portfolio.template_extensions {
            collection.set_template_extensions(extensions.clone())?;
        }
        plugins.register(Arc::new(PortfolioPlugin::new(collection, &portfolio.url)));
    }

    let site = Site::new(storage, config.site.clone(), plugins)?;
    let tree = site.load_navigation(&config.navigation_file)?;
    tracing::debug!(nodes = tree.len(), "Site ready");

    Ok(site)
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the site cannot be built or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let site = Arc::new(build_site(&config)?);

    let state = Arc::new(AppState {
        site,
        navigation_file: config.navigation_file.clone(),
        rewrite: config.rewrite,
        static_dir: config.static_dir.clone(),
        photos: config.portfolio.as_ref().map(|portfolio| Mount {
            url: portfolio.url.trim_end_matches('/').to_owned(),
            dir: portfolio.dir.clone(),
        }),
        version: config.version.clone(),
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for Ctrl+C");
        return;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from Smak config.
///
/// # Arguments
///
/// * `config` - Smak configuration
/// * `version` - Application version
#[must_use]
pub fn server_config_from_smak_config(
    config: &smak_config::Config,
    version: String,
) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        root: config.site_resolved.root.clone(),
        static_dir: config.site_resolved.static_dir.clone(),
        rewrite: config.routing.rewrite,
        navigation_file: config.navigation.file.clone(),
        site: site_config_from_smak_config(config),
        portfolio: config
            .portfolio_resolved
            .as_ref()
            .map(|portfolio| PortfolioSettings {
                dir: portfolio.dir.clone(),
                url: portfolio.url.clone(),
                extensions: portfolio.extensions.clone(),
                template_extensions: portfolio.template_extensions.clone(),
            }),
        version,
    }
}

/// Site settings from the `[routing]`, `[templates]`, `[shells]` and
/// `[title]` sections.
fn site_config_from_smak_config(config: &smak_config::Config) -> SiteConfig {
    SiteConfig {
        routing: RoutingSettings {
            param: config.routing.param.clone(),
            entry_path: config.routing.entry.clone(),
        },
        templates: TemplateSettings {
            dir: config.templates.dir.clone(),
            side_dir: config.templates.side_dir.clone(),
            ext: config.templates.ext.clone(),
            default: config.templates.default.clone(),
        },
        shells: ShellSettings {
            dir: config.shells.dir.clone(),
            ext: config.shells.ext.clone(),
            default: config.shells.default.clone(),
        },
        title: TitleSettings {
            format: config.title.format.clone(),
            separator: config.title.separator.clone(),
            index: config.title.index.clone(),
        },
    }
}
