//! Template resolution, navigation matching and page rendering for Smak.
//!
//! This crate provides:
//! - [`Resolver`]: turns a [`RequestContext`] into a [`Resolution`]
//! - [`NavigationTree`] and [`NavMatcher`]: "current page" state, layout
//!   overrides and menu rendering
//! - [`TitleBuilder`]: page titles derived from template paths
//! - [`PluginRegistry`]: typed registry of [`Plugin`] instances
//! - [`Site`]: the front controller tying everything to a [`Storage`](smak_storage::Storage)
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use smak_site::{PluginRegistry, RequestContext, Resolution, Site, SiteConfig};
//! use smak_storage::FsStorage;
//!
//! let storage = Arc::new(FsStorage::new(PathBuf::from("site")));
//! let site = Site::new(storage, SiteConfig::default(), PluginRegistry::new())?;
//! site.load_navigation("nav.json")?;
//!
//! let ctx = RequestContext::new("/about", Some("about".to_owned()));
//! if let Resolution::Page(requested) = site.resolve(&ctx)? {
//!     let page = site.render(&requested)?;
//!     println!("{}", page.html);
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod html;
mod navigation;
mod plugin;
mod request;
mod shell;
mod site;
mod title;

pub use config::{RoutingSettings, ShellSettings, SiteConfig, TemplateSettings, TitleSettings};
pub use error::SiteError;
pub use html::escape_html;
pub use navigation::{NavMatcher, NavNode, NavTarget, NavigationTree};
pub use plugin::{Plugin, PluginError, PluginRegistry};
pub use request::{RequestContext, RequestedTemplate, Resolution, Resolver, TemplateId};
pub use site::{RenderedPage, Site};
pub use title::TitleBuilder;
