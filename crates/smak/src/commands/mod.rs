//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod resolve;
pub(crate) mod serve;

use std::path::PathBuf;

use clap::Args;
use smak_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use resolve::ResolveArgs;
pub(crate) use serve::ServeArgs;

/// Options locating the site, shared by `check` and `resolve`.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover smak.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site root directory (overrides config).
    #[arg(short, long)]
    root: Option<PathBuf>,
}

impl SiteArgs {
    /// Load the configuration with the root override applied.
    pub(crate) fn load(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            root: self.root.clone(),
            ..CliSettings::default()
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}
