//! `smak serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use smak_config::{CliSettings, Config};
use smak_server::{run_server, server_config_from_smak_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover smak.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site root directory (overrides config).
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Static assets directory (overrides config).
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output (request and navigation logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the site cannot be built or
    /// the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            root: self.root,
            static_dir: self.static_dir,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Site root: {}",
            config.site_resolved.root.display()
        ));

        if let Some(static_dir) = &config.site_resolved.static_dir {
            output.info(&format!("Static files: {}", static_dir.display()));
        }

        if let Some(portfolio) = &config.portfolio_resolved {
            output.info(&format!(
                "Portfolio: {} at {}",
                portfolio.dir.display(),
                portfolio.url
            ));
        }

        if !config.routing.rewrite {
            output.info(&format!(
                "Rewrite: disabled (pages need ?{}=)",
                config.routing.param
            ));
        }

        let server_config = server_config_from_smak_config(&config, version.to_owned());
        run_server(server_config).await?;

        Ok(())
    }
}
