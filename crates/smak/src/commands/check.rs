//! `smak check` command implementation.

use clap::Args;
use smak_server::{build_site, request_context, server_config_from_smak_config};
use smak_site::{Resolution, Site};

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    site: SiteArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// Loads the configuration, builds the site and loads its navigation.
    /// Navigation links without a template are reported as warnings.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or the site is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.site.load()?;
        match &config.config_path {
            Some(path) => output.info(&format!("Config: {}", path.display())),
            None => output.info("Config: defaults (no smak.toml found)"),
        }
        output.info(&format!(
            "Site root: {}",
            config.site_resolved.root.display()
        ));

        let server_config = server_config_from_smak_config(&config, String::new());
        let site = build_site(&server_config)?;

        let tree = site.navigation()?;
        output.info(&format!("Navigation: {} nodes", tree.len()));
        if tree.index_position().is_none() {
            output.warning("Navigation has no index node");
        }

        let plugins: Vec<&str> = site.plugins().names().collect();
        if !plugins.is_empty() {
            output.info(&format!("Plugins: {}", plugins.join(", ")));
        }

        let broken = broken_links(&site)?;
        for href in &broken {
            output.warning(&format!("Navigation link {href} has no template"));
        }

        if broken.is_empty() {
            output.success("Site OK");
        } else {
            output.warning(&format!("Site OK with {} warnings", broken.len()));
        }

        Ok(())
    }
}

/// Internal navigation links that resolve to no template.
fn broken_links(site: &Site) -> Result<Vec<String>, CliError> {
    let tree = site.navigation()?;
    let mut broken = Vec::new();

    for node in tree.nodes().iter().filter(|node| node.template_id().is_some()) {
        let href = node.href();
        let ctx = request_context(&site.config().routing, true, &href, None);
        if matches!(site.resolve(&ctx)?, Resolution::NotFound) {
            broken.push(href);
        }
    }

    Ok(broken)
}
