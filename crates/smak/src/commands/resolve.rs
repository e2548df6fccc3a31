//! `smak resolve` command implementation.

use clap::Args;
use smak_server::{build_site, request_context, server_config_from_smak_config};
use smak_site::{Resolution, Site, TemplateId};

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Request path (e.g. `/about` or `/index.php`).
    path: String,

    /// Template parameter value, as passed in the query string.
    #[arg(long)]
    param: Option<String>,

    #[command(flatten)]
    site: SiteArgs,
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// # Errors
    ///
    /// Returns an error if the site cannot be built, the request cannot be
    /// routed or the page's shell cannot be determined.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.site.load()?;
        let server_config = server_config_from_smak_config(&config, String::new());
        let site = build_site(&server_config)?;

        let path = normalize_path(&self.path);
        let ctx = request_context(
            &site.config().routing,
            server_config.rewrite,
            &path,
            self.param,
        );

        for (line, highlighted) in describe(&site, site.resolve(&ctx)?)? {
            if highlighted {
                output.highlight(&line);
            } else {
                output.info(&line);
            }
        }

        Ok(())
    }
}

/// Request path with a leading slash.
fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

/// Report lines for a resolution; the flag marks the status line.
fn describe(site: &Site, resolution: Resolution) -> Result<Vec<(String, bool)>, CliError> {
    let lines = match resolution {
        Resolution::NotFound => vec![("404 Not Found".to_owned(), true)],
        Resolution::Redirect { location } => vec![(format!("302 Found -> {location}"), true)],
        Resolution::Page(requested) => {
            let template = requested
                .template_id()
                .map_or(site.config().templates.default.as_str(), TemplateId::as_str);
            vec![
                (format!("200 OK: {template}"), true),
                (format!("Title: {}", site.title(&requested)), false),
                (format!("Shell: {}", site.select_shell(&requested)?), false),
            ]
        }
    };
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use smak_server::ServerConfig;
    use smak_site::RequestContext;

    use super::*;

    fn site() -> (tempfile::TempDir, Site) {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("tpl/docs")).unwrap();
        fs::create_dir_all(root.join("shl")).unwrap();
        fs::write(root.join("tpl/index.tpl"), "Welcome").unwrap();
        fs::write(root.join("tpl/docs/index.tpl"), "Docs").unwrap();
        fs::write(root.join("shl/default.shl"), "%body%").unwrap();
        fs::write(root.join("shl/wide.shl"), "%body%").unwrap();
        fs::write(
            root.join("nav.json"),
            r#"[{"tpl":null,"title":"Home"},{"tpl":"docs/index.tpl","shl":"wide"}]"#,
        )
        .unwrap();

        let config = ServerConfig {
            root: root.to_path_buf(),
            ..ServerConfig::default()
        };
        let site = build_site(&config).unwrap();
        (temp_dir, site)
    }

    fn lines(site: &Site, path: &str, param: Option<&str>) -> Vec<String> {
        let ctx = RequestContext::new(path, param.map(str::to_owned));
        describe(site, site.resolve(&ctx).unwrap())
            .unwrap()
            .into_iter()
            .map(|(line, _)| line)
            .collect()
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("about"), "/about");
        assert_eq!(normalize_path("/about"), "/about");
    }

    #[test]
    fn test_describe_index() {
        let (_temp_dir, site) = site();

        assert_eq!(
            lines(&site, "/", None),
            vec!["200 OK: index", "Title: Homepage", "Shell: default"]
        );
    }

    #[test]
    fn test_describe_nested_page() {
        let (_temp_dir, site) = site();

        assert_eq!(
            lines(&site, "/", Some("docs/index")),
            vec!["200 OK: docs/index", "Title: Docs", "Shell: wide"]
        );
    }

    #[test]
    fn test_describe_not_found_and_redirect() {
        let (_temp_dir, site) = site();

        assert_eq!(lines(&site, "/", Some("missing")), vec!["404 Not Found"]);
        assert_eq!(lines(&site, "/index.php", None), vec!["302 Found -> /"]);
    }
}
