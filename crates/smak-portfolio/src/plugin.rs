//! Portfolio plugin for shells.

use smak_site::{Plugin, PluginError, RequestedTemplate, TemplateId, escape_html};

use crate::collection::Collection;
use crate::set::Set;

/// Renders portfolio listings for `%plugin:portfolio%`.
///
/// When the last segment of the requested template names a set, the set's
/// photos are listed as images. Otherwise the collection's sets are listed
/// as links below the requested page.
pub struct PortfolioPlugin {
    collection: Collection,
    base_url: String,
}

impl PortfolioPlugin {
    /// Registry key of the plugin.
    pub const NAME: &'static str = "portfolio";

    /// Create the plugin.
    ///
    /// # Arguments
    ///
    /// * `collection` - Collection to list
    /// * `base_url` - URL prefix the collection directory is served under (e.g. "/photos")
    pub fn new(collection: Collection, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            collection,
            base_url,
        }
    }

    fn render_set(&self, set: &Set) -> Result<String, PluginError> {
        let photos = set.photos().map_err(PluginError::new)?;
        tracing::debug!(set = %set.name(), photos = photos.len(), "Rendering portfolio set");

        let mut output = r#"<ul class="portfolio-set">"#.to_owned();
        for photo in &photos {
            let src = format!("{}/{}/{}", self.base_url, set.name(), photo.file_name());
            output.push_str(&format!(
                "\n\t<li><img src=\"{}\" alt=\"{}\"></li>",
                escape_html(&src),
                escape_html(photo.name()),
            ));
        }
        output.push_str("\n</ul>");
        Ok(output)
    }

    fn render_sets(&self, parent: Option<&TemplateId>) -> Result<String, PluginError> {
        let sets = self.collection.sets().map_err(PluginError::new)?;

        let mut output = r#"<ul class="portfolio">"#.to_owned();
        for set in &sets {
            let href = match parent {
                Some(parent) => format!("/{parent}/{}", set.name()),
                None => format!("/{}", set.name()),
            };
            output.push_str(&format!(
                "\n\t<li><a href=\"{}\">{}</a></li>",
                escape_html(&href),
                escape_html(set.name()),
            ));
        }
        output.push_str("\n</ul>");
        Ok(output)
    }
}

impl Plugin for PortfolioPlugin {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn render(&self, requested: &RequestedTemplate) -> Result<String, PluginError> {
        let id = requested.template_id();
        if let Some(last) = id.and_then(|id| id.segments().last())
            && let Some(set) = self.collection.set_by_name(last).map_err(PluginError::new)?
        {
            return self.render_set(&set);
        }
        self.render_sets(id)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    fn create_plugin() -> (tempfile::TempDir, PortfolioPlugin) {
        let temp_dir = tempfile::tempdir().unwrap();
        let travel = temp_dir.path().join("travel");
        fs::create_dir(&travel).unwrap();
        fs::write(travel.join("beach.jpg"), "").unwrap();
        fs::write(travel.join("harbour.png"), "").unwrap();
        fs::create_dir(temp_dir.path().join("portraits")).unwrap();

        let collection = Collection::open(temp_dir.path()).unwrap();
        (temp_dir, PortfolioPlugin::new(collection, "/photos/"))
    }

    fn requested(id: &str) -> RequestedTemplate {
        RequestedTemplate::resolved(id, TemplateId::parse(id).unwrap())
    }

    #[test]
    fn test_lists_set_photos() {
        let (_temp_dir, plugin) = create_plugin();

        let html = plugin.render(&requested("portfolio/travel")).unwrap();

        assert_eq!(
            html,
            "<ul class=\"portfolio-set\">\
             \n\t<li><img src=\"/photos/travel/beach.jpg\" alt=\"beach\"></li>\
             \n\t<li><img src=\"/photos/travel/harbour.png\" alt=\"harbour\"></li>\
             \n</ul>"
        );
    }

    #[test]
    fn test_lists_sets_below_requested_page() {
        let (_temp_dir, plugin) = create_plugin();

        let html = plugin.render(&requested("portfolio")).unwrap();

        assert_eq!(
            html,
            "<ul class=\"portfolio\">\
             \n\t<li><a href=\"/portfolio/portraits\">portraits</a></li>\
             \n\t<li><a href=\"/portfolio/travel\">travel</a></li>\
             \n</ul>"
        );
    }

    #[test]
    fn test_lists_sets_on_index_route() {
        let (_temp_dir, plugin) = create_plugin();

        let html = plugin.render(&RequestedTemplate::index()).unwrap();

        assert!(html.contains("<a href=\"/travel\">travel</a>"));
    }

    #[test]
    fn test_missing_collection_is_plugin_error() {
        let (temp_dir, plugin) = create_plugin();
        drop(temp_dir);

        assert!(plugin.render(&requested("portfolio")).is_err());
    }
}
