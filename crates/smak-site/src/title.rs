//! Page titles derived from template paths.

use crate::config::{TITLE_PLACEHOLDER, TitleSettings};
use crate::request::RequestedTemplate;

/// Builds display titles such as `Portfolio » Travel`.
pub struct TitleBuilder<'a> {
    format: &'a str,
    separator: &'a str,
    index_title: &'a str,
}

impl<'a> TitleBuilder<'a> {
    /// Create a builder from title settings.
    #[must_use]
    pub fn new(settings: &'a TitleSettings) -> Self {
        Self {
            format: &settings.format,
            separator: &settings.separator,
            index_title: &settings.index,
        }
    }

    /// Title for a request.
    ///
    /// The index route uses the index title. Otherwise each path segment is
    /// capitalized and joined with the separator; when the path has more than
    /// one segment and any of them is `index`, the last segment is dropped.
    #[must_use]
    pub fn build(&self, requested: &RequestedTemplate) -> String {
        let Some(id) = requested.template_id() else {
            return self.format.replace(TITLE_PLACEHOLDER, self.index_title);
        };

        let mut segments: Vec<&str> = id.segments().collect();
        if segments.len() > 1 && segments.contains(&"index") {
            segments.pop();
        }

        let title = segments
            .into_iter()
            .map(capitalize_first)
            .collect::<Vec<_>>()
            .join(self.separator);

        self.format.replace(TITLE_PLACEHOLDER, &title)
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
