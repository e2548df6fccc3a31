//! Shell placeholder substitution.
//!
//! Shells are plain HTML files with `%name%` placeholders. Substitution is a
//! single pass over the shell: inserted fragments are never scanned again.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::SiteError;

static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%(title|body|side|nav(?:\s+[^%]*)?|plugin:[A-Za-z0-9_-]+)%").unwrap()
});

/// A placeholder found in a shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Placeholder<'s> {
    Title,
    Body,
    Side,
    /// Navigation menu with optional raw `<ul>` attributes.
    Nav(Option<&'s str>),
    /// Output of the named plugin.
    Plugin(&'s str),
}

impl<'s> Placeholder<'s> {
    fn from_capture(name: &'s str) -> Self {
        match name {
            "title" => Self::Title,
            "body" => Self::Body,
            "side" => Self::Side,
            _ => {
                if let Some(plugin) = name.strip_prefix("plugin:") {
                    Self::Plugin(plugin)
                } else {
                    let attributes = name["nav".len()..].trim();
                    Self::Nav((!attributes.is_empty()).then_some(attributes))
                }
            }
        }
    }
}

/// Replace every placeholder in `shell` with the value returned by `fill`.
///
/// Text outside placeholders is copied unchanged. Unknown `%...%` sequences
/// are left alone.
pub(crate) fn render_shell<'s, F>(shell: &'s str, mut fill: F) -> Result<String, SiteError>
where
    F: FnMut(Placeholder<'s>) -> Result<String, SiteError>,
{
    let mut output = String::with_capacity(shell.len());
    let mut last = 0;

    for caps in PLACEHOLDER_PATTERN.captures_iter(shell) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        output.push_str(&shell[last..whole.start()]);
        output.push_str(&fill(Placeholder::from_capture(name.as_str()))?);
        last = whole.end();
    }

    output.push_str(&shell[last..]);
    Ok(output)
}
