//! Navigation tree and "current page" matching.
//!
//! The navigation document is a JSON array of objects with optional `tpl`
//! (string or null), `url`, `title`, `label` and `shl` fields. A `tpl`
//! field set to null marks the index node; leaving out both `tpl` and `url`
//! also yields an index node, but one that does not take the "current" CSS
//! class. That absent-vs-null distinction survives a load/serialize round trip.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::html::escape_html;
use crate::request::RequestedTemplate;

/// CSS marker added to links of current nodes.
const CURRENT_CLASS: &str = r#" class="current""#;

/// Where a navigation node points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// The site index.
    Index {
        /// `true` when the node carried `"tpl": null`, `false` when `tpl` was absent.
        declared: bool,
    },
    /// An internal template path, possibly with extension (e.g. `about.tpl`).
    Template(String),
    /// An external or absolute URL.
    External(String),
}

/// One entry of the navigation tree.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "RawNavNode", into = "RawNavNode")]
pub struct NavNode {
    /// Link target.
    pub target: NavTarget,
    /// Link text.
    pub label: Option<String>,
    /// Link title attribute.
    pub title: Option<String>,
    /// Shell to use while this node is current.
    pub layout: Option<String>,
}

impl NavNode {
    /// Template path of an internal node.
    #[must_use]
    pub fn template_id(&self) -> Option<&str> {
        match &self.target {
            NavTarget::Template(id) => Some(id),
            _ => None,
        }
    }

    /// Whether the node declares a `tpl` field (string or null).
    #[must_use]
    pub fn declares_template(&self) -> bool {
        matches!(
            self.target,
            NavTarget::Template(_) | NavTarget::Index { declared: true }
        )
    }

    /// Link `href` for menu rendering.
    #[must_use]
    pub fn href(&self) -> String {
        match &self.target {
            NavTarget::Index { .. } => "/".to_owned(),
            NavTarget::Template(id) => format!("/{}", bare_path(id)),
            NavTarget::External(url) => url.clone(),
        }
    }
}

/// Template path without its extension (everything from the first dot).
fn bare_path(template_id: &str) -> &str {
    template_id
        .split_once('.')
        .map_or(template_id, |(bare, _)| bare)
}

/// Navigation node as written in JSON.
#[derive(Deserialize, Serialize)]
struct RawNavNode {
    #[serde(
        default,
        deserialize_with = "present_field",
        skip_serializing_if = "Option::is_none"
    )]
    tpl: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shl: Option<String>,
}

/// Distinguish a present-but-null field (`Some(None)`) from an absent one (`None`).
fn present_field<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl TryFrom<RawNavNode> for NavNode {
    type Error = String;

    fn try_from(raw: RawNavNode) -> Result<Self, Self::Error> {
        let target = match (raw.tpl, raw.url) {
            (Some(_), Some(url)) => {
                return Err(format!(
                    "navigation node with url {url:?} must not also have a tpl field"
                ));
            }
            (Some(Some(tpl)), None) => NavTarget::Template(tpl),
            (Some(None), None) => NavTarget::Index { declared: true },
            (None, Some(url)) => NavTarget::External(url),
            (None, None) => NavTarget::Index { declared: false },
        };
        Ok(Self {
            target,
            label: raw.label,
            title: raw.title,
            layout: raw.shl,
        })
    }
}

impl From<NavNode> for RawNavNode {
    fn from(node: NavNode) -> Self {
        let (tpl, url) = match node.target {
            NavTarget::Index { declared: true } => (Some(None), None),
            NavTarget::Index { declared: false } => (None, None),
            NavTarget::Template(tpl) => (Some(Some(tpl)), None),
            NavTarget::External(url) => (None, Some(url)),
        };
        Self {
            tpl,
            url,
            title: node.title,
            label: node.label,
            shl: node.layout,
        }
    }
}

/// Ordered navigation nodes, immutable once built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationTree {
    nodes: Vec<NavNode>,
    /// Position of the first index node.
    index: Option<usize>,
}

impl NavigationTree {
    /// Build a tree from nodes in display order.
    #[must_use]
    pub fn new(nodes: Vec<NavNode>) -> Self {
        let index = nodes
            .iter()
            .position(|n| matches!(n.target, NavTarget::Index { .. }));
        Self { nodes, index }
    }

    /// Parse a navigation JSON document.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the document is not an array of navigation nodes.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize back to a JSON document.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Nodes in display order.
    #[must_use]
    pub fn nodes(&self) -> &[NavNode] {
        &self.nodes
    }

    /// Position of the index node, if any.
    #[must_use]
    pub fn index_position(&self) -> Option<usize> {
        self.index
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Serialize for NavigationTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.nodes)
    }
}

impl<'de> Deserialize<'de> for NavigationTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<NavNode>::deserialize(deserializer).map(Self::new)
    }
}

/// Matches a requested template against a navigation tree.
pub struct NavMatcher<'a> {
    tree: &'a NavigationTree,
    requested: Option<&'a str>,
    default_template: &'a str,
}

impl<'a> NavMatcher<'a> {
    /// Create a matcher for one request.
    ///
    /// # Arguments
    ///
    /// * `tree` - Loaded navigation
    /// * `requested` - Resolved request
    /// * `default_template` - Template served by the index route
    #[must_use]
    pub fn new(
        tree: &'a NavigationTree,
        requested: &'a RequestedTemplate,
        default_template: &'a str,
    ) -> Self {
        Self {
            tree,
            requested: requested.template_id().map(|id| id.as_str()),
            default_template,
        }
    }

    /// Whether the node at `position` is the current page.
    ///
    /// The index node is current for the index route and for the default
    /// template. A template node is current when its path without extension
    /// equals the request, or when the two paths share any segment. The
    /// shared-segment rule also matches siblings with a common segment name.
    #[must_use]
    pub fn is_current(&self, position: usize) -> bool {
        let Some(node) = self.tree.nodes.get(position) else {
            return false;
        };

        if self.tree.index == Some(position) {
            return self
                .requested
                .is_none_or(|requested| requested == self.default_template);
        }

        let (Some(requested), Some(template_id)) = (self.requested, node.template_id()) else {
            return false;
        };

        if bare_path(template_id) == requested {
            return true;
        }

        template_id
            .split('/')
            .any(|segment| requested.split('/').any(|r| r == segment))
    }

    /// Whether the node at `position` gets the "current" CSS class.
    #[must_use]
    pub fn is_marked_current(&self, position: usize) -> bool {
        self.tree
            .nodes
            .get(position)
            .is_some_and(NavNode::declares_template)
            && self.is_current(position)
    }

    /// Layout override of the first current node that has one.
    #[must_use]
    pub fn current_layout(&self) -> Option<&'a str> {
        let tree = self.tree;
        tree.nodes
            .iter()
            .enumerate()
            .find_map(|(position, node)| {
                node.layout
                    .as_deref()
                    .filter(|_| self.is_current(position))
            })
    }

    /// Shell to render: the current node's override, else `default_layout`.
    #[must_use]
    pub fn select_layout<'b>(&self, default_layout: &'b str) -> &'b str
    where
        'a: 'b,
    {
        self.current_layout().unwrap_or(default_layout)
    }

    /// Render the navigation as an HTML list.
    ///
    /// `attributes` are raw HTML attributes added to the `<ul>` element.
    #[must_use]
    pub fn render_menu(&self, attributes: &[&str]) -> String {
        let mut output = if attributes.is_empty() {
            "<ul>\n\t".to_owned()
        } else {
            format!("<ul {}>\n\t", attributes.join(" "))
        };

        for (position, node) in self.tree.nodes.iter().enumerate() {
            let class = if self.is_marked_current(position) {
                CURRENT_CLASS
            } else {
                ""
            };
            output.push_str(&format!(
                "<li><a href=\"{}\" title=\"{}\"{class}>{}</a></li>\n\t",
                escape_html(&node.href()),
                escape_html(node.title.as_deref().unwrap_or_default()),
                escape_html(node.label.as_deref().unwrap_or_default()),
            ));
        }

        output.pop();
        output.push_str("</ul>");
        output
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::request::TemplateId;

    const NAV: &str = r#"[
        {"tpl": null, "title": "Home", "label": "Home"},
        {"tpl": "about.tpl", "title": "About", "label": "About", "shl": "custom"},
        {"tpl": "portfolio/index.tpl", "title": "Portfolio", "label": "Portfolio"},
        {"url": "https://example.com", "title": "Elsewhere", "label": "Elsewhere"}
    ]"#;

    fn tree() -> NavigationTree {
        NavigationTree::from_json(NAV).unwrap()
    }

    fn requested(id: &str) -> RequestedTemplate {
        RequestedTemplate::resolved(id, TemplateId::parse(id).unwrap())
    }

    fn current_positions(tree: &NavigationTree, requested: &RequestedTemplate) -> Vec<usize> {
        let matcher = NavMatcher::new(tree, requested, "index");
        (0..tree.len()).filter(|&p| matcher.is_current(p)).collect()
    }

    #[test]
    fn test_parse_targets() {
        let tree = tree();

        assert_eq!(tree.len(), 4);
        assert_eq!(tree.nodes()[0].target, NavTarget::Index { declared: true });
        assert_eq!(
            tree.nodes()[1].target,
            NavTarget::Template("about.tpl".to_owned())
        );
        assert_eq!(tree.nodes()[1].layout.as_deref(), Some("custom"));
        assert_eq!(
            tree.nodes()[3].target,
            NavTarget::External("https://example.com".to_owned())
        );
        assert_eq!(tree.index_position(), Some(0));
    }

    #[test]
    fn test_node_without_tpl_or_url_is_undeclared_index() {
        let tree = NavigationTree::from_json(r#"[{"title": "Home"}]"#).unwrap();

        assert_eq!(tree.nodes()[0].target, NavTarget::Index { declared: false });
        assert!(!tree.nodes()[0].declares_template());
    }

    #[test]
    fn test_node_with_tpl_and_url_is_rejected() {
        let result = NavigationTree::from_json(r#"[{"tpl": "a.tpl", "url": "/b"}]"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(NavigationTree::from_json("{").is_err());
        assert!(NavigationTree::from_json(r#"{"tpl": null}"#).is_err());
        assert!(NavigationTree::from_json(r#"[{"tpl": 3}]"#).is_err());
    }

    #[test]
    fn test_round_trip_preserves_order_and_presence() {
        let json = r#"[{"tpl":null,"title":"Home"},{"label":"Implicit"},{"tpl":"a/b.tpl","shl":"wide"},{"url":"/x"}]"#;
        let tree = NavigationTree::from_json(json).unwrap();

        assert_eq!(tree.to_json().unwrap(), json);
    }

    #[test]
    fn test_index_node_current_without_request() {
        let tree = tree();

        assert_eq!(current_positions(&tree, &RequestedTemplate::index()), vec![0]);
    }

    #[test]
    fn test_index_node_current_for_default_template() {
        let tree = tree();

        // "index.tpl" is not the segment "index"
        assert_eq!(current_positions(&tree, &requested("index")), vec![0]);
    }

    #[test]
    fn test_exact_match_strips_extension() {
        let tree = tree();

        assert_eq!(current_positions(&tree, &requested("about")), vec![1]);
    }

    #[test]
    fn test_shared_segment_marks_ancestor() {
        let tree = tree();

        assert_eq!(current_positions(&tree, &requested("portfolio/travel")), vec![2]);
    }

    #[test]
    fn test_shared_segment_matches_unrelated_sibling() {
        let tree = NavigationTree::from_json(
            r#"[{"tpl": "blog/news.tpl"}, {"tpl": "blog/archive.tpl"}, {"tpl": "shop/cart.tpl"}]"#,
        )
        .unwrap();

        assert_eq!(current_positions(&tree, &requested("blog/news")), vec![0, 1]);
    }

    #[test]
    fn test_only_first_index_node_is_index() {
        let tree =
            NavigationTree::from_json(r#"[{"tpl": null}, {"tpl": null}, {"title": "x"}]"#).unwrap();

        assert_eq!(current_positions(&tree, &RequestedTemplate::index()), vec![0]);
    }

    #[test]
    fn test_external_node_never_current() {
        let tree = tree();
        let requested = requested("example");
        let matcher = NavMatcher::new(&tree, &requested, "index");

        assert!(!matcher.is_current(3));
        assert!(!matcher.is_current(99));
    }

    #[test]
    fn test_select_layout_override() {
        let tree = tree();
        let requested = requested("about");
        let matcher = NavMatcher::new(&tree, &requested, "index");

        assert_eq!(matcher.select_layout("default"), "custom");
    }

    #[test]
    fn test_select_layout_default() {
        let tree = tree();
        let requested = RequestedTemplate::index();
        let matcher = NavMatcher::new(&tree, &requested, "index");

        assert_eq!(matcher.select_layout("default"), "default");
    }

    #[test]
    fn test_undeclared_index_is_current_but_not_marked() {
        let tree = NavigationTree::from_json(r#"[{"title": "Home", "shl": "home"}]"#).unwrap();
        let requested = RequestedTemplate::index();
        let matcher = NavMatcher::new(&tree, &requested, "index");

        assert!(matcher.is_current(0));
        assert!(!matcher.is_marked_current(0));
        assert_eq!(matcher.select_layout("default"), "home");
    }

    #[test]
    fn test_render_menu() {
        let tree = tree();
        let requested = requested("about");
        let matcher = NavMatcher::new(&tree, &requested, "index");

        assert_eq!(
            matcher.render_menu(&[]),
            "<ul>\n\t\
             <li><a href=\"/\" title=\"Home\">Home</a></li>\n\t\
             <li><a href=\"/about\" title=\"About\" class=\"current\">About</a></li>\n\t\
             <li><a href=\"/portfolio/index\" title=\"Portfolio\">Portfolio</a></li>\n\t\
             <li><a href=\"https://example.com\" title=\"Elsewhere\">Elsewhere</a></li>\n\
             </ul>"
        );
    }

    #[test]
    fn test_render_menu_with_attributes_and_escaping() {
        let tree =
            NavigationTree::from_json(r#"[{"url": "/a?b=1&c=2", "label": "<b>A</b>"}]"#).unwrap();
        let requested = RequestedTemplate::index();
        let matcher = NavMatcher::new(&tree, &requested, "index");

        assert_eq!(
            matcher.render_menu(&[r#"id="menu""#, r#"class="nav""#]),
            "<ul id=\"menu\" class=\"nav\">\n\t\
             <li><a href=\"/a?b=1&amp;c=2\" title=\"\">&lt;b&gt;A&lt;/b&gt;</a></li>\n\
             </ul>"
        );
    }

    #[test]
    fn test_render_empty_menu() {
        let tree = NavigationTree::default();
        let requested = RequestedTemplate::index();
        let matcher = NavMatcher::new(&tree, &requested, "index");

        assert_eq!(matcher.render_menu(&[]), "<ul>\n</ul>");
    }
}
