//! Navigation entries, sidebar sections and link target normalization.
//!
//! # Link Convention
//!
//! Links are site-absolute URL paths without the deployment base:
//! - `"/"` - home page (document `""`)
//! - `"/design/"` - section index (document `"design"`)
//! - `"/design/balancing"` - standalone page (document `"design/balancing"`)
//!
//! [`link_target`] maps a link to the document URL path it refers to, using the
//! same path convention as the content scanner.

use serde::{Deserialize, Serialize};

/// A labeled link shown in the top navigation or inside a sidebar section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavEntry {
    /// Display label.
    pub text: String,
    /// Target path (e.g., "/design/", "/api/player").
    pub link: String,
}

impl NavEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    /// Document this entry points to.
    #[must_use]
    pub fn target(&self) -> LinkTarget {
        link_target(&self.link)
    }
}

/// A labeled group of sidebar links.
///
/// Items are leaves: sections do not nest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarSection {
    /// Display label.
    pub text: String,
    /// Whether the group starts collapsed (`None` = not collapsible).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    /// Links in display order.
    #[serde(default)]
    pub items: Vec<NavEntry>,
}

impl SidebarSection {
    /// Create a non-collapsible section.
    #[must_use]
    pub fn new(text: impl Into<String>, items: Vec<NavEntry>) -> Self {
        Self {
            text: text.into(),
            collapsed: None,
            items,
        }
    }
}

/// What a link refers to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// A content document, identified by its URL path ("" for the home page).
    Document(String),
    /// A link outside the site (`https://...`, `mailto:...`).
    External,
    /// A same-page fragment (`#usage`).
    Anchor,
}

/// Resolve a link to the document URL path it points at.
///
/// Fragments and query strings are dropped, as are `.md`/`.html` suffixes and
/// a trailing `index`. `/design/` and `/design` both name document `design`.
#[must_use]
pub fn link_target(link: &str) -> LinkTarget {
    if is_external(link) {
        return LinkTarget::External;
    }
    if link.starts_with('#') {
        return LinkTarget::Anchor;
    }

    let end = link.find(['#', '?']).unwrap_or(link.len());
    let path = link[..end].trim_matches('/');
    let path = path
        .strip_suffix(".md")
        .or_else(|| path.strip_suffix(".html"))
        .unwrap_or(path);
    let path = if path == "index" {
        ""
    } else {
        path.strip_suffix("/index").unwrap_or(path)
    };

    LinkTarget::Document(path.to_owned())
}

fn is_external(link: &str) -> bool {
    link.starts_with("//")
        || link.contains("://")
        || link.starts_with("mailto:")
        || link.starts_with("tel:")
}

/// Normalize a page path for prefix matching.
///
/// Drops fragment and query, and guarantees a leading slash.
pub(crate) fn normalize_page_path(path: &str) -> String {
    let end = path.find(['#', '?']).unwrap_or(path.len());
    let path = &path[..end];
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(path: &str) -> LinkTarget {
        LinkTarget::Document(path.to_owned())
    }

    #[test]
    fn test_root_link_targets_home_document() {
        assert_eq!(link_target("/"), doc(""));
    }

    #[test]
    fn test_section_link_targets_section_index() {
        assert_eq!(link_target("/design/"), doc("design"));
        assert_eq!(link_target("/design"), doc("design"));
    }

    #[test]
    fn test_page_link_targets_page() {
        assert_eq!(link_target("/design/balancing"), doc("design/balancing"));
    }

    #[test]
    fn test_file_suffixes_are_dropped() {
        assert_eq!(link_target("/api/player.md"), doc("api/player"));
        assert_eq!(link_target("/api/player.html"), doc("api/player"));
        assert_eq!(link_target("/api/index.md"), doc("api"));
        assert_eq!(link_target("/index.html"), doc(""));
    }

    #[test]
    fn test_fragment_and_query_are_dropped() {
        assert_eq!(link_target("/sound/bgm#tempo"), doc("sound/bgm"));
        assert_eq!(link_target("/sound/?tab=2"), doc("sound"));
    }

    #[test]
    fn test_localized_link_keeps_locale_segment() {
        assert_eq!(link_target("/en/design/"), doc("en/design"));
    }

    #[test]
    fn test_external_links_are_not_documents() {
        assert_eq!(link_target("https://github.com/x"), LinkTarget::External);
        assert_eq!(link_target("//cdn.example.com/a"), LinkTarget::External);
        assert_eq!(link_target("mailto:team@example.com"), LinkTarget::External);
    }

    #[test]
    fn test_fragment_only_link_is_anchor() {
        assert_eq!(link_target("#usage"), LinkTarget::Anchor);
    }

    #[test]
    fn test_normalize_page_path_adds_leading_slash() {
        assert_eq!(normalize_page_path("design/balancing.md"), "/design/balancing.md");
        assert_eq!(normalize_page_path("/art/#top"), "/art/");
    }

    #[test]
    fn test_sidebar_section_omits_collapsed_when_unset() {
        let section = SidebarSection::new("Art", vec![NavEntry::new("Overview", "/art/")]);

        let json = serde_json::to_value(&section).unwrap();

        assert!(json.get("collapsed").is_none());
        assert_eq!(json["items"][0]["text"], "Overview");
        assert_eq!(json["items"][0]["link"], "/art/");
    }
}
