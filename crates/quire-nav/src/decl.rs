//! Declarative form of the navigation registry.
//!
//! These are the records authors write in the site configuration. They are
//! plain data: [`NavigationRegistry::from_decl`](crate::NavigationRegistry::from_decl)
//! checks them and [`NavigationRegistry::to_decl`](crate::NavigationRegistry::to_decl)
//! produces them back.
//!
//! # Example
//!
//! ```toml
//! [[locales]]
//! id = "root"
//! label = "日本語"
//! lang = "ja"
//!
//! [[locales.nav]]
//! text = "ゲーム設計"
//! link = "/design/"
//!
//! [[locales.sidebar]]
//! prefix = "/design/"
//!
//! [[locales.sidebar.sections]]
//! text = "ゲーム設計"
//! items = [
//!     { text = "概要", link = "/design/" },
//!     { text = "バランス調整", link = "/design/balancing" },
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::entry::{NavEntry, SidebarSection};

/// Identifier of the locale served from the site root when no link is given.
pub const ROOT_LOCALE: &str = "root";

/// All locales of a site.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavigationDecl {
    /// Locales in declaration order.
    #[serde(default)]
    pub locales: Vec<LocaleDecl>,
}

/// One locale: its identity, top nav and sidebars.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocaleDecl {
    /// Locale identifier (e.g., "root", "en").
    pub id: String,
    /// Name shown in the language switcher.
    pub label: String,
    /// Language tag for the `lang` attribute (e.g., "ja", "en-US").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// URL root of the locale. Defaults to `/` for `root`, `/<id>/` otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Top navigation in display order.
    #[serde(default)]
    pub nav: Vec<NavEntry>,
    /// Sidebars keyed by path prefix.
    #[serde(default)]
    pub sidebar: Vec<SidebarDecl>,
}

impl LocaleDecl {
    /// Root link, applying the default when none is declared.
    #[must_use]
    pub fn resolved_link(&self) -> String {
        match &self.link {
            Some(link) => link.clone(),
            None if self.id == ROOT_LOCALE => "/".to_owned(),
            None => format!("/{}/", self.id),
        }
    }
}

/// Sidebar sections shown for pages under `prefix`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarDecl {
    /// Site-absolute path prefix (e.g., "/design/").
    pub prefix: String,
    /// Sections in display order.
    #[serde(default)]
    pub sections: Vec<SidebarSection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale(id: &str, link: Option<&str>) -> LocaleDecl {
        LocaleDecl {
            id: id.to_owned(),
            label: id.to_owned(),
            lang: None,
            link: link.map(str::to_owned),
            nav: Vec::new(),
            sidebar: Vec::new(),
        }
    }

    #[test]
    fn test_root_locale_defaults_to_site_root() {
        assert_eq!(locale("root", None).resolved_link(), "/");
    }

    #[test]
    fn test_named_locale_defaults_to_id_directory() {
        assert_eq!(locale("en", None).resolved_link(), "/en/");
    }

    #[test]
    fn test_explicit_link_wins() {
        assert_eq!(locale("ja", Some("/")).resolved_link(), "/");
    }

    #[test]
    fn test_parse_locale_from_toml() {
        let toml = r#"
[[locales]]
id = "en"
label = "English"
lang = "en-US"

[[locales.nav]]
text = "Home"
link = "/en/"

[[locales.sidebar]]
prefix = "/en/sound/"

[[locales.sidebar.sections]]
text = "Sound"
collapsed = false
items = [
    { text = "Overview", link = "/en/sound/" },
    { text = "BGM", link = "/en/sound/bgm" },
]
"#;
        let decl: NavigationDecl = toml::from_str(toml).unwrap();

        let en = &decl.locales[0];
        assert_eq!(en.id, "en");
        assert_eq!(en.lang.as_deref(), Some("en-US"));
        assert_eq!(en.nav, vec![NavEntry::new("Home", "/en/")]);
        assert_eq!(en.sidebar[0].prefix, "/en/sound/");
        let section = &en.sidebar[0].sections[0];
        assert_eq!(section.collapsed, Some(false));
        assert_eq!(section.items[1], NavEntry::new("BGM", "/en/sound/bgm"));
    }

    #[test]
    fn test_missing_label_is_rejected() {
        let toml = r#"
[[locales]]
id = "en"
"#;
        let err = toml::from_str::<NavigationDecl>(toml).unwrap_err();

        assert!(err.to_string().contains("label"));
    }

    #[test]
    fn test_misspelled_keys_are_rejected() {
        let items = r#"
[[locales]]
id = "root"
label = "日本語"

[[locales.sidebar]]
prefix = "/design/"

[[locales.sidebar.sections]]
text = "ゲーム設計"
itmes = [{ text = "概要", link = "/design/" }]
"#;
        let sidebars = r#"
[[locales]]
id = "root"
label = "日本語"

[[locales.sidebars]]
prefix = "/design/"
"#;

        let err = toml::from_str::<NavigationDecl>(items).unwrap_err();
        assert!(err.to_string().contains("itmes"), "{err}");
        let err = toml::from_str::<NavigationDecl>(sidebars).unwrap_err();
        assert!(err.to_string().contains("sidebars"), "{err}");
    }
}
