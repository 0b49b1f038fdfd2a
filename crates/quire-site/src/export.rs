//! Engine configuration export.
//!
//! The rendering engine reads one JSON document with camelCase keys. Site
//! metadata sits at the top level; every locale carries its own nav and
//! sidebar under `themeConfig`, with sidebars keyed by prefix:
//!
//! ```json
//! {
//!   "title": "GameDev Documentation",
//!   "lang": "ja",
//!   "base": "/",
//!   "themeConfig": { "logo": "/logo.svg", "socialLinks": [] },
//!   "locales": {
//!     "root": {
//!       "label": "日本語",
//!       "lang": "ja",
//!       "link": "/",
//!       "themeConfig": {
//!         "nav": [{ "text": "ゲーム設計", "link": "/design/" }],
//!         "sidebar": { "/design/": [{ "text": "ゲーム設計", "items": [] }] }
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! Locales and sidebars are written in declaration order.

use quire_config::{Config, MarkdownConfig, ServerConfig, SiteConfig, ThemeConfig};
use quire_nav::{LocaleNav, NavEntry, NavigationRegistry, SidebarRoute};
use serde::{Serialize, Serializer};

/// Resolved configuration in the engine's JSON shape.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig<'a> {
    #[serde(flatten)]
    site: &'a SiteConfig,
    theme_config: &'a ThemeConfig,
    markdown: &'a MarkdownConfig,
    server: &'a ServerConfig,
    locales: Locales<'a>,
}

impl<'a> EngineConfig<'a> {
    pub(crate) fn new(config: &'a Config) -> Self {
        Self {
            site: &config.site,
            theme_config: &config.theme,
            markdown: &config.markdown,
            server: &config.server,
            locales: Locales {
                registry: &config.navigation,
                default_lang: &config.site.lang,
            },
        }
    }
}

#[derive(Debug)]
struct Locales<'a> {
    registry: &'a NavigationRegistry,
    default_lang: &'a str,
}

impl Serialize for Locales<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.registry.locales().iter().map(|locale| {
            (locale.id(), LocaleExport::new(locale, self.default_lang))
        }))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LocaleExport<'a> {
    label: &'a str,
    lang: &'a str,
    link: &'a str,
    theme_config: LocaleTheme<'a>,
}

impl<'a> LocaleExport<'a> {
    fn new(locale: &'a LocaleNav, default_lang: &'a str) -> Self {
        Self {
            label: locale.label(),
            lang: locale.lang().unwrap_or(default_lang),
            link: locale.link(),
            theme_config: LocaleTheme {
                nav: locale.nav(),
                sidebar: Sidebars(locale.sidebars()),
            },
        }
    }
}

#[derive(Serialize)]
struct LocaleTheme<'a> {
    nav: &'a [NavEntry],
    sidebar: Sidebars<'a>,
}

/// Sidebars as a prefix-keyed map.
struct Sidebars<'a>(&'a [SidebarRoute]);

impl Serialize for Sidebars<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|route| (route.prefix(), route.sections())))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    const TOML: &str = r#"
[site]
title = "GameDev Documentation"
lang = "ja"
ignore_dead_links = true

[theme]
logo = "/logo.svg"
last_updated = { text = "最終更新", format_options = { date_style = "short" } }

[markdown]
line_numbers = true

[[locales]]
id = "root"
label = "日本語"

[[locales.nav]]
text = "ホーム"
link = "/"

[[locales.sidebar]]
prefix = "/programming/"

[[locales.sidebar.sections]]
text = "プログラミング"
collapsed = false
items = [{ text = "概要", link = "/programming/" }]

[[locales.sidebar]]
prefix = "/design/"

[[locales.sidebar.sections]]
text = "ゲーム設計"
items = [{ text = "概要", link = "/design/" }]

[[locales]]
id = "en"
label = "English"
lang = "en-US"
"#;

    fn export() -> serde_json::Value {
        let config = Config::from_toml_str(TOML, Path::new("/project")).unwrap();
        serde_json::to_value(EngineConfig::new(&config)).unwrap()
    }

    #[test]
    fn test_site_fields_at_top_level() {
        let value = export();

        assert_eq!(value["title"], "GameDev Documentation");
        assert_eq!(value["lang"], "ja");
        assert_eq!(value["base"], "/");
        assert_eq!(value["ignoreDeadLinks"], true);
        assert_eq!(value["markdown"]["lineNumbers"], true);
        assert_eq!(value["server"]["allowedHosts"], json!([]));
    }

    #[test]
    fn test_theme_keys_are_camel_case() {
        let value = export();

        assert_eq!(value["themeConfig"]["logo"], "/logo.svg");
        assert_eq!(value["themeConfig"]["socialLinks"], json!([]));
        assert_eq!(
            value["themeConfig"]["lastUpdated"],
            json!({ "text": "最終更新", "formatOptions": { "dateStyle": "short" } })
        );
    }

    #[test]
    fn test_locales_carry_nav_and_sidebar() {
        let value = export();

        assert_eq!(
            value["locales"]["root"],
            json!({
                "label": "日本語",
                "lang": "ja",
                "link": "/",
                "themeConfig": {
                    "nav": [{ "text": "ホーム", "link": "/" }],
                    "sidebar": {
                        "/programming/": [{
                            "text": "プログラミング",
                            "collapsed": false,
                            "items": [{ "text": "概要", "link": "/programming/" }]
                        }],
                        "/design/": [{
                            "text": "ゲーム設計",
                            "items": [{ "text": "概要", "link": "/design/" }]
                        }]
                    }
                }
            })
        );
        assert_eq!(value["locales"]["en"]["lang"], "en-US");
        assert_eq!(value["locales"]["en"]["link"], "/en/");
    }

    #[test]
    fn test_declaration_order_preserved() {
        let config = Config::from_toml_str(TOML, Path::new("/project")).unwrap();
        let json = serde_json::to_string(&EngineConfig::new(&config)).unwrap();

        let programming = json.find("\"/programming/\"").unwrap();
        let design = json.find("\"/design/\"").unwrap();
        assert!(programming < design);
        assert!(json.find("\"root\"").unwrap() < json.find("\"en\"").unwrap());
    }
}
