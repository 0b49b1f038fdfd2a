//! Theme, Markdown and dev-server sections.
//!
//! These values are handed to the rendering engine as-is; only their shape
//! is checked here.

use serde::{Deserialize, Serialize};

/// `[theme]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
#[serde(default)]
pub struct ThemeConfig {
    /// Logo asset path (e.g., "/logo.svg").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Icon links shown in the header.
    pub social_links: Vec<SocialLink>,
    /// Page footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterConfig>,
    /// Search integration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchConfig>,
    /// "Edit this page" link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<EditLinkConfig>,
    /// "Last updated" stamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<LastUpdatedConfig>,
}

/// Header icon link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon name (e.g., "github").
    pub icon: String,
    /// Target URL.
    pub link: String,
}

/// Footer text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// First footer line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Copyright line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

/// Search integration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search backend.
    #[serde(default)]
    pub provider: SearchProvider,
}

/// Search backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// In-browser index built by the engine.
    #[default]
    Local,
    /// Hosted Algolia `DocSearch`.
    Algolia,
}

/// "Edit this page" link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditLinkConfig {
    /// URL pattern; `:path` is replaced by the page's source-relative path.
    pub pattern: String,
    /// Link text.
    #[serde(default = "default_edit_link_text")]
    pub text: String,
}

fn default_edit_link_text() -> String {
    "Edit this page".to_owned()
}

/// Placeholder replaced by the page path in [`EditLinkConfig::pattern`].
pub const EDIT_LINK_PLACEHOLDER: &str = ":path";

impl EditLinkConfig {
    /// Edit URL for a page, given its path relative to the source directory.
    ///
    /// ```
    /// use quire_config::EditLinkConfig;
    ///
    /// let edit = EditLinkConfig {
    ///     pattern: "https://github.com/team/docs/edit/main/docs/:path".to_owned(),
    ///     text: "Edit".to_owned(),
    /// };
    /// assert_eq!(
    ///     edit.url_for("design/balancing.md"),
    ///     "https://github.com/team/docs/edit/main/docs/design/balancing.md"
    /// );
    /// ```
    #[must_use]
    pub fn url_for(&self, relative_path: &str) -> String {
        let relative_path = relative_path.replace('\\', "/");
        self.pattern
            .replace(EDIT_LINK_PLACEHOLDER, relative_path.trim_start_matches('/'))
    }
}

/// "Last updated" stamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct LastUpdatedConfig {
    /// Label before the date.
    #[serde(default = "default_last_updated_text")]
    pub text: String,
    /// Date formatting (`Intl.DateTimeFormat` styles).
    #[serde(default)]
    pub format_options: DateFormatOptions,
}

fn default_last_updated_text() -> String {
    "Last updated".to_owned()
}

/// Date and time display styles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
#[serde(default)]
pub struct DateFormatOptions {
    /// Date style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_style: Option<DateStyle>,
    /// Time style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_style: Option<DateStyle>,
}

/// Display style for a date or time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// "Friday, March 7, 2025".
    Full,
    /// "March 7, 2025".
    Long,
    /// "Mar 7, 2025".
    Medium,
    /// "3/7/25".
    Short,
}

/// `[markdown]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
#[serde(default)]
pub struct MarkdownConfig {
    /// Show line numbers in code blocks.
    pub line_numbers: bool,
    /// Syntax highlighting themes.
    pub theme: SyntaxTheme,
}

/// Syntax highlighting themes for light and dark mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxTheme {
    /// Theme used in light mode.
    pub light: String,
    /// Theme used in dark mode.
    pub dark: String,
}

impl Default for SyntaxTheme {
    fn default() -> Self {
        Self {
            light: "github-light".to_owned(),
            dark: "github-dark".to_owned(),
        }
    }
}

/// `[server]` section (dev server binding).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Host names accepted in the `Host` header besides the bind address.
    /// A leading `.` allows all subdomains.
    pub allowed_hosts: Vec<String>,
    /// Cross-origin policy.
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_owned(),
            port: 5173,
            allowed_hosts: Vec::new(),
            cors: CorsConfig::default(),
        }
    }
}

/// Cross-origin policy of the dev server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Send CORS headers.
    pub enabled: bool,
    /// Allowed origins (`"*"` or http(s) origins). Empty allows any origin.
    pub origins: Vec<String>,
}
