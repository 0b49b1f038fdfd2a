//! Configuration management for Quire.
//!
//! Parses `quire.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! Navigation is declared under `[[locales]]` and checked while loading: a
//! malformed entry aborts the load with an error naming the locale and
//! section. The checked result is available as [`Config::navigation`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.base`
//! - `server.host`
//! - `theme.edit_link.pattern`

mod expand;
mod theme;

use std::path::{Path, PathBuf};

use quire_nav::{LocaleDecl, NavError, NavigationDecl, NavigationRegistry};
use serde::{Deserialize, Serialize};

pub use theme::{
    CorsConfig, DateFormatOptions, DateStyle, EDIT_LINK_PLACEHOLDER, EditLinkConfig, FooterConfig,
    LastUpdatedConfig, MarkdownConfig, SearchConfig, SearchProvider, ServerConfig, SocialLink,
    SyntaxTheme, ThemeConfig,
};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "quire.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site metadata.
    pub site: SiteConfig,
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Theme wiring.
    pub theme: ThemeConfig,
    /// Markdown rendering flags.
    pub markdown: MarkdownConfig,
    /// Dev server binding.
    pub server: ServerConfig,
    /// Locale declarations (checked into `navigation` after loading).
    locales: Vec<LocaleDecl>,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Checked navigation (set after loading).
    #[serde(skip)]
    pub navigation: NavigationRegistry,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    #[allow(clippy::derivable_impls)]
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// `[site]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
#[serde(default)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Site description (used for the meta description tag).
    pub description: String,
    /// Default language tag.
    pub lang: String,
    /// Base URL path the site is deployed under (e.g., "/docs/").
    pub base: String,
    /// Dead-link suppression.
    pub ignore_dead_links: DeadLinkPolicy,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            description: String::new(),
            lang: "en-US".to_owned(),
            base: "/".to_owned(),
            ignore_dead_links: DeadLinkPolicy::default(),
        }
    }
}

/// Which dangling links are tolerated.
///
/// `true` tolerates every dangling link; a list of glob patterns tolerates
/// links whose target matches one of them.
///
/// ```toml
/// [site]
/// ignore_dead_links = ["/api/*", "/changelog"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeadLinkPolicy {
    /// Tolerate all (`true`) or none (`false`).
    All(bool),
    /// Tolerate targets matching these glob patterns.
    Patterns(Vec<String>),
}

impl Default for DeadLinkPolicy {
    fn default() -> Self {
        Self::All(false)
    }
}

impl DeadLinkPolicy {
    /// Whether a dangling link to `target` is tolerated.
    #[must_use]
    pub fn ignores(&self, target: &str) -> bool {
        match self {
            Self::All(all) => *all,
            Self::Patterns(patterns) => patterns.iter().any(|pattern| {
                glob::Pattern::new(pattern).is_ok_and(|p| p.matches(target))
            }),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Self::Patterns(patterns) = self {
            for pattern in patterns {
                glob::Pattern::new(pattern).map_err(|e| {
                    ConfigError::Validation(format!(
                        "site.ignore_dead_links: invalid pattern '{pattern}': {e}"
                    ))
                })?;
            }
        }
        Ok(())
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory for markdown files.
    pub source_dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Malformed navigation declaration.
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavError),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`server.host`").
        field: String,
        /// Error message (e.g., "${`DOCS_HOST`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Require a host name or IP address without scheme, port or path.
fn require_host(host: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(host, field)?;

    let bare = host.strip_prefix('[').and_then(|h| h.strip_suffix(']'));
    if let Some(ipv6) = bare {
        return ipv6
            .parse::<std::net::Ipv6Addr>()
            .map(|_| ())
            .map_err(|_| ConfigError::Validation(format!("{field}: invalid IPv6 address '{host}'")));
    }
    if host.parse::<std::net::IpAddr>().is_ok() {
        return Ok(());
    }

    let name = host.strip_prefix('.').unwrap_or(host);
    let valid = !name.is_empty()
        && name.split('.').all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        });
    if !valid {
        return Err(ConfigError::Validation(format!(
            "{field}: '{host}' is not a valid host name"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `quire.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate_server()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
    }

    /// Parse configuration from TOML text.
    ///
    /// Relative paths resolve against `base_dir`. Environment variables are
    /// expanded and the result is validated, as for a file.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion or validation fails.
    pub fn from_toml_str(content: &str, base_dir: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;
        config.resolve_paths(base_dir);
        config.resolve_navigation()?;

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            docs: DocsConfigRaw::default(),
            theme: ThemeConfig::default(),
            markdown: MarkdownConfig::default(),
            server: ServerConfig::default(),
            locales: Vec::new(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
            },
            navigation: NavigationRegistry::default(),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));

        let mut config = Self::from_toml_str(&content, config_dir)?;
        config.config_path = Some(path.to_path_buf());

        tracing::info!(
            path = %path.display(),
            locale_count = config.navigation.locales().len(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid values.
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_theme()?;
        self.validate_markdown()?;
        self.validate_server()?;
        Ok(())
    }

    /// Validate site metadata.
    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        require_non_empty(&self.site.lang, "site.lang")?;

        let base = &self.site.base;
        if !base.starts_with('/') || !base.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "site.base must start and end with '/', got '{base}'"
            )));
        }

        self.site.ignore_dead_links.validate()
    }

    /// Validate theme wiring.
    fn validate_theme(&self) -> Result<(), ConfigError> {
        for (index, social) in self.theme.social_links.iter().enumerate() {
            let field = format!("theme.social_links[{index}]");
            require_non_empty(&social.icon, &format!("{field}.icon"))?;
            require_http_url(&social.link, &format!("{field}.link"))?;
        }

        if let Some(edit_link) = &self.theme.edit_link {
            require_http_url(&edit_link.pattern, "theme.edit_link.pattern")?;
            if !edit_link.pattern.contains(EDIT_LINK_PLACEHOLDER) {
                return Err(ConfigError::Validation(format!(
                    "theme.edit_link.pattern must contain '{EDIT_LINK_PLACEHOLDER}'"
                )));
            }
        }

        Ok(())
    }

    /// Validate Markdown flags.
    fn validate_markdown(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.markdown.theme.light, "markdown.theme.light")?;
        require_non_empty(&self.markdown.theme.dark, "markdown.theme.dark")?;
        Ok(())
    }

    /// Validate server configuration.
    fn validate_server(&self) -> Result<(), ConfigError> {
        require_host(&self.server.host, "server.host")?;

        // Port 0 is technically valid (OS assigns a random port), but it's
        // unlikely to be intentional in a config file
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        for (index, host) in self.server.allowed_hosts.iter().enumerate() {
            require_host(host, &format!("server.allowed_hosts[{index}]"))?;
        }

        for (index, origin) in self.server.cors.origins.iter().enumerate() {
            if origin != "*" {
                require_http_url(origin, &format!("server.cors.origins[{index}]"))?;
            }
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.base = expand::expand_env(&self.site.base, "site.base")?;
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;

        if let Some(ref mut edit_link) = self.theme.edit_link {
            edit_link.pattern = expand::expand_env(&edit_link.pattern, "theme.edit_link.pattern")?;
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "docs"),
        };
    }

    /// Check locale declarations and build the navigation registry.
    fn resolve_navigation(&mut self) -> Result<(), ConfigError> {
        let decl = NavigationDecl {
            locales: std::mem::take(&mut self.locales),
        };
        self.navigation = NavigationRegistry::from_decl(decl)?;
        Ok(())
    }
}
