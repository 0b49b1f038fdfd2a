//! Site context.
//!
//! [`SiteContext`] is built once at startup and is read-only afterwards, so a
//! single instance can be shared across threads without locking.

use std::path::Path;

use quire_config::{CliSettings, Config, ConfigError};
use quire_nav::{
    LinkTarget, LocaleNav, NavEntry, NavigationRegistry, SidebarSection, ValidationError,
    link_target,
};
use quire_storage::{DocumentSet, StorageError};

use crate::export::EngineConfig;

/// Error returned when a site cannot be opened or exported.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Content directory could not be scanned.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// Engine configuration could not be serialized.
    #[error("Failed to serialize engine configuration: {0}")]
    Export(#[from] serde_json::Error),
}

/// Dangling navigation links, split by the dead-link policy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkReport {
    /// Links to report.
    pub errors: Vec<ValidationError>,
    /// Links tolerated by `site.ignore_dead_links`.
    pub suppressed: Vec<ValidationError>,
}

impl LinkReport {
    /// True if nothing needs reporting.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Configuration and content of one documentation site.
#[derive(Debug)]
pub struct SiteContext {
    config: Config,
    documents: DocumentSet,
}

impl SiteContext {
    /// Load configuration and scan the content directory.
    ///
    /// `config_path` and `cli_settings` behave as in [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns [`SiteError`] if the configuration is invalid or the source
    /// directory cannot be scanned.
    pub fn open(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, SiteError> {
        let config = Config::load(config_path, cli_settings)?;
        Self::load(config)
    }

    /// Scan the source directory of an already loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] if the source directory is missing.
    pub fn load(config: Config) -> Result<Self, SiteError> {
        let documents = DocumentSet::scan(&config.docs_resolved.source_dir)?;
        tracing::info!(
            source_dir = %config.docs_resolved.source_dir.display(),
            document_count = documents.len(),
            locale_count = config.navigation.locales().len(),
            "Site loaded"
        );
        Ok(Self::new(config, documents))
    }

    /// Create a context from parts.
    #[must_use]
    pub fn new(config: Config, documents: DocumentSet) -> Self {
        Self { config, documents }
    }

    /// Loaded configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Checked navigation.
    #[must_use]
    pub fn navigation(&self) -> &NavigationRegistry {
        &self.config.navigation
    }

    /// Scanned content documents.
    #[must_use]
    pub fn documents(&self) -> &DocumentSet {
        &self.documents
    }

    /// Top navigation of `locale`.
    #[must_use]
    pub fn resolve_nav(&self, locale: &str) -> &[NavEntry] {
        self.warn_unknown_locale(locale);
        self.navigation().resolve_nav(locale)
    }

    /// Sidebar sections for `path` within `locale`.
    #[must_use]
    pub fn resolve_sidebar(&self, path: &str, locale: &str) -> &[SidebarSection] {
        self.warn_unknown_locale(locale);
        self.navigation().resolve_sidebar(path, locale)
    }

    /// Locale owning `path`.
    #[must_use]
    pub fn locale_for_path(&self, path: &str) -> Option<&LocaleNav> {
        self.navigation().locale_for_path(path)
    }

    /// Sidebar sections for `path` within the locale owning it.
    #[must_use]
    pub fn sidebar_for_path(&self, path: &str) -> &[SidebarSection] {
        match self.locale_for_path(path) {
            Some(locale) => locale.sidebar(path),
            None => &[],
        }
    }

    /// Check every navigation link against the scanned documents.
    ///
    /// Links matching `site.ignore_dead_links` are moved to
    /// [`LinkReport::suppressed`] and logged.
    #[must_use]
    pub fn check_links(&self) -> LinkReport {
        let policy = &self.config.site.ignore_dead_links;
        let (suppressed, errors): (Vec<_>, Vec<_>) = self
            .navigation()
            .validate(&self.documents)
            .into_iter()
            .partition(|error| policy.ignores(&error.target));

        for error in &suppressed {
            tracing::warn!(
                locale = %error.locale,
                label = %error.label,
                target = %error.target,
                "Dead link ignored"
            );
        }
        tracing::debug!(
            errors = errors.len(),
            suppressed = suppressed.len(),
            "Link check completed"
        );

        LinkReport { errors, suppressed }
    }

    /// "Edit this page" URL for the document at `url_path`.
    ///
    /// `None` when no edit link is configured or the path has no document.
    #[must_use]
    pub fn edit_link(&self, url_path: &str) -> Option<String> {
        let edit_link = self.config.theme.edit_link.as_ref()?;
        let LinkTarget::Document(target) = link_target(url_path) else {
            return None;
        };
        let document = self.documents.get(&target)?;
        Some(edit_link.url_for(&document.relative_path.to_string_lossy()))
    }

    /// Resolved configuration in the engine's shape.
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig<'_> {
        EngineConfig::new(&self.config)
    }

    /// Engine configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Export`] if serialization fails.
    pub fn export_json(&self) -> Result<String, SiteError> {
        Ok(serde_json::to_string_pretty(&self.engine_config())?)
    }

    fn warn_unknown_locale(&self, locale: &str) {
        if self.navigation().locale(locale).is_none() {
            tracing::warn!(locale, "Unknown locale");
        }
    }
}
