//! Navigation registry.
//!
//! Holds, per locale, the ordered top navigation and the sidebars keyed by
//! path prefix. Built once from a [`NavigationDecl`] and read-only afterwards.
//!
//! # Sidebar Resolution
//!
//! A sidebar applies to a page when the page path starts with the sidebar
//! prefix. When several prefixes match, the longest one wins, so declaration
//! order never affects which sidebar is shown. A prefix ending in `/` also
//! matches the same path without the slash (`/design/` matches `/design`).

use std::collections::{HashMap, HashSet};

use crate::decl::{LocaleDecl, NavigationDecl, SidebarDecl};
use crate::entry::{NavEntry, SidebarSection, normalize_page_path};
use crate::error::{LinkLocation, NavError};

/// Navigation for every locale of a site.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationRegistry {
    locales: Vec<LocaleNav>,
}

/// Navigation owned by a single locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleNav {
    id: String,
    label: String,
    lang: Option<String>,
    link: String,
    nav: Vec<NavEntry>,
    sidebars: Vec<SidebarRoute>,
}

/// Sidebar sections registered under a path prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarRoute {
    prefix: String,
    sections: Vec<SidebarSection>,
}

impl SidebarRoute {
    /// Path prefix this sidebar is shown under.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Sections in display order.
    #[must_use]
    pub fn sections(&self) -> &[SidebarSection] {
        &self.sections
    }

    fn matches(&self, path: &str) -> bool {
        prefix_matches(&self.prefix, path)
    }
}

fn prefix_matches(prefix: &str, path: &str) -> bool {
    path.starts_with(prefix) || prefix.strip_suffix('/').is_some_and(|dir| dir == path)
}

impl NavigationRegistry {
    /// Build a registry from its declaration.
    ///
    /// # Errors
    ///
    /// Returns the first [`NavError`] found: empty or duplicate locale ids,
    /// malformed or shared locale links, non-absolute or duplicate sidebar
    /// prefixes, and entries with an empty label or link.
    pub fn from_decl(decl: NavigationDecl) -> Result<Self, NavError> {
        let mut ids = HashSet::new();
        let mut links: HashMap<String, String> = HashMap::new();
        let mut locales = Vec::with_capacity(decl.locales.len());

        for (index, locale) in decl.locales.into_iter().enumerate() {
            if locale.id.trim().is_empty() {
                return Err(NavError::EmptyLocaleId { index: index + 1 });
            }
            if !ids.insert(locale.id.clone()) {
                return Err(NavError::DuplicateLocale { locale: locale.id });
            }

            let link = locale.resolved_link();
            if !link.starts_with('/') || !link.ends_with('/') {
                return Err(NavError::InvalidLocaleLink {
                    locale: locale.id,
                    link,
                });
            }
            if let Some(first) = links.get(&link) {
                return Err(NavError::DuplicateLocaleLink {
                    link,
                    first: first.clone(),
                    second: locale.id,
                });
            }
            links.insert(link.clone(), locale.id.clone());

            locales.push(LocaleNav::from_decl(locale, link)?);
        }

        tracing::debug!(locale_count = locales.len(), "Navigation registry built");
        Ok(Self { locales })
    }

    /// Declarative form that rebuilds an equivalent registry.
    #[must_use]
    pub fn to_decl(&self) -> NavigationDecl {
        NavigationDecl {
            locales: self.locales.iter().map(LocaleNav::to_decl).collect(),
        }
    }

    /// Locales in declaration order.
    #[must_use]
    pub fn locales(&self) -> &[LocaleNav] {
        &self.locales
    }

    /// True if no locale is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Look up a locale by id.
    #[must_use]
    pub fn locale(&self, id: &str) -> Option<&LocaleNav> {
        self.locales.iter().find(|locale| locale.id == id)
    }

    /// Locale whose root link is the longest prefix of `path`.
    #[must_use]
    pub fn locale_for_path(&self, path: &str) -> Option<&LocaleNav> {
        let path = normalize_page_path(path);
        self.locales
            .iter()
            .filter(|locale| prefix_matches(&locale.link, &path))
            .max_by_key(|locale| locale.link.len())
    }

    /// Top navigation of `locale` in declaration order.
    ///
    /// An unknown locale has no navigation; there is no fallback to another
    /// locale.
    #[must_use]
    pub fn resolve_nav(&self, locale: &str) -> &[NavEntry] {
        match self.locale(locale) {
            Some(locale) => locale.nav(),
            None => {
                tracing::debug!(locale, "Unknown locale, no navigation");
                &[]
            }
        }
    }

    /// Sidebar sections for a page of `locale`.
    ///
    /// Returns an empty slice when no prefix matches or the locale is unknown.
    #[must_use]
    pub fn resolve_sidebar(&self, path: &str, locale: &str) -> &[SidebarSection] {
        match self.locale(locale) {
            Some(locale) => locale.sidebar(path),
            None => {
                tracing::debug!(locale, path, "Unknown locale, no sidebar");
                &[]
            }
        }
    }
}

impl LocaleNav {
    fn from_decl(decl: LocaleDecl, link: String) -> Result<Self, NavError> {
        let LocaleDecl {
            id,
            label,
            lang,
            nav,
            sidebar,
            ..
        } = decl;

        check_entries(&id, &LinkLocation::Nav, &nav)?;

        let mut prefixes = HashSet::new();
        let mut sidebars = Vec::with_capacity(sidebar.len());
        for SidebarDecl { prefix, sections } in sidebar {
            if !prefix.starts_with('/') {
                return Err(NavError::InvalidPrefix { locale: id, prefix });
            }
            if !prefixes.insert(prefix.clone()) {
                return Err(NavError::DuplicatePrefix { locale: id, prefix });
            }
            for (index, section) in sections.iter().enumerate() {
                if section.text.trim().is_empty() {
                    return Err(NavError::EmptySectionLabel {
                        locale: id,
                        prefix,
                        index: index + 1,
                    });
                }
                let location = LinkLocation::Sidebar {
                    prefix: prefix.clone(),
                    section: section.text.clone(),
                };
                check_entries(&id, &location, &section.items)?;
            }
            sidebars.push(SidebarRoute { prefix, sections });
        }

        Ok(Self {
            id,
            label,
            lang,
            link,
            nav,
            sidebars,
        })
    }

    fn to_decl(&self) -> LocaleDecl {
        LocaleDecl {
            id: self.id.clone(),
            label: self.label.clone(),
            lang: self.lang.clone(),
            link: Some(self.link.clone()),
            nav: self.nav.clone(),
            sidebar: self
                .sidebars
                .iter()
                .map(|route| SidebarDecl {
                    prefix: route.prefix.clone(),
                    sections: route.sections.clone(),
                })
                .collect(),
        }
    }

    /// Locale identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Language switcher label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Language tag, if declared.
    #[must_use]
    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    /// URL root of the locale (always starts and ends with `/`).
    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Top navigation in declaration order.
    #[must_use]
    pub fn nav(&self) -> &[NavEntry] {
        &self.nav
    }

    /// Sidebars in declaration order.
    #[must_use]
    pub fn sidebars(&self) -> &[SidebarRoute] {
        &self.sidebars
    }

    /// Sidebar sections for `path`, longest matching prefix wins.
    #[must_use]
    pub fn sidebar(&self, path: &str) -> &[SidebarSection] {
        let path = normalize_page_path(path);
        let route = self
            .sidebars
            .iter()
            .filter(|route| route.matches(&path))
            .max_by_key(|route| route.prefix.len());

        match route {
            Some(route) => {
                tracing::debug!(locale = %self.id, path = %path, prefix = %route.prefix, "Sidebar resolved");
                &route.sections
            }
            None => &[],
        }
    }

    /// Every link of the locale with its location, nav first.
    pub fn links(&self) -> impl Iterator<Item = (LinkLocation, &NavEntry)> {
        let nav = self.nav.iter().map(|entry| (LinkLocation::Nav, entry));
        let sidebar = self.sidebars.iter().flat_map(|route| {
            route.sections.iter().flat_map(move |section| {
                section.items.iter().map(move |entry| {
                    let location = LinkLocation::Sidebar {
                        prefix: route.prefix.clone(),
                        section: section.text.clone(),
                    };
                    (location, entry)
                })
            })
        });
        nav.chain(sidebar)
    }
}

fn check_entries(locale: &str, location: &LinkLocation, entries: &[NavEntry]) -> Result<(), NavError> {
    for (index, entry) in entries.iter().enumerate() {
        if entry.text.trim().is_empty() {
            return Err(NavError::EmptyLabel {
                locale: locale.to_owned(),
                location: location.clone(),
                index: index + 1,
            });
        }
        if entry.link.trim().is_empty() {
            return Err(NavError::EmptyLink {
                locale: locale.to_owned(),
                location: location.clone(),
                label: entry.text.clone(),
            });
        }
    }
    Ok(())
}
