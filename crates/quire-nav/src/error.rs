//! Declaration and validation errors.

use std::fmt;

/// Where a link is declared inside a locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkLocation {
    /// Top navigation bar.
    Nav,
    /// A sidebar section shown under `prefix`.
    Sidebar {
        /// Path prefix the sidebar is registered under.
        prefix: String,
        /// Label of the section containing the link.
        section: String,
    },
}

impl fmt::Display for LinkLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nav => write!(f, "nav"),
            Self::Sidebar { prefix, section } => {
                write!(f, "sidebar '{prefix}' section '{section}'")
            }
        }
    }
}

/// Malformed navigation declaration.
///
/// Raised while building a [`NavigationRegistry`](crate::NavigationRegistry);
/// the first problem found aborts construction.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NavError {
    /// Locale declared without an identifier.
    #[error("locale #{index} has an empty id")]
    EmptyLocaleId {
        /// Position in declaration order (1-based).
        index: usize,
    },
    /// Two locales share an identifier.
    #[error("locale '{locale}' is declared more than once")]
    DuplicateLocale {
        /// Locale identifier.
        locale: String,
    },
    /// Locale root link is not of the form `/.../`.
    #[error("locale '{locale}': link '{link}' must start and end with '/'")]
    InvalidLocaleLink {
        /// Locale identifier.
        locale: String,
        /// Offending link.
        link: String,
    },
    /// Two locales are served from the same root.
    #[error("locales '{first}' and '{second}' share the root link '{link}'")]
    DuplicateLocaleLink {
        /// Shared root link.
        link: String,
        /// Locale declared first.
        first: String,
        /// Locale declared second.
        second: String,
    },
    /// Sidebar prefix is not site-absolute.
    #[error("locale '{locale}': sidebar prefix '{prefix}' must start with '/'")]
    InvalidPrefix {
        /// Locale identifier.
        locale: String,
        /// Offending prefix.
        prefix: String,
    },
    /// Sidebar prefix registered twice in one locale.
    #[error("locale '{locale}': sidebar prefix '{prefix}' is declared more than once")]
    DuplicatePrefix {
        /// Locale identifier.
        locale: String,
        /// Duplicated prefix.
        prefix: String,
    },
    /// Sidebar section without a label.
    #[error("locale '{locale}': sidebar '{prefix}' section #{index} has an empty label")]
    EmptySectionLabel {
        /// Locale identifier.
        locale: String,
        /// Prefix the section is registered under.
        prefix: String,
        /// Position of the section (1-based).
        index: usize,
    },
    /// Entry without a label.
    #[error("locale '{locale}': {location} item #{index} has an empty label")]
    EmptyLabel {
        /// Locale identifier.
        locale: String,
        /// Where the entry is declared.
        location: LinkLocation,
        /// Position of the entry (1-based).
        index: usize,
    },
    /// Entry without a target.
    #[error("locale '{locale}': {location} item '{label}' has an empty link")]
    EmptyLink {
        /// Locale identifier.
        locale: String,
        /// Where the entry is declared.
        location: LinkLocation,
        /// Label of the entry.
        label: String,
    },
}

/// A link whose target has no content document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    /// Locale declaring the link.
    pub locale: String,
    /// Where the link is declared.
    pub location: LinkLocation,
    /// Display label of the link.
    pub label: String,
    /// Link target as declared.
    pub target: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "locale '{}': {} link '{}' -> {} has no matching document",
            self.locale, self.location, self.label, self.target
        )
    }
}
