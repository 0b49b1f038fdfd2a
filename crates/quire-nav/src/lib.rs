//! Locale-aware navigation for Quire sites.
//!
//! A site declares, per locale, a top navigation bar and sidebars keyed by
//! URL path prefix. This crate turns those declarations into an immutable
//! [`NavigationRegistry`] that answers two questions for the renderer:
//!
//! - which nav entries to show for a locale ([`NavigationRegistry::resolve_nav`])
//! - which sidebar to show for a page ([`NavigationRegistry::resolve_sidebar`])
//!
//! [`NavigationRegistry::validate`] checks every link against a
//! [`ContentIndex`] and reports all dangling links at once.
//!
//! # Example
//!
//! ```
//! use quire_nav::{LocaleDecl, NavEntry, NavigationDecl, NavigationRegistry, SidebarDecl, SidebarSection};
//!
//! let decl = NavigationDecl {
//!     locales: vec![LocaleDecl {
//!         id: "root".to_owned(),
//!         label: "English".to_owned(),
//!         lang: Some("en".to_owned()),
//!         link: None,
//!         nav: vec![NavEntry::new("Guide", "/guide/")],
//!         sidebar: vec![SidebarDecl {
//!             prefix: "/guide/".to_owned(),
//!             sections: vec![SidebarSection::new(
//!                 "Guide",
//!                 vec![NavEntry::new("Install", "/guide/install")],
//!             )],
//!         }],
//!     }],
//! };
//!
//! let registry = NavigationRegistry::from_decl(decl).unwrap();
//! assert_eq!(registry.resolve_nav("root")[0].text, "Guide");
//! assert_eq!(registry.resolve_sidebar("/guide/install", "root")[0].text, "Guide");
//! assert!(registry.resolve_sidebar("/blog/", "root").is_empty());
//! ```

mod decl;
mod entry;
mod error;
mod registry;
mod validate;

#[cfg(test)]
mod fixtures;

pub use decl::{LocaleDecl, NavigationDecl, ROOT_LOCALE, SidebarDecl};
pub use entry::{LinkTarget, NavEntry, SidebarSection, link_target};
pub use error::{LinkLocation, NavError, ValidationError};
pub use registry::{LocaleNav, NavigationRegistry, SidebarRoute};
pub use validate::ContentIndex;
