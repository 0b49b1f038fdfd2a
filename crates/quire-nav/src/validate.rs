//! Dangling link detection.

use std::collections::{BTreeSet, HashSet};

use crate::entry::LinkTarget;
use crate::error::ValidationError;
use crate::registry::NavigationRegistry;

/// Set of content documents known at build time.
///
/// Documents are identified by URL path: `""` for the home page, `"design"`
/// for `design/index.md` (or `design.md`), `"design/balancing"` for
/// `design/balancing.md`.
pub trait ContentIndex {
    /// Check whether a document exists at the given URL path.
    fn contains(&self, url_path: &str) -> bool;
}

impl ContentIndex for HashSet<String> {
    fn contains(&self, url_path: &str) -> bool {
        HashSet::contains(self, url_path)
    }
}

impl ContentIndex for BTreeSet<String> {
    fn contains(&self, url_path: &str) -> bool {
        BTreeSet::contains(self, url_path)
    }
}

impl NavigationRegistry {
    /// Check every nav and sidebar link of every locale against `content`.
    ///
    /// All dangling links are collected; an empty list means every link
    /// resolves. External and anchor links are not checked.
    pub fn validate<C: ContentIndex + ?Sized>(&self, content: &C) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for locale in self.locales() {
            for (location, entry) in locale.links() {
                let LinkTarget::Document(path) = entry.target() else {
                    continue;
                };
                if !content.contains(&path) {
                    errors.push(ValidationError {
                        locale: locale.id().to_owned(),
                        location,
                        label: entry.text.clone(),
                        target: entry.link.clone(),
                    });
                }
            }
        }

        tracing::debug!(
            locale_count = self.locales().len(),
            error_count = errors.len(),
            "Navigation links validated"
        );
        errors
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::NavEntry;
    use crate::decl::NavigationDecl;
    use crate::error::LinkLocation;
    use crate::fixtures::{gamedev_decl, gamedev_documents, locale_decl};

    fn documents() -> HashSet<String> {
        gamedev_documents().into_iter().collect()
    }

    #[test]
    fn test_complete_site_has_no_errors() {
        let registry = NavigationRegistry::from_decl(gamedev_decl()).unwrap();

        assert!(registry.validate(&documents()).is_empty());
    }

    #[test]
    fn test_single_dangling_sidebar_link_reported_once() {
        let registry = NavigationRegistry::from_decl(gamedev_decl()).unwrap();
        let mut docs = documents();
        docs.remove("design/balancing");

        let errors = registry.validate(&docs);

        assert_eq!(
            errors,
            vec![ValidationError {
                locale: "root".to_owned(),
                location: LinkLocation::Sidebar {
                    prefix: "/design/".to_owned(),
                    section: "ゲーム設計".to_owned(),
                },
                label: "バランス調整".to_owned(),
                target: "/design/balancing".to_owned(),
            }]
        );
    }

    #[test]
    fn test_all_dangling_links_collected() {
        let registry = NavigationRegistry::from_decl(gamedev_decl()).unwrap();
        let mut docs = documents();
        // Referenced from the ja nav, the ja sidebar and the en sidebar.
        docs.remove("design");
        docs.remove("en/design");

        let errors = registry.validate(&docs);

        let found: Vec<_> = errors
            .iter()
            .map(|e| (e.locale.as_str(), e.target.as_str()))
            .collect();
        assert_eq!(
            found,
            vec![
                ("root", "/design/"),
                ("root", "/design/"),
                ("en", "/en/design/"),
                ("en", "/en/design/"),
            ]
        );
    }

    #[test]
    fn test_external_and_anchor_links_skipped() {
        let mut locale = locale_decl("root", None);
        locale.nav = vec![
            NavEntry::new("GitHub", "https://github.com/example/docs"),
            NavEntry::new("Top", "#top"),
        ];
        let registry =
            NavigationRegistry::from_decl(NavigationDecl { locales: vec![locale] }).unwrap();

        assert!(registry.validate(&BTreeSet::new()).is_empty());
    }

    #[test]
    fn test_validate_accepts_trait_object() {
        let registry = NavigationRegistry::from_decl(gamedev_decl()).unwrap();
        let docs = documents();
        let index: &dyn ContentIndex = &docs;

        assert!(registry.validate(index).is_empty());
    }
}
