//! Content document discovery for Quire.
//!
//! Scans the documentation source directory for Markdown files and exposes
//! them as a [`DocumentSet`], the [`ContentIndex`] navigation links are
//! validated against.
//!
//! # URL Path Convention
//!
//! Documents are keyed by URL path, not file path:
//! - `index.md` -> `""` (home page)
//! - `guide.md` -> `"guide"`
//! - `design/index.md` -> `"design"`
//! - `design/balancing.md` -> `"design/balancing"`
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use quire_storage::DocumentSet;
//!
//! let docs = DocumentSet::scan(Path::new("docs"))?;
//! println!("{} documents", docs.len());
//! # Ok::<(), quire_storage::StorageError>(())
//! ```

mod scanner;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use quire_nav::ContentIndex;
use scanner::Scanner;

pub use scanner::Document;

/// Storage error.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Source directory does not exist.
    #[error("Source directory not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Source path is not a directory.
    #[error("Source path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Documents available to the site, keyed by URL path.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocumentSet {
    documents: BTreeMap<String, Document>,
}

impl DocumentSet {
    /// Scan `source_dir` for Markdown documents.
    ///
    /// When both `guide.md` and `guide/index.md` exist, `guide/index.md` is
    /// kept (the file whose path sorts first) and a warning is logged.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if `source_dir` is missing or not a directory.
    pub fn scan(source_dir: &Path) -> Result<Self, StorageError> {
        if !source_dir.exists() {
            return Err(StorageError::NotFound(source_dir.to_path_buf()));
        }
        if !source_dir.is_dir() {
            return Err(StorageError::NotADirectory(source_dir.to_path_buf()));
        }

        let set: Self = Scanner::new(source_dir.to_path_buf()).scan().into_iter().collect();
        tracing::debug!(
            source_dir = %source_dir.display(),
            document_count = set.len(),
            "Content scan completed"
        );
        Ok(set)
    }

    /// Look up a document by URL path.
    #[must_use]
    pub fn get(&self, url_path: &str) -> Option<&Document> {
        self.documents.get(url_path)
    }

    /// Documents ordered by URL path.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    /// Number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True if no document was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl FromIterator<Document> for DocumentSet {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        let mut documents: BTreeMap<String, Document> = BTreeMap::new();
        for doc in iter {
            if let Some(existing) = documents.get(&doc.url_path) {
                tracing::warn!(
                    url_path = %doc.url_path,
                    kept = %existing.relative_path.display(),
                    ignored = %doc.relative_path.display(),
                    "Two files map to the same URL path"
                );
                continue;
            }
            documents.insert(doc.url_path.clone(), doc);
        }
        Self { documents }
    }
}

impl ContentIndex for DocumentSet {
    fn contains(&self, url_path: &str) -> bool {
        self.documents.contains_key(url_path)
    }
}
