//! Document discovery by filesystem walking.

use std::fs;
use std::path::{Path, PathBuf};

/// Directory names never descended into.
const SKIPPED_DIRS: &[&str] = &["node_modules"];

/// A Markdown file found under the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// URL path (e.g., "", "design", "design/balancing").
    pub url_path: String,
    /// Path of the Markdown file relative to the source directory.
    pub relative_path: PathBuf,
}

/// Walks a source directory and collects Markdown documents.
///
/// Hidden entries (`.vitepress`, `.git`) and dependency directories are
/// skipped. Unreadable subdirectories are logged and skipped.
pub(crate) struct Scanner {
    source_dir: PathBuf,
}

impl Scanner {
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Scan the source directory.
    ///
    /// Documents are ordered by URL path, then by relative path, independent
    /// of directory listing order. The caller checks that the source
    /// directory exists.
    pub fn scan(&self) -> Vec<Document> {
        let mut docs = Vec::new();
        self.scan_directory(&self.source_dir, Path::new(""), &mut docs);
        docs.sort_by(|a, b| {
            (&a.url_path, &a.relative_path).cmp(&(&b.url_path, &b.relative_path))
        });
        docs
    }

    fn scan_directory(&self, dir_path: &Path, rel_dir: &Path, docs: &mut Vec<Document>) {
        let entries = match fs::read_dir(dir_path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %dir_path.display(), error = %e, "Failed to read directory");
                return;
            }
        };

        for entry in entries.filter_map(Result::ok) {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }

            let path = entry.path();
            let rel_path = rel_dir.join(&name);
            let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());

            if is_dir {
                if SKIPPED_DIRS.contains(&name.as_str()) {
                    continue;
                }
                self.scan_directory(&path, &rel_path, docs);
            } else if path.extension().is_some_and(|e| e == "md") {
                docs.push(Document {
                    url_path: file_path_to_url(&rel_path),
                    relative_path: rel_path,
                });
            }
        }
    }
}

/// Convert a source-relative Markdown path to its URL path.
///
/// - `index.md` -> `""`
/// - `guide.md` -> `"guide"`
/// - `design/index.md` -> `"design"`
/// - `design/balancing.md` -> `"design/balancing"`
pub(crate) fn file_path_to_url(rel_path: &Path) -> String {
    let segments: Vec<_> = rel_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    let joined = segments.join("/");

    let without_ext = joined.strip_suffix(".md").unwrap_or(&joined);
    if without_ext == "index" {
        String::new()
    } else if let Some(without_index) = without_ext.strip_suffix("/index") {
        without_index.to_owned()
    } else {
        without_ext.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn write(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "# Title").unwrap();
    }

    fn url_paths(docs: &[Document]) -> Vec<&str> {
        docs.iter().map(|d| d.url_path.as_str()).collect()
    }

    #[test]
    fn test_file_path_to_url() {
        assert_eq!(file_path_to_url(Path::new("index.md")), "");
        assert_eq!(file_path_to_url(Path::new("guide.md")), "guide");
        assert_eq!(file_path_to_url(Path::new("design/index.md")), "design");
        assert_eq!(
            file_path_to_url(Path::new("design/balancing.md")),
            "design/balancing"
        );
        assert_eq!(file_path_to_url(Path::new("en/api/index.md")), "en/api");
    }

    #[test]
    fn test_scan_finds_nested_documents() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "index.md");
        write(temp_dir.path(), "design/index.md");
        write(temp_dir.path(), "design/balancing.md");
        write(temp_dir.path(), "en/design/index.md");

        let docs = Scanner::new(temp_dir.path().to_path_buf()).scan();

        assert_eq!(url_paths(&docs), vec!["", "design", "design/balancing", "en/design"]);
        let balancing = docs.iter().find(|d| d.url_path == "design/balancing").unwrap();
        assert_eq!(balancing.relative_path, PathBuf::from("design/balancing.md"));
    }

    #[test]
    fn test_scan_skips_hidden_and_dependency_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "guide.md");
        write(temp_dir.path(), ".vitepress/theme/notes.md");
        write(temp_dir.path(), "node_modules/pkg/README.md");
        write(temp_dir.path(), ".draft.md");

        let docs = Scanner::new(temp_dir.path().to_path_buf()).scan();

        assert_eq!(url_paths(&docs), vec!["guide"]);
    }

    #[test]
    fn test_scan_orders_colliding_files_by_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "guide.md");
        write(temp_dir.path(), "guide/index.md");

        let docs = Scanner::new(temp_dir.path().to_path_buf()).scan();

        let files: Vec<_> = docs.iter().map(|d| d.relative_path.clone()).collect();
        assert_eq!(
            files,
            vec![PathBuf::from("guide/index.md"), PathBuf::from("guide.md")]
        );
    }

    #[test]
    fn test_scan_ignores_non_markdown_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "public/logo.svg");
        write(temp_dir.path(), "art/index.md");

        let docs = Scanner::new(temp_dir.path().to_path_buf()).scan();

        assert_eq!(url_paths(&docs), vec!["art"]);
    }
}
