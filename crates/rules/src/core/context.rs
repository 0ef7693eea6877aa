use crate::walker::{walk_text_files, FileRecord};
use std::fs;
use std::path::{Path, PathBuf};

/// Shared read-only view of the tree under audit.
///
/// The context owns nothing but the root; every accessor re-reads the
/// filesystem, so rules are restartable and see a consistent snapshot only
/// to the extent the tree itself is quiet during the run.
#[derive(Debug, Clone)]
pub struct AuditContext {
    root: PathBuf,
}

impl AuditContext {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a root-relative path declared with `/` separators.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        let mut path = self.root.clone();
        path.extend(relative.split('/'));
        path
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.resolve(relative).exists()
    }

    /// Lazy walk of readable text files under the root matching `extensions`
    /// (lowercase, without the leading dot). Each call restarts the walk.
    pub fn text_files<'a>(
        &'a self,
        extensions: &'a [&'a str],
    ) -> impl Iterator<Item = FileRecord> + 'a {
        walk_text_files(&self.root, extensions)
    }

    /// Names of entries directly under a root-relative directory, sorted.
    /// A missing or unreadable directory is an empty listing, not an error.
    pub fn dir_names(&self, relative: &str) -> Vec<String> {
        let dir = self.resolve(relative);
        let Ok(entries) = fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Root-relative display form of a path produced by the walker.
    pub fn relative_display(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}
