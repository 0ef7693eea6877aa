//! Shared tree walker.
//!
//! Yields readable text files under a root, filtered by extension. The walk
//! is recursive, sorted for deterministic output, and restartable (each call
//! re-walks from scratch). Decoding is lossy, so a corrupt file degrades to
//! replacement characters instead of aborting the audit; files that cannot
//! be read at all are skipped silently. A nonexistent root yields an empty
//! sequence.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One scanned file: path plus best-effort decoded content. Transient —
/// consumed by the owning rule and dropped.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub path: PathBuf,
    pub text: String,
}

fn extension_matches(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .is_some_and(|ext| extensions.contains(&ext.as_str()))
}

/// Lazy sequence of text files under `root` whose extension (lowercased,
/// without the dot) is in `extensions`.
pub fn walk_text_files<'a>(
    root: &Path,
    extensions: &'a [&'a str],
) -> impl Iterator<Item = FileRecord> + 'a {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(move |entry| extension_matches(entry.path(), extensions))
        .filter_map(|entry| {
            let bytes = match fs::read(entry.path()) {
                Ok(bytes) => bytes,
                Err(error) => {
                    tracing::debug!(path = %entry.path().display(), %error, "skipping unreadable file");
                    return None;
                }
            };
            Some(FileRecord {
                path: entry.into_path(),
                text: String::from_utf8_lossy(&bytes).into_owned(),
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonexistent_root_yields_nothing() {
        let root = Path::new("/no/such/leeway/tree");
        assert_eq!(walk_text_files(root, &["py"]).count(), 0);
    }

    #[test]
    fn filters_by_extension_case_insensitively() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("a.PY"), "x").unwrap();
        fs::write(dir.path().join("b.rs"), "y").unwrap();
        let files: Vec<_> = walk_text_files(dir.path(), &["py"]).collect();
        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("a.PY"));
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("bad.md"), [0x4c, 0xff, 0xfe, 0x4c]).unwrap();
        let files: Vec<_> = walk_text_files(dir.path(), &["md"]).collect();
        assert_eq!(files.len(), 1);
        assert!(files[0].text.contains('\u{FFFD}'));
    }
}
