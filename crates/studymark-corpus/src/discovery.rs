//! Markdown file discovery
//!
//! Walks the corpus root and lists every `.md` file except the index file
//! and anything under hidden directories. Results are path-sorted so every
//! downstream stage sees the corpus in a deterministic order.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use studymark_core::errors::{Result, StudymarkError};

/// Discover markdown files under a corpus root
///
/// Returns paths relative to the root, sorted. The index file (usually
/// `README.md`) is excluded because it is the TOC builder's output, not a
/// document. Hidden files and directories (dot-prefixed) are skipped.
pub fn discover_markdown_files(root: &Path, index_file: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(StudymarkError::CorpusRootNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    // depth 0 is the root itself, which may legitimately be dot-prefixed
    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name().to_string_lossy().as_ref()));

    for entry in walker {
        let entry = entry.map_err(|e| StudymarkError::Io {
            path: e.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf()),
            source: e.into(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().map(|ext| ext == "md").unwrap_or(false) {
            let relative = path
                .strip_prefix(root)
                .unwrap_or(path)
                .to_path_buf();
            if relative.to_string_lossy() == index_file {
                continue;
            }
            files.push(relative);
        }
    }

    files.sort();
    Ok(files)
}

/// Dot-prefixed names are hidden
fn is_hidden(name: &str) -> bool {
    name.starts_with('.') && name != "." && name != ".."
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_discovers_sorted_markdown_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.md"), "# B").unwrap();
        fs::write(dir.path().join("a.md"), "# A").unwrap();
        fs::write(dir.path().join("notes.txt"), "not markdown").unwrap();

        let files = discover_markdown_files(dir.path(), "README.md").unwrap();
        assert_eq!(files, vec![PathBuf::from("a.md"), PathBuf::from("b.md")]);
    }

    #[test]
    fn test_excludes_index_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("README.md"), "# TOC").unwrap();
        fs::write(dir.path().join("doc.md"), "# Doc").unwrap();

        let files = discover_markdown_files(dir.path(), "README.md").unwrap();
        assert_eq!(files, vec![PathBuf::from("doc.md")]);
    }

    #[test]
    fn test_recurses_but_skips_hidden_dirs() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("guides")).unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join("guides/nested.md"), "# Nested").unwrap();
        fs::write(dir.path().join(".git/junk.md"), "junk").unwrap();

        let files = discover_markdown_files(dir.path(), "README.md").unwrap();
        assert_eq!(files, vec![PathBuf::from("guides/nested.md")]);
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let result = discover_markdown_files(Path::new("/no/such/dir"), "README.md");
        assert!(matches!(
            result,
            Err(StudymarkError::CorpusRootNotFound { .. })
        ));
    }
}
