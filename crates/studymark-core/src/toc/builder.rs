use std::collections::HashMap;

use crate::config::LintConfig;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::model::{Document, Toc, TocEntry, TocPart};

/// Title of the part that collects documents no configured part claims
pub const DEFAULT_PART_TITLE: &str = "Reference";

/// Title of the single part used when no parts are configured
pub const UNGROUPED_PART_TITLE: &str = "Contents";

/// Result of building a table of contents
///
/// Problems found while building (missing files, duplicate anchors) are
/// diagnostics alongside the Toc, not failures: a best-effort index is
/// still produced.
#[derive(Debug, Clone, PartialEq)]
pub struct TocBuildResult {
    pub toc: Toc,
    pub diagnostics: Vec<Diagnostic>,
}

/// Build the table of contents for a corpus
///
/// Part groupings come from the configuration; documents not claimed by
/// any part collect into a trailing default part, in path order. With no
/// configured parts the whole corpus forms one part. Output is
/// deterministic for a given corpus and configuration.
///
/// Detects as error diagnostics:
/// - configured paths with no matching document (`E_MISSING_FILE`)
/// - two documents slugging to the same anchor (`E_DUPLICATE_ANCHOR`)
pub fn build_toc(docs: &[Document], config: &LintConfig) -> TocBuildResult {
    let mut diagnostics = Vec::new();
    let by_path: HashMap<String, &Document> =
        docs.iter().map(|d| (d.path_display(), d)).collect();

    let mut toc = Toc::new();
    let mut claimed: Vec<String> = Vec::new();

    for part_config in &config.parts {
        let mut part = TocPart::new(&part_config.title);
        for doc_path in &part_config.docs {
            match by_path.get(doc_path.as_str()) {
                Some(doc) => {
                    part.entries
                        .push(TocEntry::new(&doc.title, doc.path_display()));
                    claimed.push(doc_path.clone());
                }
                None => {
                    diagnostics.push(
                        Diagnostic::new(DiagnosticKind::MissingFile)
                            .with_path(doc_path)
                            .with_message(format!(
                                "part '{}' references a file that is not in the corpus",
                                part_config.title
                            )),
                    );
                }
            }
        }
        toc.parts.push(part);
    }

    // Unclaimed documents land in a trailing part, path-sorted
    let mut unclaimed: Vec<&Document> = docs
        .iter()
        .filter(|d| !claimed.contains(&d.path_display()))
        .collect();
    unclaimed.sort_by_key(|d| d.path_display());

    if !unclaimed.is_empty() {
        let title = if config.parts.is_empty() {
            UNGROUPED_PART_TITLE
        } else {
            DEFAULT_PART_TITLE
        };
        let mut part = TocPart::new(title);
        for doc in unclaimed {
            part.entries
                .push(TocEntry::new(&doc.title, doc.path_display()));
        }
        toc.parts.push(part);
    }

    // Duplicate anchors across the whole corpus
    let mut anchors: HashMap<String, String> = HashMap::new();
    let mut sorted_docs: Vec<&Document> = docs.iter().collect();
    sorted_docs.sort_by_key(|d| d.path_display());
    for doc in sorted_docs {
        let anchor = doc.anchor();
        if anchor.is_empty() {
            continue;
        }
        match anchors.get(&anchor) {
            Some(first_path) => {
                diagnostics.push(
                    Diagnostic::new(DiagnosticKind::DuplicateAnchor)
                        .with_path(doc.path_display())
                        .with_message(format!(
                            "anchor '{}' collides with {}",
                            anchor, first_path
                        )),
                );
            }
            None => {
                anchors.insert(anchor, doc.path_display());
            }
        }
    }

    TocBuildResult { toc, diagnostics }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::config::PartConfig;

    fn doc(path: &str, title: &str) -> Document {
        Document::new(PathBuf::from(path), title.to_string(), true)
    }

    #[test]
    fn test_no_config_single_part_in_path_order() {
        let docs = vec![doc("z.md", "Zeta"), doc("a.md", "Alpha")];
        let result = build_toc(&docs, &LintConfig::default());

        assert!(result.diagnostics.is_empty());
        assert_eq!(result.toc.parts.len(), 1);
        assert_eq!(result.toc.parts[0].title, UNGROUPED_PART_TITLE);
        assert_eq!(
            result.toc.pairs(),
            vec![
                ("Alpha".to_string(), "a.md".to_string()),
                ("Zeta".to_string(), "z.md".to_string()),
            ]
        );
    }

    #[test]
    fn test_configured_parts_and_trailing_default() {
        let docs = vec![
            doc("primitives.md", "Primitives"),
            doc("equality.md", "Equality"),
            doc("extra.md", "Extra Notes"),
        ];
        let mut config = LintConfig::default();
        config.parts.push(PartConfig {
            title: "Part 1: Fundamentals".to_string(),
            docs: vec!["primitives.md".to_string(), "equality.md".to_string()],
        });

        let result = build_toc(&docs, &config);
        assert!(result.diagnostics.is_empty());
        assert_eq!(result.toc.parts.len(), 2);
        assert_eq!(result.toc.parts[0].title, "Part 1: Fundamentals");
        assert_eq!(result.toc.parts[1].title, DEFAULT_PART_TITLE);
        assert_eq!(result.toc.parts[1].entries[0].path, "extra.md");
    }

    #[test]
    fn test_missing_file_reported() {
        let docs = vec![doc("a.md", "A")];
        let mut config = LintConfig::default();
        config.parts.push(PartConfig {
            title: "Part 1".to_string(),
            docs: vec!["a.md".to_string(), "ghost.md".to_string()],
        });

        let result = build_toc(&docs, &config);
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].kind(), DiagnosticKind::MissingFile);
        assert_eq!(result.diagnostics[0].path(), Some("ghost.md"));
        // The valid entry still made it in
        assert_eq!(result.toc.len(), 1);
    }

    #[test]
    fn test_duplicate_anchor_reported() {
        let docs = vec![doc("a.md", "Closures"), doc("b.md", "Closures!")];
        let result = build_toc(&docs, &LintConfig::default());

        let dup: Vec<_> = result
            .diagnostics
            .iter()
            .filter(|d| d.kind() == DiagnosticKind::DuplicateAnchor)
            .collect();
        assert_eq!(dup.len(), 1);
        assert_eq!(dup[0].path(), Some("b.md"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let docs = vec![doc("b.md", "B"), doc("a.md", "A"), doc("c.md", "C")];
        let config = LintConfig::default();
        assert_eq!(build_toc(&docs, &config), build_toc(&docs, &config));
    }
}
