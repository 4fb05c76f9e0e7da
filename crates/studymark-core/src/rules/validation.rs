use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::model::Document;

use super::structure;

/// Validate a document against the canonical section schema
///
/// Runs all structural finders and returns every finding as a diagnostic.
/// Findings accumulate; this never short-circuits, because the report
/// should show the full picture in one pass. All structural findings are
/// warnings: a short reference sheet that legitimately omits sections is
/// flagged, not failed.
///
/// The function is pure, so running it twice on the same document yields
/// the same diagnostics.
pub fn validate_document(doc: &Document) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let path = doc.path_display();

    if !doc.titled_by_heading {
        diagnostics.push(
            Diagnostic::new(DiagnosticKind::MissingTitle)
                .with_path(&path)
                .with_message("document has no H1 title; file stem used as fallback"),
        );
    }

    for kind in structure::find_missing_sections(doc) {
        diagnostics.push(
            Diagnostic::new(DiagnosticKind::MissingSection)
                .with_path(&path)
                .with_section(kind.label())
                .with_message(format!("canonical section '{}' is absent", kind)),
        );
    }

    for (kind, line) in structure::find_out_of_order_sections(doc) {
        diagnostics.push(
            Diagnostic::new(DiagnosticKind::OutOfOrderSection)
                .with_path(&path)
                .with_line(line)
                .with_section(kind.label())
                .with_message(format!(
                    "section '{}' appears after sections that canonically follow it",
                    kind
                )),
        );
    }

    for (kind, line) in structure::find_duplicate_sections(doc) {
        diagnostics.push(
            Diagnostic::new(DiagnosticKind::DuplicateSection)
                .with_path(&path)
                .with_line(line)
                .with_section(kind.label())
                .with_message(format!("canonical section '{}' appears more than once", kind)),
        );
    }

    for section in structure::find_empty_sections(doc) {
        diagnostics.push(
            Diagnostic::new(DiagnosticKind::EmptySection)
                .with_path(&path)
                .with_line(section.line)
                .with_section(&section.heading)
                .with_message("canonical section has no prose and no snippets"),
        );
    }

    diagnostics
}

/// Validate every document in a corpus
///
/// One malformed document never blocks validation of the rest; each
/// document contributes its own diagnostics independently.
pub fn validate_corpus(docs: &[Document]) -> Vec<Diagnostic> {
    docs.iter().flat_map(validate_document).collect()
}
