use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use studymark_core_types::RunId;

use crate::diagnostics::{Diagnostic, Severity};
use crate::errors::Result;

/// Aggregate counts from snippet checking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SnippetSummary {
    /// Snippets with a declared expected output that were considered
    pub checked: usize,
    pub matched: usize,
    pub mismatched: usize,
    /// Skipped as non-deterministic or via the configured skip list
    pub skipped: usize,
    pub engine_errors: usize,
}

/// The outcome of one lint run
///
/// Everything the CLI prints (text or JSON) comes from here: diagnostics
/// from structural validation, TOC building, and snippet checking, plus
/// run correlation metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub run_id: RunId,
    pub generated_at: DateTime<Utc>,
    pub corpus_root: String,
    pub doc_count: usize,
    pub snippets: SnippetSummary,
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    /// Create an empty report for a run
    pub fn new(run_id: RunId, corpus_root: impl Into<String>) -> Self {
        Self {
            run_id,
            generated_at: Utc::now(),
            corpus_root: corpus_root.into(),
            doc_count: 0,
            snippets: SnippetSummary::default(),
            diagnostics: Vec::new(),
        }
    }

    /// Append diagnostics
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// Number of error-severity diagnostics
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == Severity::Error)
            .count()
    }

    /// Number of warning-severity diagnostics
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == Severity::Warning)
            .count()
    }

    /// Check if the run should exit nonzero
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Serialize to pretty JSON for `--format json`
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticKind;

    #[test]
    fn test_empty_report_is_clean() {
        let report = Report::new(RunId::new(), "docs/");
        assert_eq!(report.error_count(), 0);
        assert_eq!(report.warning_count(), 0);
        assert!(!report.has_errors());
    }

    #[test]
    fn test_counts_by_severity() {
        let mut report = Report::new(RunId::new(), "docs/");
        report.extend([
            Diagnostic::new(DiagnosticKind::MissingSection).with_path("a.md"),
            Diagnostic::new(DiagnosticKind::SnippetMismatch).with_path("a.md"),
            Diagnostic::new(DiagnosticKind::MissingSection).with_path("b.md"),
        ]);

        assert_eq!(report.warning_count(), 2);
        assert_eq!(report.error_count(), 1);
        assert!(report.has_errors());
    }

    #[test]
    fn test_json_round_trip() {
        let mut report = Report::new(RunId::new(), "docs/");
        report.doc_count = 3;
        report.snippets.checked = 2;
        report.snippets.matched = 2;
        report.extend([Diagnostic::new(DiagnosticKind::MissingTitle).with_path("x.md")]);

        let json = report.to_json().unwrap();
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back.doc_count, 3);
        assert_eq!(back.snippets.matched, 2);
        assert_eq!(back.diagnostics.len(), 1);
        assert_eq!(back.run_id, report.run_id);
    }
}
