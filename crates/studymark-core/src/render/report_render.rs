use crate::report::Report;

/// Render a report as human-readable text
///
/// One line per diagnostic, then a summary footer with document, snippet,
/// and finding counts.
pub fn render_report(report: &Report) -> String {
    let mut output = String::new();

    for diagnostic in &report.diagnostics {
        output.push_str(&format!("{}\n", diagnostic));
    }

    if !report.diagnostics.is_empty() {
        output.push('\n');
    }

    output.push_str(&format!(
        "{} document(s) checked in {}\n",
        report.doc_count, report.corpus_root
    ));

    let snippets = &report.snippets;
    if snippets.checked > 0 || snippets.skipped > 0 {
        output.push_str(&format!(
            "snippets: {} checked, {} matched, {} mismatched, {} skipped, {} engine error(s)\n",
            snippets.checked,
            snippets.matched,
            snippets.mismatched,
            snippets.skipped,
            snippets.engine_errors
        ));
    }

    output.push_str(&format!(
        "{} error(s), {} warning(s)\n",
        report.error_count(),
        report.warning_count()
    ));

    output
}

#[cfg(test)]
mod tests {
    use studymark_core_types::RunId;

    use super::*;
    use crate::diagnostics::{Diagnostic, DiagnosticKind};

    #[test]
    fn test_render_clean_report() {
        let mut report = Report::new(RunId::new(), "docs/");
        report.doc_count = 4;

        let output = render_report(&report);
        assert!(output.contains("4 document(s) checked in docs/"));
        assert!(output.contains("0 error(s), 0 warning(s)"));
        // No snippet line when nothing was checked or skipped
        assert!(!output.contains("snippets:"));
    }

    #[test]
    fn test_render_with_findings() {
        let mut report = Report::new(RunId::new(), "docs/");
        report.doc_count = 1;
        report.snippets.checked = 2;
        report.snippets.matched = 1;
        report.snippets.mismatched = 1;
        report.extend([Diagnostic::new(DiagnosticKind::SnippetMismatch)
            .with_path("equality.md")
            .with_line(33)
            .with_message("expected \"12\", got \"3\"")]);

        let output = render_report(&report);
        assert!(output.contains("error[E_SNIPPET_MISMATCH] equality.md:33"));
        assert!(output.contains("snippets: 2 checked, 1 matched, 1 mismatched"));
        assert!(output.contains("1 error(s), 0 warning(s)"));
    }
}
