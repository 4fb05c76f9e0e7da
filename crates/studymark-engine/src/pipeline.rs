//! The lint pipeline
//!
//! A linear batch run over a static corpus: load, validate structure,
//! verify the table of contents, then optionally check snippet outputs.
//! There is no shared mutable state between stages; each contributes
//! diagnostics to the report and the report decides the exit code.

use std::path::Path;
use std::time::Instant;

use studymark_core::config::LintConfig;
use studymark_core::diagnostics::{Diagnostic, DiagnosticKind};
use studymark_core::errors::Result;
use studymark_core::report::Report;
use studymark_core::rules::validate_corpus;
use studymark_core::toc::build_toc;
use studymark_core::{log_op_end, log_op_error, log_op_start};
use studymark_core_types::RunContext;

use studymark_corpus::load_corpus;

use crate::checker::{check_snippet, Verdict};
use crate::runner::SnippetRunner;

/// Options for one lint run
#[derive(Debug, Clone, Copy, Default)]
pub struct LintOptions {
    /// Evaluate snippet outputs against their declarations
    pub check_snippets: bool,
    /// Promote structural warnings to errors
    pub strict: bool,
}

/// Run the full lint pipeline over a corpus
///
/// Only corpus-root I/O failures are fatal. Everything else, including an
/// unavailable JavaScript engine, is reported on the returned Report.
pub fn run_lint(
    root: &Path,
    config: &LintConfig,
    runner: &dyn SnippetRunner,
    options: &LintOptions,
) -> Result<Report> {
    let started = Instant::now();
    let ctx = RunContext::new().with_corpus_root(root.to_string_lossy());
    log_op_start!("lint_run", run_id = %ctx.run_id);

    let mut report = Report::new(ctx.run_id.clone(), root.to_string_lossy());

    // Stage 1: load
    let corpus = match load_corpus(root, config) {
        Ok(corpus) => corpus,
        Err(err) => {
            log_op_error!(
                "lint_run",
                err,
                duration_ms = started.elapsed().as_millis() as u64
            );
            return Err(err);
        }
    };
    report.doc_count = corpus.len();
    report.extend(corpus.diagnostics.clone());

    // Stage 2: section schema validation
    let structural = validate_corpus(&corpus.documents);
    report.extend(structural.into_iter().map(|d| {
        if options.strict {
            d.promoted()
        } else {
            d
        }
    }));

    // Stage 3: table of contents integrity
    let toc_result = build_toc(&corpus.documents, config);
    report.extend(toc_result.diagnostics);

    // Stage 4: snippet output checks
    if options.check_snippets {
        log_op_start!("check_snippets", run_id = %ctx.run_id, engine = runner.name());
        check_corpus_snippets(&corpus, config, runner, &mut report);
        log_op_end!(
            "check_snippets",
            duration_ms = started.elapsed().as_millis() as u64,
            checked = report.snippets.checked
        );
    }

    log_op_end!(
        "lint_run",
        duration_ms = started.elapsed().as_millis() as u64,
        doc_count = report.doc_count,
        diagnostic_count = report.diagnostics.len()
    );

    Ok(report)
}

/// Run snippet output checks only
///
/// Loads the corpus and checks snippets without structural validation or
/// table-of-contents verification. Used by the standalone snippets command.
pub fn run_snippets(
    root: &Path,
    config: &LintConfig,
    runner: &dyn SnippetRunner,
) -> Result<Report> {
    let started = Instant::now();
    let ctx = RunContext::new().with_corpus_root(root.to_string_lossy());
    log_op_start!("snippet_run", run_id = %ctx.run_id, engine = runner.name());

    let mut report = Report::new(ctx.run_id.clone(), root.to_string_lossy());

    let corpus = match load_corpus(root, config) {
        Ok(corpus) => corpus,
        Err(err) => {
            log_op_error!(
                "snippet_run",
                err,
                duration_ms = started.elapsed().as_millis() as u64
            );
            return Err(err);
        }
    };
    report.doc_count = corpus.len();
    report.extend(corpus.diagnostics.clone());

    check_corpus_snippets(&corpus, config, runner, &mut report);

    log_op_end!(
        "snippet_run",
        duration_ms = started.elapsed().as_millis() as u64,
        doc_count = report.doc_count,
        diagnostic_count = report.diagnostics.len()
    );

    Ok(report)
}

/// Check every checkable snippet, downgrading engine unavailability
///
/// Only JavaScript snippets with a declared expected output participate.
/// If the engine cannot be spawned, the failure is reported once and the
/// remaining snippets count as skipped; the run is never aborted.
fn check_corpus_snippets(
    corpus: &studymark_corpus::Corpus,
    config: &LintConfig,
    runner: &dyn SnippetRunner,
    report: &mut Report,
) {
    let mut engine_unavailable = false;

    for doc in &corpus.documents {
        let path = doc.path_display();
        for (index, snippet) in doc.snippets().enumerate() {
            if !snippet.is_javascript() || !snippet.has_expected_output() {
                continue;
            }
            report.snippets.checked += 1;

            if config.is_snippet_skipped(&snippet.digest()) {
                report.snippets.skipped += 1;
                continue;
            }

            if engine_unavailable {
                report.snippets.skipped += 1;
                continue;
            }

            let verdict = match check_snippet(runner, snippet) {
                Ok(verdict) => verdict,
                Err(err) => {
                    engine_unavailable = true;
                    report.snippets.skipped += 1;
                    report.extend([Diagnostic::new(DiagnosticKind::SnippetEngineError)
                        .with_path(&path)
                        .with_line(snippet.line)
                        .with_snippet(index)
                        .with_message(format!(
                            "{}; remaining snippet checks skipped",
                            err
                        ))]);
                    continue;
                }
            };

            match verdict {
                Verdict::Match => {
                    report.snippets.matched += 1;
                }
                Verdict::Mismatch { expected, actual } => {
                    report.snippets.mismatched += 1;
                    report.extend([Diagnostic::new(DiagnosticKind::SnippetMismatch)
                        .with_path(&path)
                        .with_line(snippet.line)
                        .with_snippet(index)
                        .with_message(format!(
                            "expected {:?}, got {:?}",
                            expected, actual
                        ))]);
                }
                Verdict::Skipped { reason } => {
                    report.snippets.skipped += 1;
                    report.extend([Diagnostic::new(DiagnosticKind::SnippetSkipped)
                        .with_path(&path)
                        .with_line(snippet.line)
                        .with_snippet(index)
                        .with_message(reason)]);
                }
                Verdict::EngineError { message } => {
                    report.snippets.engine_errors += 1;
                    report.extend([Diagnostic::new(DiagnosticKind::SnippetEngineError)
                        .with_path(&path)
                        .with_line(snippet.line)
                        .with_snippet(index)
                        .with_message(message)]);
                }
            }
        }
    }
}
