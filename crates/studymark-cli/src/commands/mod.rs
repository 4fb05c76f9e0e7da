//! CLI command modules

pub mod lint;
pub mod snippets;
pub mod toc;

use clap::ValueEnum;
use studymark_core::report::Report;
use studymark_core::StudymarkError;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable diagnostic lines
    Text,
    /// Pretty-printed JSON report
    Json,
}

/// Render a report in the requested format
pub fn render(report: &Report, format: OutputFormat) -> Result<String, StudymarkError> {
    match format {
        OutputFormat::Text => Ok(studymark_core::render::render_report(report)),
        OutputFormat::Json => report.to_json(),
    }
}

/// Exit code for a finished run: 1 if any error diagnostic, else 0
pub fn exit_code(report: &Report) -> i32 {
    if report.has_errors() {
        1
    } else {
        0
    }
}
