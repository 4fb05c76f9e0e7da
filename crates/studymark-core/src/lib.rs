//! Studymark Core - Document template model and lint rules
//!
//! This crate provides the foundational data structures and operations for
//! studymark, including:
//! - Document, Section, and SnippetBlock models for concept-explainer articles
//! - The canonical eight-part section schema and its ordering rules
//! - Structural validation producing diagnostics (never hard failures)
//! - Table of contents building, parsing, and Markdown rendering
//! - Report aggregation for the CLI and JSON output
//! - Lint configuration loaded from `studymark.toml`

pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod render;
pub mod report;
pub mod rules;
pub mod toc;

// Re-export commonly used types
pub use config::LintConfig;
pub use diagnostics::{Diagnostic, DiagnosticKind, Severity};
pub use errors::{Result, StudymarkError};
pub use model::{Document, Section, SectionKind, SnippetBlock, Toc, TocEntry, TocPart};
pub use report::Report;
