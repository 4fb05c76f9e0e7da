//! Studymark Engine - Orchestration layer
//!
//! Provides the snippet output checker and the lint pipeline that
//! coordinates corpus loading, structural validation, TOC verification,
//! and snippet checking into one Report.

pub mod checker;
pub mod nondeterminism;
pub mod pipeline;
pub mod runner;

pub use checker::{check_snippet, Verdict};
pub use pipeline::{run_lint, run_snippets, LintOptions};
pub use runner::{EngineOutput, FixedOutputRunner, NodeRunner, SnippetRunner};
