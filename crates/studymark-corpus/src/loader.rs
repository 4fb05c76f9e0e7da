//! Corpus loading
//!
//! Reads every discovered markdown file into a Document. A file that
//! cannot be read is reported as a diagnostic and skipped; the remainder
//! of the corpus still loads, because one bad file must not block the run.

use std::path::{Path, PathBuf};
use std::time::Instant;

use studymark_core::config::LintConfig;
use studymark_core::diagnostics::{Diagnostic, DiagnosticKind};
use studymark_core::errors::Result;
use studymark_core::model::Document;
use studymark_core::{log_op_end, log_op_start};

use crate::discovery::discover_markdown_files;
use crate::parse::parse_document;

/// A loaded corpus: the documents plus any load-time diagnostics
#[derive(Debug, Clone)]
pub struct Corpus {
    pub root: PathBuf,
    pub documents: Vec<Document>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Corpus {
    /// Number of successfully loaded documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Load every markdown document under a corpus root
///
/// Only a missing root is fatal. Unreadable files become
/// `W_UNREADABLE_FILE` diagnostics on the returned corpus.
pub fn load_corpus(root: &Path, config: &LintConfig) -> Result<Corpus> {
    let started = Instant::now();
    log_op_start!("load_corpus");

    let files = discover_markdown_files(root, &config.index)?;

    let mut documents = Vec::new();
    let mut diagnostics = Vec::new();

    for relative in files {
        let absolute = root.join(&relative);
        match std::fs::read_to_string(&absolute) {
            Ok(text) => {
                documents.push(parse_document(relative, &text));
            }
            Err(err) => {
                diagnostics.push(
                    Diagnostic::new(DiagnosticKind::UnreadableFile)
                        .with_path(relative.to_string_lossy())
                        .with_message(format!("could not read file: {}", err)),
                );
            }
        }
    }

    log_op_end!(
        "load_corpus",
        duration_ms = started.elapsed().as_millis() as u64,
        doc_count = documents.len()
    );

    Ok(Corpus {
        root: root.to_path_buf(),
        documents,
        diagnostics,
    })
}
