//! Toc command
//!
//! Usage: studymark toc <DIR> [--check | --write] [--index <FILE>]
//!
//! With no flag the generated table of contents is printed to stdout.
//! `--check` compares it against the committed index file and fails when
//! they disagree; `--write` regenerates the index file in place.

use clap::Args;
use std::fs;
use std::path::PathBuf;

use studymark_core::config::LintConfig;
use studymark_core::diagnostics::{Diagnostic, DiagnosticKind, Severity};
use studymark_core::render::render_toc;
use studymark_core::toc::{build_toc, parse_toc};
use studymark_core::StudymarkError;
use studymark_corpus::load_corpus;

#[derive(Debug, Args)]
pub struct TocArgs {
    /// Corpus root directory
    pub root: PathBuf,

    /// Verify the committed index file matches the corpus
    #[arg(long, conflicts_with = "write")]
    pub check: bool,

    /// Rewrite the index file from the corpus
    #[arg(long)]
    pub write: bool,

    /// Index file path (default: <DIR>/<config index>, usually README.md)
    #[arg(long)]
    pub index: Option<PathBuf>,
}

/// Execute toc command
pub fn execute(args: TocArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let mut config = LintConfig::load_from_root(&args.root)?;
    let index_path = match args.index {
        Some(path) if path.is_absolute() => path,
        Some(path) => args.root.join(path),
        None => args.root.join(&config.index),
    };
    // The index is the builder's output, never a corpus document, even
    // when --index names a file other than the configured one
    if let Ok(relative) = index_path.strip_prefix(&args.root) {
        config.index = relative.to_string_lossy().replace('\\', "/");
    }

    let corpus = load_corpus(&args.root, &config)?;
    let built = build_toc(&corpus.documents, &config);
    let mut diagnostics = built.diagnostics;

    if args.write {
        let rendered = render_toc(&built.toc);
        fs::write(&index_path, rendered)
            .map_err(|e| StudymarkError::io(index_path.display().to_string(), e))?;
        println!("✓ Wrote {}", index_path.display());
    } else if args.check {
        diagnostics.extend(check_index(&index_path, &built.toc));
    } else {
        print!("{}", render_toc(&built.toc));
    }

    for diagnostic in &diagnostics {
        println!("{}", diagnostic);
    }

    let failed = diagnostics.iter().any(|d| d.severity() == Severity::Error);
    Ok(if failed { 1 } else { 0 })
}

/// Compare the committed index against the generated table of contents
fn check_index(index_path: &std::path::Path, built: &studymark_core::Toc) -> Vec<Diagnostic> {
    let path_display = index_path.display().to_string();

    let text = match fs::read_to_string(index_path) {
        Ok(text) => text,
        Err(_) => {
            return vec![Diagnostic::new(DiagnosticKind::StaleIndex)
                .with_path(&path_display)
                .with_message("index file is missing; run `studymark toc --write`")];
        }
    };

    let committed = parse_toc(&text);
    if committed.pairs() == built.pairs() {
        Vec::new()
    } else {
        vec![Diagnostic::new(DiagnosticKind::StaleIndex)
            .with_path(&path_display)
            .with_message(
                "index file does not match the corpus; run `studymark toc --write`",
            )]
    }
}
