//! Snippets command
//!
//! Usage: studymark snippets <DIR> [--engine <NODE_PATH>] [--format text|json]

use clap::Args;
use std::path::PathBuf;

use studymark_core::config::LintConfig;
use studymark_engine::{run_snippets, NodeRunner};

use super::{exit_code, render, OutputFormat};

#[derive(Debug, Args)]
pub struct SnippetsArgs {
    /// Corpus root directory
    pub root: PathBuf,

    /// JavaScript engine binary (default: from config, falling back to `node`)
    #[arg(long)]
    pub engine: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Execute snippets command
pub fn execute(args: SnippetsArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = LintConfig::load_from_root(&args.root)?;
    let engine = args.engine.unwrap_or_else(|| config.engine.clone());
    let runner = NodeRunner::new(engine);

    let report = run_snippets(&args.root, &config, &runner)?;
    print!("{}", render(&report, args.format)?);

    Ok(exit_code(&report))
}
