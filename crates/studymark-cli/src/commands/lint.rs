//! Lint command
//!
//! Usage: studymark lint <DIR> [--snippets] [--strict] [--format text|json] [--config <FILE>]

use clap::Args;
use std::path::PathBuf;

use studymark_core::config::LintConfig;
use studymark_engine::{run_lint, LintOptions, NodeRunner};

use super::{exit_code, render, OutputFormat};

#[derive(Debug, Args)]
pub struct LintArgs {
    /// Corpus root directory
    pub root: PathBuf,

    /// Also check snippet outputs against their declared expectations
    #[arg(long)]
    pub snippets: bool,

    /// Promote structural warnings to errors
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file (default: <DIR>/studymark.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Execute lint command
pub fn execute(args: LintArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => LintConfig::load(path)?,
        None => LintConfig::load_from_root(&args.root)?,
    };

    let runner = NodeRunner::new(&config.engine);
    let options = LintOptions {
        check_snippets: args.snippets,
        strict: args.strict,
    };

    let report = run_lint(&args.root, &config, &runner, &options)?;
    print!("{}", render(&report, args.format)?);

    Ok(exit_code(&report))
}
