//! Studymark CLI
//!
//! Command-line interface for the studymark documentation linter

use clap::{Parser, Subcommand};
use studymark_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "studymark")]
#[command(about = "Studymark - Markdown study-guide linter", long_about = None)]
struct Cli {
    /// Human-readable debug logging on stderr instead of JSON
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Lint a corpus: section schema, table of contents, optionally snippets
    Lint(commands::lint::LintArgs),
    /// Check snippet outputs against their declared expectations
    Snippets(commands::snippets::SnippetsArgs),
    /// Build, check, or write the table of contents
    Toc(commands::toc::TocArgs),
}

fn main() {
    let cli = Cli::parse();

    init(if cli.verbose {
        Profile::Development
    } else {
        Profile::Production
    });

    let result = match cli.command {
        Commands::Lint(args) => commands::lint::execute(args),
        Commands::Snippets(args) => commands::snippets::execute(args),
        Commands::Toc(args) => commands::toc::execute(args),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
