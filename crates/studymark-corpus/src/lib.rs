//! Studymark Corpus - Markdown discovery and parsing
//!
//! Turns a directory tree of markdown files into core Document models:
//! - `discovery` walks the tree and lists candidate files deterministically
//! - `parse` converts one markdown text into a Document
//! - `loader` ties both together with per-file failure reporting

pub mod discovery;
pub mod loader;
pub mod parse;

pub use discovery::discover_markdown_files;
pub use loader::{load_corpus, Corpus};
pub use parse::parse_document;
