//! Lint configuration
//!
//! An optional `studymark.toml` at the corpus root controls TOC part
//! groupings, the index file name, the JavaScript engine binary, and
//! per-snippet check skips:
//!
//! ```toml
//! index = "README.md"
//! engine = "node"
//!
//! [[part]]
//! title = "Part 1: Language Fundamentals"
//! docs = ["primitives.md", "equality.md"]
//!
//! [[part]]
//! title = "Part 2: Runtime Behavior"
//! docs = ["call-stack.md", "event-loop.md"]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, StudymarkError};

/// File name looked up at the corpus root
pub const CONFIG_FILE_NAME: &str = "studymark.toml";

/// One TOC part grouping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartConfig {
    /// Part title as it should appear in the index
    pub title: String,

    /// Document paths (relative to the corpus root) in this part, in order
    #[serde(default)]
    pub docs: Vec<String>,
}

/// The full lint configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintConfig {
    /// Index file maintained by the TOC builder
    #[serde(default = "default_index")]
    pub index: String,

    /// JavaScript engine binary used by the snippet checker
    #[serde(default = "default_engine")]
    pub engine: String,

    /// TOC part groupings; documents not claimed by any part collect into
    /// a trailing default part
    #[serde(default, rename = "part")]
    pub parts: Vec<PartConfig>,

    /// Snippet digests excluded from output checking
    #[serde(default)]
    pub skip_snippets: Vec<String>,
}

fn default_index() -> String {
    "README.md".to_string()
}

fn default_engine() -> String {
    "node".to_string()
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            index: default_index(),
            engine: default_engine(),
            parts: Vec::new(),
            skip_snippets: Vec::new(),
        }
    }
}

impl LintConfig {
    /// Parse a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).map_err(|e| StudymarkError::io(path, e))?;
        toml::from_str(&text).map_err(|e| StudymarkError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load `studymark.toml` from the corpus root, or fall back to defaults
    ///
    /// A missing file is not an error; an unparseable one is.
    pub fn load_from_root(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Check if a snippet digest is excluded from checking
    pub fn is_snippet_skipped(&self, digest: &str) -> bool {
        self.skip_snippets.iter().any(|d| d == digest)
    }

    /// The part a document path belongs to, if any
    pub fn part_for(&self, path: &str) -> Option<&PartConfig> {
        self.parts.iter().find(|p| p.docs.iter().any(|d| d == path))
    }
}
