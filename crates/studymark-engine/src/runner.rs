//! Snippet runner seam
//!
//! The checker is written against the `SnippetRunner` trait so tests can
//! inject deterministic doubles and so the engine binary stays
//! configurable. The real implementation shells out to Node.js; the
//! checker never interprets JavaScript itself.

use std::process::Command;

use studymark_core::errors::{Result, StudymarkError};

/// What the engine produced for one snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOutput {
    pub stdout: String,
    pub stderr: String,
    /// Process exit success
    pub success: bool,
}

/// Seam for evaluating a snippet in an external JavaScript engine
pub trait SnippetRunner {
    /// Evaluate snippet source and capture its output
    ///
    /// # Errors
    /// Returns `EngineSpawn` only when the engine process cannot be
    /// started at all. A snippet that throws is a successful run with
    /// `success == false`.
    fn run(&self, source: &str) -> Result<EngineOutput>;

    /// Name of the engine, for diagnostics
    fn name(&self) -> &str;
}

/// Runner that executes snippets with `node -e`
#[derive(Debug, Clone)]
pub struct NodeRunner {
    binary: String,
}

impl NodeRunner {
    /// Create a runner for the given node binary ("node" by default)
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for NodeRunner {
    fn default() -> Self {
        Self::new("node")
    }
}

impl SnippetRunner for NodeRunner {
    fn run(&self, source: &str) -> Result<EngineOutput> {
        let output = Command::new(&self.binary)
            .arg("-e")
            .arg(source)
            .output()
            .map_err(|e| StudymarkError::EngineSpawn {
                engine: self.binary.clone(),
                message: e.to_string(),
            })?;

        Ok(EngineOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
        })
    }

    fn name(&self) -> &str {
        &self.binary
    }
}

/// Test double that returns a fixed output for every snippet
#[derive(Debug, Clone, Default)]
pub struct FixedOutputRunner {
    pub stdout: String,
    pub success: bool,
}

impl FixedOutputRunner {
    /// A runner that "prints" the given lines successfully
    pub fn printing(lines: &[&str]) -> Self {
        let mut stdout = lines.join("\n");
        if !stdout.is_empty() {
            stdout.push('\n');
        }
        Self {
            stdout,
            success: true,
        }
    }

    /// A runner whose snippet always throws
    pub fn failing() -> Self {
        Self {
            stdout: String::new(),
            success: false,
        }
    }
}

impl SnippetRunner for FixedOutputRunner {
    fn run(&self, _source: &str) -> Result<EngineOutput> {
        Ok(EngineOutput {
            stdout: self.stdout.clone(),
            stderr: String::new(),
            success: self.success,
        })
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
