//! Diagnostic facility for lint findings
//!
//! Lint findings are values, not control-flow errors: a run collects every
//! diagnostic it can and reports them together. Each kind maps to a stable
//! code that can be used for programmatic handling, testing, and the JSON
//! report surface.

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic
///
/// Warnings never fail a run on their own (unless promoted by `--strict`);
/// errors produce a nonzero exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// Canonical diagnostic kind taxonomy
///
/// Each kind maps to a stable code via [`DiagnosticKind::code`]. Warning
/// kinds are prefixed `W_`, error kinds `E_`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    // Section schema (structural; warnings)
    MissingSection,
    OutOfOrderSection,
    DuplicateSection,
    EmptySection,

    // Corpus loading (structural; warnings)
    UnreadableFile,
    MissingTitle,

    // Snippet checking
    SnippetMismatch,
    SnippetEngineError,
    SnippetSkipped,

    // Table of contents (errors)
    DuplicateAnchor,
    MissingFile,
    StaleIndex,
}

impl DiagnosticKind {
    /// Get the stable code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::MissingSection => "W_MISSING_SECTION",
            DiagnosticKind::OutOfOrderSection => "W_OUT_OF_ORDER_SECTION",
            DiagnosticKind::DuplicateSection => "W_DUPLICATE_SECTION",
            DiagnosticKind::EmptySection => "W_EMPTY_SECTION",
            DiagnosticKind::UnreadableFile => "W_UNREADABLE_FILE",
            DiagnosticKind::MissingTitle => "W_MISSING_TITLE",
            DiagnosticKind::SnippetMismatch => "E_SNIPPET_MISMATCH",
            DiagnosticKind::SnippetEngineError => "W_SNIPPET_ENGINE_ERROR",
            DiagnosticKind::SnippetSkipped => "W_SNIPPET_SKIPPED",
            DiagnosticKind::DuplicateAnchor => "E_DUPLICATE_ANCHOR",
            DiagnosticKind::MissingFile => "E_MISSING_FILE",
            DiagnosticKind::StaleIndex => "E_STALE_INDEX",
        }
    }

    /// Default severity for this kind
    pub fn default_severity(&self) -> Severity {
        match self {
            DiagnosticKind::SnippetMismatch
            | DiagnosticKind::DuplicateAnchor
            | DiagnosticKind::MissingFile
            | DiagnosticKind::StaleIndex => Severity::Error,
            _ => Severity::Warning,
        }
    }
}

/// A single lint finding with file/line context
///
/// Constructed with builder-style `with_*` methods so call sites only
/// attach the context they actually have.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    severity: Severity,
    message: String,
    path: Option<String>,
    line: Option<usize>,
    section: Option<String>,
    snippet_index: Option<usize>,
}

impl Diagnostic {
    /// Create a new diagnostic of the given kind at its default severity
    pub fn new(kind: DiagnosticKind) -> Self {
        Self {
            kind,
            severity: kind.default_severity(),
            message: String::new(),
            path: None,
            line: None,
            section: None,
            snippet_index: None,
        }
    }

    /// Add a human-readable message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add the document path the finding belongs to
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add a 1-based line number
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add the section label the finding refers to
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Add the index of the snippet within its document
    pub fn with_snippet(mut self, index: usize) -> Self {
        self.snippet_index = Some(index);
        self
    }

    /// Promote this diagnostic to error severity (strict mode)
    pub fn promoted(mut self) -> Self {
        self.severity = Severity::Error;
        self
    }

    /// Get the diagnostic kind
    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    /// Get the stable code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the severity
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the document path, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the line number, if any
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Get the section label, if any
    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    /// Get the snippet index, if any
    pub fn snippet_index(&self) -> Option<usize> {
        self.snippet_index
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let severity = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}[{}]", severity, self.code())?;
        if let Some(path) = &self.path {
            write!(f, " {}", path)?;
            if let Some(line) = self.line {
                write!(f, ":{}", line)?;
            }
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(section) = &self.section {
            write!(f, " (section: {})", section)?;
        }
        if let Some(index) = self.snippet_index {
            write!(f, " (snippet #{})", index)?;
        }
        Ok(())
    }
}
