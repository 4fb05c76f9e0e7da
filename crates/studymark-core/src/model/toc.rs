use serde::{Deserialize, Serialize};

/// One navigation entry: a document title and its relative path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Display title
    pub title: String,

    /// Path relative to the corpus root, forward slashes
    pub path: String,
}

impl TocEntry {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
        }
    }
}

/// A named grouping of entries ("Part 1: Fundamentals")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocPart {
    /// Part title
    pub title: String,

    /// Entries in this part, in order
    pub entries: Vec<TocEntry>,
}

impl TocPart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }
}

/// The full table of contents: ordered parts of ordered entries
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Toc {
    pub parts: Vec<TocPart>,
}

impl Toc {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries across parts, in order
    pub fn entries(&self) -> impl Iterator<Item = &TocEntry> {
        self.parts.iter().flat_map(|p| p.entries.iter())
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        self.parts.iter().map(|p| p.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The (title, path) pairs, in order
    ///
    /// This is the set the round-trip property is stated over: rendering a
    /// Toc and re-parsing it must recover exactly these pairs.
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.entries()
            .map(|e| (e.title.clone(), e.path.clone()))
            .collect()
    }
}
