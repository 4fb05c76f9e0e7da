use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::section::{Section, SectionKind};
use super::snippet::SnippetBlock;

/// One markdown article covering a single concept
///
/// A Document is authored once and occasionally revised; there is no
/// runtime mutation. The path is relative to the corpus root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Path relative to the corpus root
    pub path: PathBuf,

    /// Title from the first H1, or the file stem when no H1 exists
    pub title: String,

    /// Ordered sections, as delimited by level-2 headings
    pub sections: Vec<Section>,

    /// Whether the title came from an H1 (false means file-stem fallback)
    pub titled_by_heading: bool,
}

impl Document {
    /// Create a document with no sections yet
    pub fn new(path: PathBuf, title: String, titled_by_heading: bool) -> Self {
        Self {
            path,
            title,
            sections: Vec::new(),
            titled_by_heading,
        }
    }

    /// The canonical kinds present, in document order
    ///
    /// Unrecognized headings are excluded. This is the input to the
    /// section schema validator.
    pub fn canonical_kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().filter_map(|s| s.kind).collect()
    }

    /// All snippets in the document, in document order
    pub fn snippets(&self) -> impl Iterator<Item = &SnippetBlock> {
        self.sections.iter().flat_map(|s| s.snippets.iter())
    }

    /// GitHub-style anchor slug for the document title
    ///
    /// Lowercased, alphanumerics kept, spaces collapsed to hyphens, other
    /// punctuation dropped. Two documents producing the same slug is a
    /// duplicate-anchor error in the TOC builder.
    pub fn anchor(&self) -> String {
        slugify(&self.title)
    }

    /// Path as a forward-slash display string for reports and the TOC
    pub fn path_display(&self) -> String {
        self.path.to_string_lossy().replace('\\', "/")
    }
}

/// Slugify a title the way GitHub anchors headings
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = false;
    for c in title.trim().chars() {
        if c.is_alphanumeric() {
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
            last_was_hyphen = false;
        } else if (c == ' ' || c == '-' || c == '_') && !last_was_hyphen && !slug.is_empty() {
            slug.push('-');
            last_was_hyphen = true;
        }
        // All other punctuation is dropped
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
