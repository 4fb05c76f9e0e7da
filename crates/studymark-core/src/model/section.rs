use serde::{Deserialize, Serialize};

use super::snippet::SnippetBlock;

/// The eight canonical section kinds, in canonical order
///
/// Every concept-explainer document in the corpus is expected to follow
/// this progression: introduce the concept, dig into it, build a mental
/// model, warn about pitfalls, give best practices, offer practice
/// problems, show a real-world application, and close with takeaways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    ConceptIntroduction,
    DeepDive,
    MentalModel,
    CommonPitfalls,
    BestPractices,
    PracticeProblems,
    RealWorldApplication,
    KeyTakeaways,
}

impl SectionKind {
    /// All canonical kinds in canonical order
    pub const CANONICAL_ORDER: [SectionKind; 8] = [
        SectionKind::ConceptIntroduction,
        SectionKind::DeepDive,
        SectionKind::MentalModel,
        SectionKind::CommonPitfalls,
        SectionKind::BestPractices,
        SectionKind::PracticeProblems,
        SectionKind::RealWorldApplication,
        SectionKind::KeyTakeaways,
    ];

    /// Position of this kind in the canonical order (0-based)
    pub fn rank(&self) -> usize {
        Self::CANONICAL_ORDER
            .iter()
            .position(|k| k == self)
            .unwrap_or(usize::MAX)
    }

    /// Display label used in headings and diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::ConceptIntroduction => "Concept Introduction",
            SectionKind::DeepDive => "Deep Dive",
            SectionKind::MentalModel => "Mental Model",
            SectionKind::CommonPitfalls => "Common Pitfalls",
            SectionKind::BestPractices => "Best Practices",
            SectionKind::PracticeProblems => "Practice Problems",
            SectionKind::RealWorldApplication => "Real-World Application",
            SectionKind::KeyTakeaways => "Key Takeaways",
        }
    }

    /// Classify a heading string as a canonical kind
    ///
    /// Matching is case-insensitive and tolerant of numbering prefixes
    /// ("3. Mental Model") and a small alias set drawn from the corpus
    /// ("Introduction", "Gotchas", "Takeaways"). Returns None for headings
    /// that are not canonical sections; those are ignored by validation.
    pub fn from_heading(heading: &str) -> Option<SectionKind> {
        let normalized = normalize_heading(heading);
        match normalized.as_str() {
            "concept introduction" | "introduction" | "the concept" => {
                Some(SectionKind::ConceptIntroduction)
            }
            "deep dive" | "deep dive with examples" => Some(SectionKind::DeepDive),
            "mental model" | "mental model / analogy" => Some(SectionKind::MentalModel),
            "common pitfalls" | "pitfalls" | "gotchas" | "common pitfalls and gotchas" => {
                Some(SectionKind::CommonPitfalls)
            }
            "best practices" => Some(SectionKind::BestPractices),
            "practice problems" | "practice" | "exercises" => Some(SectionKind::PracticeProblems),
            "real-world application" | "real world application" | "real-world applications" => {
                Some(SectionKind::RealWorldApplication)
            }
            "key takeaways" | "takeaways" | "summary" => Some(SectionKind::KeyTakeaways),
            _ => None,
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Lowercase a heading and strip numbering prefixes and trailing punctuation
fn normalize_heading(heading: &str) -> String {
    let trimmed = heading.trim();
    // Strip a leading "N." / "N)" numbering prefix
    let without_prefix = trimmed
        .trim_start_matches(|c: char| c.is_ascii_digit() || c == '.' || c == ')' || c == ':')
        .trim_start();
    without_prefix
        .trim_end_matches(|c: char| c == ':' || c == '.')
        .to_lowercase()
}

/// A named subdivision of a Document
///
/// Sections are delimited by level-2 headings. The kind is None for
/// headings that do not match any canonical section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Canonical kind, if the heading matched one
    pub kind: Option<SectionKind>,

    /// Raw heading text as written in the document
    pub heading: String,

    /// 1-based line number of the heading
    pub line: usize,

    /// Prose body of the section (snippets excluded)
    pub body: String,

    /// Code snippets embedded in this section, in document order
    pub snippets: Vec<SnippetBlock>,
}

impl Section {
    /// Create a new section from a heading, classifying it on the way in
    pub fn new(heading: String, line: usize) -> Self {
        let kind = SectionKind::from_heading(&heading);
        Self {
            kind,
            heading,
            line,
            body: String::new(),
            snippets: Vec::new(),
        }
    }

    /// Check if this section matched a canonical kind
    pub fn is_canonical(&self) -> bool {
        self.kind.is_some()
    }

    /// Check if the section has neither prose nor snippets
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty() && self.snippets.is_empty()
    }
}
