//! Section schema finders
//!
//! Pure functions over a Document's recognized section kinds. Each finder
//! reports one class of structural issue; the validator aggregates them
//! into diagnostics. Unrecognized headings never participate: a document
//! is free to add sections beyond the canonical eight.

use crate::model::{Document, Section, SectionKind};

/// Find canonical kinds absent from the document
///
/// Returns missing kinds in canonical order, so a document with three
/// canonical sections yields exactly five entries.
pub fn find_missing_sections(doc: &Document) -> Vec<SectionKind> {
    let present = doc.canonical_kinds();
    SectionKind::CANONICAL_ORDER
        .iter()
        .copied()
        .filter(|kind| !present.contains(kind))
        .collect()
}

/// Find canonical sections that appear out of canonical order
///
/// Walks the recognized kinds in document order and flags every section
/// whose rank is lower than the highest rank seen before it. A fully
/// sorted document (with any subset of kinds) yields no entries.
///
/// Returns (kind, heading line) tuples.
pub fn find_out_of_order_sections(doc: &Document) -> Vec<(SectionKind, usize)> {
    let mut out_of_order = Vec::new();
    let mut max_rank_seen: Option<usize> = None;

    for section in &doc.sections {
        let Some(kind) = section.kind else {
            continue;
        };
        let rank = kind.rank();
        match max_rank_seen {
            Some(max) if rank < max => {
                out_of_order.push((kind, section.line));
            }
            _ => {
                max_rank_seen = Some(max_rank_seen.unwrap_or(0).max(rank));
            }
        }
    }

    out_of_order
}

/// Find canonical kinds that appear more than once
///
/// Returns (kind, line of the second and later occurrences) tuples.
pub fn find_duplicate_sections(doc: &Document) -> Vec<(SectionKind, usize)> {
    let mut seen: Vec<SectionKind> = Vec::new();
    let mut duplicates = Vec::new();

    for section in &doc.sections {
        let Some(kind) = section.kind else {
            continue;
        };
        if seen.contains(&kind) {
            duplicates.push((kind, section.line));
        } else {
            seen.push(kind);
        }
    }

    duplicates
}

/// Find canonical sections whose body carries no prose and no snippets
///
/// Returns references to the offending sections.
pub fn find_empty_sections(doc: &Document) -> Vec<&Section> {
    doc.sections
        .iter()
        .filter(|s| s.is_canonical() && s.is_empty())
        .collect()
}
