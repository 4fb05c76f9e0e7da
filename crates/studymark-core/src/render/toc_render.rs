use crate::model::Toc;

/// Render a table of contents to Markdown
///
/// Emits the index shape the corpus README uses: a top-level heading,
/// `##` part headings, and one bullet per document. Output is
/// deterministic, so rebuilding an unchanged corpus produces an identical
/// index (and `toc --check` can diff byte-wise).
pub fn render_toc(toc: &Toc) -> String {
    let mut output = String::new();
    output.push_str("# Table of Contents\n");

    for part in &toc.parts {
        if part.entries.is_empty() {
            continue;
        }
        output.push_str(&format!("\n## {}\n\n", part.title));
        for entry in &part.entries {
            output.push_str(&format!("- [{}]({})\n", entry.title, entry.path));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TocEntry, TocPart};

    #[test]
    fn test_render_basic() {
        let mut toc = Toc::new();
        let mut part = TocPart::new("Part 1: Fundamentals");
        part.entries.push(TocEntry::new("Primitives", "primitives.md"));
        part.entries.push(TocEntry::new("Equality", "equality.md"));
        toc.parts.push(part);

        let output = render_toc(&toc);
        assert!(output.starts_with("# Table of Contents\n"));
        assert!(output.contains("## Part 1: Fundamentals"));
        assert!(output.contains("- [Primitives](primitives.md)\n"));
        assert!(output.contains("- [Equality](equality.md)\n"));
    }

    #[test]
    fn test_empty_parts_omitted() {
        let mut toc = Toc::new();
        toc.parts.push(TocPart::new("Empty Part"));

        let output = render_toc(&toc);
        assert!(!output.contains("Empty Part"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut toc = Toc::new();
        let mut part = TocPart::new("Guides");
        part.entries.push(TocEntry::new("A", "a.md"));
        toc.parts.push(part);

        assert_eq!(render_toc(&toc), render_toc(&toc));
    }
}
