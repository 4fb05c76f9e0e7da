use crate::model::{Toc, TocEntry, TocPart};

/// Parse a rendered table of contents back into a Toc
///
/// Recognizes the shape `render_toc` emits: `## ` part headings and
/// `- [Title](path)` bullets. Bullets appearing before any part heading
/// collect into an implicit "Contents" part, so hand-maintained flat
/// indexes still parse. Unrecognized lines are skipped.
///
/// Round-trip property: for any Toc with non-empty parts,
/// `parse_toc(render_toc(&toc)).pairs() == toc.pairs()`.
pub fn parse_toc(text: &str) -> Toc {
    let mut toc = Toc::new();
    let mut current: Option<TocPart> = None;

    for line in text.lines() {
        let trimmed = line.trim();

        if let Some(title) = trimmed.strip_prefix("## ") {
            if let Some(part) = current.take() {
                toc.parts.push(part);
            }
            current = Some(TocPart::new(title.trim()));
            continue;
        }

        if let Some(entry) = parse_bullet(trimmed) {
            current
                .get_or_insert_with(|| TocPart::new("Contents"))
                .entries
                .push(entry);
        }
    }

    if let Some(part) = current.take() {
        toc.parts.push(part);
    }

    toc
}

/// Parse one `- [Title](path)` bullet
fn parse_bullet(line: &str) -> Option<TocEntry> {
    let rest = line.strip_prefix("- ").or_else(|| line.strip_prefix("* "))?;
    let rest = rest.trim().strip_prefix('[')?;
    let close = rest.find("](")?;
    let title = &rest[..close];
    let after = &rest[close + 2..];
    let end = after.rfind(')')?;
    let path = &after[..end];
    if title.is_empty() || path.is_empty() {
        return None;
    }
    Some(TocEntry::new(title, path))
}
