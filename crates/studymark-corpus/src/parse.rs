//! Markdown parsing into Document models
//!
//! One pass over the pulldown-cmark event stream with byte offsets, so
//! every section heading and snippet fence gets a 1-based line number for
//! diagnostics.
//!
//! Structure mapping:
//! - first H1 becomes the document title
//! - every H2 opens a new section (H3+ headings flow into the body)
//! - fenced code blocks become SnippetBlocks in the enclosing section
//! - content before the first H2 lands in an implicit preamble section,
//!   so snippets in an introduction still get checked

use std::path::PathBuf;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use studymark_core::model::{Document, Section, SnippetBlock};

/// Parse one markdown text into a Document
pub fn parse_document(path: PathBuf, text: &str) -> Document {
    let line_index = LineIndex::new(text);
    let fallback_title = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "untitled".to_string());

    let mut title: Option<String> = None;
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<Section> = None;

    let mut heading_level: Option<HeadingLevel> = None;
    let mut heading_buf = String::new();
    let mut heading_line = 1;

    let mut code_lang: Option<String> = None;
    let mut code_buf = String::new();
    let mut code_line = 1;

    let parser = Parser::new_ext(text, Options::ENABLE_TABLES).into_offset_iter();

    for (event, range) in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                heading_level = Some(level);
                heading_buf.clear();
                heading_line = line_index.line_of(range.start);
            }
            Event::End(TagEnd::Heading(level)) => {
                heading_level = None;
                match level {
                    HeadingLevel::H1 if title.is_none() => {
                        title = Some(heading_buf.trim().to_string());
                    }
                    HeadingLevel::H2 => {
                        if let Some(section) = current.take() {
                            sections.push(section);
                        }
                        current = Some(Section::new(heading_buf.trim().to_string(), heading_line));
                    }
                    // H3+ (and later H1s) are body structure, not section
                    // boundaries; their text was already routed to the body
                    _ => {
                        append_body(&mut current, &heading_buf);
                        append_body(&mut current, "\n");
                    }
                }
                heading_buf.clear();
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .unwrap_or("")
                        .to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                code_lang = Some(lang);
                code_buf.clear();
                code_line = line_index.line_of(range.start);
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(lang) = code_lang.take() {
                    let snippet = SnippetBlock::new(lang, code_buf.clone(), code_line);
                    ensure_section(&mut current).snippets.push(snippet);
                }
                code_buf.clear();
            }
            Event::Text(text) => {
                if code_lang.is_some() {
                    code_buf.push_str(&text);
                } else if heading_level.is_some() {
                    heading_buf.push_str(&text);
                } else {
                    append_body(&mut current, &text);
                }
            }
            Event::Code(code) => {
                // Inline code keeps its backticks in headings and bodies
                let rendered = format!("`{}`", code);
                if heading_level.is_some() {
                    heading_buf.push_str(&rendered);
                } else {
                    append_body(&mut current, &rendered);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if heading_level.is_some() {
                    heading_buf.push(' ');
                } else {
                    append_body(&mut current, "\n");
                }
            }
            Event::End(TagEnd::Paragraph) | Event::End(TagEnd::Item) => {
                append_body(&mut current, "\n");
            }
            _ => {}
        }
    }

    if let Some(section) = current.take() {
        sections.push(section);
    }

    let titled_by_heading = title.is_some();
    let mut doc = Document::new(
        path,
        title.unwrap_or(fallback_title),
        titled_by_heading,
    );
    doc.sections = sections;
    doc
}

/// Append body text, creating the implicit preamble section on demand
fn append_body(current: &mut Option<Section>, text: &str) {
    if text.trim().is_empty() && current.is_none() {
        // Don't materialize a preamble for whitespace
        return;
    }
    ensure_section(current).body.push_str(text);
}

fn ensure_section(current: &mut Option<Section>) -> &mut Section {
    current.get_or_insert_with(|| Section::new(String::new(), 1))
}

/// Byte-offset to 1-based line number lookup
struct LineIndex {
    newline_offsets: Vec<usize>,
}

impl LineIndex {
    fn new(text: &str) -> Self {
        let newline_offsets = text
            .bytes()
            .enumerate()
            .filter(|(_, b)| *b == b'\n')
            .map(|(i, _)| i)
            .collect();
        Self { newline_offsets }
    }

    fn line_of(&self, offset: usize) -> usize {
        self.newline_offsets.partition_point(|&n| n < offset) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studymark_core::model::SectionKind;

    const SAMPLE: &str = "\
# Closures

A closure is a function plus its lexical environment.

## Concept Introduction

Functions remember where they were born.

## Deep Dive

```js
function outer() {
  let hidden = 1;
  return () => hidden;
}
console.log(outer()()); // 1
```

### A nested sub-heading

More prose.

## Key Takeaways

- Scope is lexical.
";

    #[test]
    fn test_title_from_h1() {
        let doc = parse_document(PathBuf::from("closures.md"), SAMPLE);
        assert_eq!(doc.title, "Closures");
        assert!(doc.titled_by_heading);
    }

    #[test]
    fn test_sections_from_h2() {
        let doc = parse_document(PathBuf::from("closures.md"), SAMPLE);
        // Preamble plus three H2 sections
        assert_eq!(doc.sections.len(), 4);
        assert_eq!(
            doc.canonical_kinds(),
            vec![
                SectionKind::ConceptIntroduction,
                SectionKind::DeepDive,
                SectionKind::KeyTakeaways,
            ]
        );
    }

    #[test]
    fn test_heading_lines() {
        let doc = parse_document(PathBuf::from("closures.md"), SAMPLE);
        let deep_dive = doc
            .sections
            .iter()
            .find(|s| s.kind == Some(SectionKind::DeepDive))
            .unwrap();
        assert_eq!(deep_dive.line, 9);
    }

    #[test]
    fn test_snippet_extraction() {
        let doc = parse_document(PathBuf::from("closures.md"), SAMPLE);
        let snippets: Vec<_> = doc.snippets().collect();
        assert_eq!(snippets.len(), 1);
        assert_eq!(snippets[0].language, "js");
        assert_eq!(snippets[0].line, 11);
        assert!(snippets[0].source.contains("outer()()"));
        assert_eq!(snippets[0].expected_output, Some(vec!["1".to_string()]));
    }

    #[test]
    fn test_h3_does_not_open_section() {
        let doc = parse_document(PathBuf::from("closures.md"), SAMPLE);
        assert!(doc
            .sections
            .iter()
            .all(|s| s.heading != "A nested sub-heading"));
    }

    #[test]
    fn test_missing_h1_falls_back_to_stem() {
        let doc = parse_document(PathBuf::from("event-loop.md"), "## Deep Dive\n\nprose\n");
        assert_eq!(doc.title, "event-loop");
        assert!(!doc.titled_by_heading);
    }

    #[test]
    fn test_preamble_snippet_is_kept() {
        let text = "# T\n\n```js\nconsole.log(1); // 1\n```\n\n## Deep Dive\n\nprose\n";
        let doc = parse_document(PathBuf::from("t.md"), text);
        assert_eq!(doc.snippets().count(), 1);
        // The preamble section is not canonical
        assert_eq!(doc.sections[0].kind, None);
    }

    #[test]
    fn test_inline_code_in_heading() {
        let text = "# T\n\n## Deep Dive\n\nUse `typeof` carefully.\n";
        let doc = parse_document(PathBuf::from("t.md"), text);
        let section = doc.sections.iter().find(|s| s.heading == "Deep Dive").unwrap();
        assert!(section.body.contains("`typeof`"));
    }
}
