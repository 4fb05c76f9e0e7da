use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// An illustrative code example embedded in prose
///
/// Snippets optionally declare their expected output through comments, the
/// way the corpus annotates them:
///
/// ```text
/// console.log(1 + "2"); // "12"
/// ```
///
/// or as a trailing comment-only block:
///
/// ```text
/// console.log(a);
/// console.log(b);
/// // Output:
/// // 1
/// // 2
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnippetBlock {
    /// Language tag from the fence ("js", "javascript", "html", ...)
    pub language: String,

    /// Source code inside the fence
    pub source: String,

    /// Declared expected output, one entry per expected line
    pub expected_output: Option<Vec<String>>,

    /// 1-based line number of the opening fence
    pub line: usize,
}

impl SnippetBlock {
    /// Create a snippet, extracting any declared expected output
    pub fn new(language: String, source: String, line: usize) -> Self {
        let expected_output = extract_expected_output(&source);
        Self {
            language,
            source,
            expected_output,
            line,
        }
    }

    /// Check if this snippet is JavaScript
    pub fn is_javascript(&self) -> bool {
        matches!(self.language.as_str(), "js" | "javascript")
    }

    /// Check if this snippet declares an expected output
    pub fn has_expected_output(&self) -> bool {
        self.expected_output.is_some()
    }

    /// Stable identity for this snippet: hex SHA-256 of its source
    ///
    /// Used to reference snippets in reports and skip lists independently
    /// of their position in the document.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.source.as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// Extract declared expected output from snippet source
///
/// Two forms contribute, in document order:
/// - end-of-line `//` comments on `console.log` lines
/// - a trailing block of comment-only lines
///
/// `Output:` and `=>` marker prefixes are stripped. Returns None when the
/// snippet declares nothing.
pub fn extract_expected_output(source: &str) -> Option<Vec<String>> {
    let lines: Vec<&str> = source.lines().collect();

    // Locate the trailing comment-only block (blank lines tolerated)
    let mut trailing_start = lines.len();
    while trailing_start > 0 {
        let trimmed = lines[trailing_start - 1].trim();
        if trimmed.starts_with("//") || trimmed.is_empty() {
            trailing_start -= 1;
        } else {
            break;
        }
    }

    let mut expected = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if i >= trailing_start {
            if let Some(comment) = line.trim().strip_prefix("//") {
                if let Some(text) = strip_output_marker(comment) {
                    expected.push(text);
                }
            }
            continue;
        }

        if !line.contains("console.log") {
            continue;
        }
        // The comment must come after the paren closing the call, so that
        // `//` inside a string literal (e.g. a URL) is not mistaken for
        // one. The comment itself may contain parens, so the call's close
        // is found by matching depth, not by scanning from the line end.
        let Some(close) = closing_paren_of_call(line) else {
            continue;
        };
        if let Some(offset) = line[close..].find("//") {
            let comment = &line[close + offset + 2..];
            if let Some(text) = strip_output_marker(comment) {
                expected.push(text);
            }
        }
    }

    if expected.is_empty() {
        None
    } else {
        Some(expected)
    }
}

/// Byte offset of the paren that closes the `console.log(...)` call
///
/// Walks from the call, tracking paren depth and string literals (with
/// escapes), so parens inside logged strings or inside a later comment
/// do not confuse the match.
fn closing_paren_of_call(line: &str) -> Option<usize> {
    let start = line.find("console.log")?;
    let mut depth = 0usize;
    let mut in_string: Option<char> = None;
    let mut escaped = false;

    for (i, c) in line[start..].char_indices() {
        if let Some(quote) = in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == quote {
                in_string = None;
            }
            continue;
        }
        match c {
            '"' | '\'' | '`' => in_string = Some(c),
            '(' => depth += 1,
            ')' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Trim a comment and strip a leading `Output:` / `=>` marker
///
/// Returns None for comments that carry no text (a bare `//` or a lone
/// `// Output:` header line).
fn strip_output_marker(comment: &str) -> Option<String> {
    let mut text = comment.trim();
    for marker in ["Output:", "output:", "=>"] {
        if let Some(rest) = text.strip_prefix(marker) {
            text = rest.trim();
            break;
        }
    }
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
