//! Snippet output checking
//!
//! Compares a snippet's declared expected output against what the engine
//! actually prints. Comparison is line-wise after normalization: the
//! corpus declares string results with their quotes (`// "12"`), but
//! `console.log` prints them bare, so one matching pair of surrounding
//! quotes is stripped from each side before comparing.

use studymark_core::errors::Result;
use studymark_core::model::SnippetBlock;

use crate::nondeterminism::nondeterminism_marker;
use crate::runner::SnippetRunner;

/// The checker's judgement for one snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Declared and actual output agree
    Match,
    /// Declared and actual output differ
    Mismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },
    /// Not judged: non-deterministic or excluded
    Skipped { reason: String },
    /// The snippet threw or the engine exited nonzero
    EngineError { message: String },
}

/// Check one snippet against its declared expected output
///
/// Non-deterministic snippets are skipped without touching the engine.
/// The caller is expected to pass only JavaScript snippets that declare
/// an expected output.
///
/// # Errors
/// Propagates `EngineSpawn` when the engine process cannot start; the
/// pipeline downgrades that to skipped verdicts for the remaining
/// snippets rather than aborting the run.
pub fn check_snippet(runner: &dyn SnippetRunner, snippet: &SnippetBlock) -> Result<Verdict> {
    if let Some(marker) = nondeterminism_marker(&snippet.source) {
        return Ok(Verdict::Skipped {
            reason: format!("non-deterministic: uses {}", marker),
        });
    }

    let expected = match &snippet.expected_output {
        Some(lines) => lines,
        None => {
            return Ok(Verdict::Skipped {
                reason: "no expected output declared".to_string(),
            })
        }
    };

    let output = runner.run(&snippet.source)?;
    if !output.success {
        let message = output
            .stderr
            .lines()
            .find(|l| !l.trim().is_empty())
            .unwrap_or("engine exited nonzero")
            .to_string();
        return Ok(Verdict::EngineError { message });
    }

    let actual: Vec<String> = output
        .stdout
        .lines()
        .map(|l| l.to_string())
        .collect();

    let expected_normalized: Vec<String> =
        expected.iter().map(|l| normalize_line(l)).collect();
    let actual_normalized: Vec<String> =
        actual.iter().map(|l| normalize_line(l)).collect();

    if expected_normalized == actual_normalized {
        Ok(Verdict::Match)
    } else {
        Ok(Verdict::Mismatch {
            expected: expected.clone(),
            actual,
        })
    }
}

/// Trim a line and strip one matching pair of surrounding quotes
fn normalize_line(line: &str) -> String {
    let trimmed = line.trim();
    for quote in ['"', '\''] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return trimmed[1..trimmed.len() - 1].to_string();
        }
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::FixedOutputRunner;

    fn snippet(source: &str) -> SnippetBlock {
        SnippetBlock::new("js".to_string(), source.to_string(), 1)
    }

    #[test]
    fn test_quoted_string_matches_bare_print() {
        // Declared `"12"`, engine prints `12`
        let snippet = snippet("console.log(1 + \"2\"); // \"12\"");
        let runner = FixedOutputRunner::printing(&["12"]);

        let verdict = check_snippet(&runner, &snippet).unwrap();
        assert_eq!(verdict, Verdict::Match);
    }

    #[test]
    fn test_mismatch_carries_both_sides() {
        let snippet = snippet("console.log(1 + 2); // 4");
        let runner = FixedOutputRunner::printing(&["3"]);

        let verdict = check_snippet(&runner, &snippet).unwrap();
        match verdict {
            Verdict::Mismatch { expected, actual } => {
                assert_eq!(expected, vec!["4".to_string()]);
                assert_eq!(actual, vec!["3".to_string()]);
            }
            other => panic!("expected mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_timer_snippet_skipped_without_running() {
        let snippet = snippet(
            "setTimeout(() => console.log('a'), 0);\n\
             Promise.resolve().then(() => console.log('b'));\n\
             // a\n// b",
        );
        // A runner that would mismatch if it were consulted
        let runner = FixedOutputRunner::printing(&["wrong"]);

        let verdict = check_snippet(&runner, &snippet).unwrap();
        match verdict {
            Verdict::Skipped { reason } => assert!(reason.contains("setTimeout")),
            other => panic!("expected skipped, got {:?}", other),
        }
    }

    #[test]
    fn test_throwing_snippet_is_engine_error() {
        let snippet = snippet("console.log(null.f());\n// TypeError");
        let runner = FixedOutputRunner::failing();

        let verdict = check_snippet(&runner, &snippet).unwrap();
        assert!(matches!(verdict, Verdict::EngineError { .. }));
    }

    #[test]
    fn test_no_expected_output_is_skipped() {
        let snippet = snippet("const x = 1;");
        let runner = FixedOutputRunner::printing(&[]);

        let verdict = check_snippet(&runner, &snippet).unwrap();
        assert!(matches!(verdict, Verdict::Skipped { .. }));
    }

    #[test]
    fn test_verdict_stable_across_repeated_runs() {
        let snippet = snippet("console.log(2 ** 10); // 1024");
        let runner = FixedOutputRunner::printing(&["1024"]);

        let first = check_snippet(&runner, &snippet).unwrap();
        let second = check_snippet(&runner, &snippet).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, Verdict::Match);
    }

    #[test]
    fn test_normalize_line() {
        assert_eq!(normalize_line("  12  "), "12");
        assert_eq!(normalize_line("\"12\""), "12");
        assert_eq!(normalize_line("'object'"), "object");
        // Mismatched quotes are left alone
        assert_eq!(normalize_line("\"12'"), "\"12'");
    }
}
