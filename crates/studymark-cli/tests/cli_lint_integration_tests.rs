//! CLI lint integration tests
//!
//! These tests verify that the CLI commands correctly delegate to the
//! engine pipeline and map report state to process exit codes.

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const COMPLETE_DOC: &str = "\
# Closures

## Concept Introduction

A closure captures its lexical scope.

## Deep Dive

Details.

## Mental Model

A backpack of variables.

## Common Pitfalls

Loop variables.

## Best Practices

Keep captures small.

## Practice Problems

Write a counter.

## Real-World Application

Event handlers.

## Key Takeaways

Scope travels with the function.
";

fn write_doc(root: &Path, name: &str, content: &str) {
    fs::write(root.join(name), content).unwrap();
}

fn studymark() -> Command {
    Command::new(env!("CARGO_BIN_EXE_studymark"))
}

#[test]
fn test_lint_clean_corpus_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    write_doc(temp_dir.path(), "closures.md", COMPLETE_DOC);

    let output = studymark()
        .args(["lint", temp_dir.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.contains("1 document(s) checked"));
    assert!(stdout.contains("0 error(s), 0 warning(s)"));
}

#[test]
fn test_lint_incomplete_doc_warns_but_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    write_doc(
        temp_dir.path(),
        "short.md",
        "# Short\n\n## Deep Dive\n\nprose\n",
    );

    let output = studymark()
        .args(["lint", temp_dir.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.contains("W_MISSING_SECTION"));
}

#[test]
fn test_lint_strict_promotes_warnings_and_fails() {
    let temp_dir = TempDir::new().unwrap();
    write_doc(
        temp_dir.path(),
        "short.md",
        "# Short\n\n## Deep Dive\n\nprose\n",
    );

    let output = studymark()
        .args(["lint", temp_dir.path().to_str().unwrap(), "--strict"])
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(1), "stdout: {}", stdout);
    assert!(stdout.contains("error[W_MISSING_SECTION]"));
}

#[test]
fn test_lint_json_format_emits_report() {
    let temp_dir = TempDir::new().unwrap();
    write_doc(temp_dir.path(), "closures.md", COMPLETE_DOC);

    let output = studymark()
        .args([
            "lint",
            temp_dir.path().to_str().unwrap(),
            "--format",
            "json",
        ])
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.contains("\"doc_count\": 1"));
    assert!(stdout.contains("\"run_id\""));
}

#[test]
fn test_lint_verbose_logs_to_stderr() {
    let temp_dir = TempDir::new().unwrap();
    write_doc(temp_dir.path(), "closures.md", COMPLETE_DOC);

    let output = studymark()
        .args(["lint", temp_dir.path().to_str().unwrap(), "--verbose"])
        .output()
        .expect("Failed to execute CLI");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr);
    // The pipeline's operation events reach stderr in the debug format
    assert!(stderr.contains("lint_run"));
    // Report output stays on stdout
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 document(s) checked"));
}

#[test]
fn test_lint_missing_root_is_fatal() {
    let output = studymark()
        .args(["lint", "/nonexistent/corpus"])
        .output()
        .expect("Failed to execute CLI");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(2), "stderr: {}", stderr);
    assert!(stderr.contains("Error:"));
}

#[test]
fn test_toc_prints_generated_index() {
    let temp_dir = TempDir::new().unwrap();
    write_doc(temp_dir.path(), "closures.md", COMPLETE_DOC);

    let output = studymark()
        .args(["toc", temp_dir.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.contains("# Table of Contents"));
    assert!(stdout.contains("- [Closures](closures.md)"));
}

#[test]
fn test_toc_write_then_check_passes() {
    let temp_dir = TempDir::new().unwrap();
    write_doc(temp_dir.path(), "closures.md", COMPLETE_DOC);

    let write = studymark()
        .args(["toc", temp_dir.path().to_str().unwrap(), "--write"])
        .output()
        .expect("Failed to execute CLI");
    assert_eq!(write.status.code(), Some(0));
    assert!(temp_dir.path().join("README.md").exists());

    let check = studymark()
        .args(["toc", temp_dir.path().to_str().unwrap(), "--check"])
        .output()
        .expect("Failed to execute CLI");
    assert_eq!(check.status.code(), Some(0));
}

#[test]
fn test_toc_custom_index_not_treated_as_document() {
    let temp_dir = TempDir::new().unwrap();
    write_doc(temp_dir.path(), "closures.md", COMPLETE_DOC);

    let write = studymark()
        .args([
            "toc",
            temp_dir.path().to_str().unwrap(),
            "--write",
            "--index",
            "TOC.md",
        ])
        .output()
        .expect("Failed to execute CLI");
    assert_eq!(write.status.code(), Some(0));
    assert!(temp_dir.path().join("TOC.md").exists());

    // The freshly written index must not show up as a corpus document,
    // or this check would report itself stale
    let check = studymark()
        .args([
            "toc",
            temp_dir.path().to_str().unwrap(),
            "--check",
            "--index",
            "TOC.md",
        ])
        .output()
        .expect("Failed to execute CLI");
    let stdout = String::from_utf8_lossy(&check.stdout);
    assert_eq!(check.status.code(), Some(0), "stdout: {}", stdout);
}

#[test]
fn test_toc_check_detects_stale_index() {
    let temp_dir = TempDir::new().unwrap();
    write_doc(temp_dir.path(), "closures.md", COMPLETE_DOC);
    write_doc(
        temp_dir.path(),
        "README.md",
        "# Table of Contents\n\n## Contents\n\n- [Old Title](gone.md)\n",
    );

    let output = studymark()
        .args(["toc", temp_dir.path().to_str().unwrap(), "--check"])
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(1), "stdout: {}", stdout);
    assert!(stdout.contains("E_STALE_INDEX"));
}

#[test]
fn test_toc_check_missing_index_fails() {
    let temp_dir = TempDir::new().unwrap();
    write_doc(temp_dir.path(), "closures.md", COMPLETE_DOC);

    let output = studymark()
        .args(["toc", temp_dir.path().to_str().unwrap(), "--check"])
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(1), "stdout: {}", stdout);
    assert!(stdout.contains("index file is missing"));
}
