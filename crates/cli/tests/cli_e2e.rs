//! End-to-end tests running the built `docsearch` binary against index
//! files written to a temp directory.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const INDEX: &str = r#"var documenterSearchIndex = {"docs":
[{"location":"functions/#SBML.readSBML","page":"Reference","title":"SBML.readSBML","text":"Read the model from a file.","category":"method"},
{"location":"functions/","page":"Reference","title":"Reference","text":"","category":"page"}]
};
"#;

fn docsearch(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_docsearch"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("Failed to run docsearch binary")
}

fn write_index(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("search_index.js");
    std::fs::write(&path, contents).expect("Failed to write index fixture");
    path
}

#[test]
fn validate_accepts_a_well_formed_index() {
    let dir = TempDir::new().unwrap();
    let path = write_index(&dir, INDEX);

    let output = docsearch(&["validate", path.to_str().unwrap()], dir.path());
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 records"), "{stdout}");
}

#[test]
fn validate_rejects_a_document_without_docs() {
    let dir = TempDir::new().unwrap();
    let path = write_index(&dir, "{}");

    let output = docsearch(&["validate", path.to_str().unwrap()], dir.path());
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("malformed search index"), "{stderr}");
}

#[test]
fn query_emits_matching_records_as_json() {
    let dir = TempDir::new().unwrap();
    write_index(&dir, INDEX);

    let output = docsearch(&["query", "readSBML", "--json"], dir.path());
    assert!(output.status.success());

    let hits: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("query --json should emit valid JSON");
    assert_eq!(hits.as_array().unwrap().len(), 1);
    assert_eq!(hits[0]["title"], "SBML.readSBML");
    assert_eq!(hits[0]["category"], "method");
}

#[test]
fn query_with_only_punctuation_terms_is_an_error() {
    let dir = TempDir::new().unwrap();
    write_index(&dir, INDEX);

    let output = docsearch(&["query", "--", "--,--"], dir.path());
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no searchable terms"), "{stderr}");
}

#[test]
fn query_with_no_hits_reports_no_matches_and_exits_zero() {
    let dir = TempDir::new().unwrap();
    write_index(&dir, INDEX);

    let output = docsearch(&["query", "nonexistent"], dir.path());
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No matches."), "{stdout}");
}

#[test]
fn stats_summarizes_categories() {
    let dir = TempDir::new().unwrap();
    let path = write_index(&dir, INDEX);

    let output = docsearch(&["stats", path.to_str().unwrap(), "--json"], dir.path());
    assert!(output.status.success());

    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["records"], 2);
    assert_eq!(stats["pages"], 1);
    assert_eq!(stats["categories"]["method"], 1);
}
