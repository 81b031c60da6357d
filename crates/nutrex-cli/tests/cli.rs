//! End-to-end CLI tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn write_draft(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write draft");
    file
}

const VALID_DRAFT: &str = r#"{
    "input_text": "Vitamin D deficiency causes rickets (3).",
    "extracted_object": {
        "id": "DOC:1",
        "nutrient_to_disease_relationships": [
            {
                "nutrient": "vitamin D",
                "relationship": "DECREASES RISK OF",
                "disease": "rickets",
                "references": ["3"]
            }
        ]
    }
}"#;

#[test]
fn validate_accepts_valid_draft() {
    let file = write_draft(VALID_DRAFT);
    Command::cargo_bin("nutrex")
        .unwrap()
        .args(["validate", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid: document DOC:1"));
}

#[test]
fn validate_rejects_unknown_field() {
    let file = write_draft(r#"{"input_text": "x", "completion": "y"}"#);
    Command::cargo_bin("nutrex")
        .unwrap()
        .args(["validate", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field"));
}

#[test]
fn validate_rejects_malformed_span() {
    let file = write_draft(
        r#"{"named_entities": [{"label": "vitamin D", "original_spans": ["10-25"]}]}"#,
    );
    Command::cargo_bin("nutrex")
        .unwrap()
        .args(["validate", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed span"));
}

#[test]
fn validate_rejects_document_without_id() {
    let file = write_draft(r#"{"extracted_object": {"label": "no id"}}"#);
    Command::cargo_bin("nutrex")
        .unwrap()
        .args(["validate", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required field"));
}

#[test]
fn validate_reads_stdin() {
    Command::cargo_bin("nutrex")
        .unwrap()
        .args(["validate", "-"])
        .write_stdin(VALID_DRAFT)
        .assert()
        .success();
}

#[test]
fn inspect_prints_triples() {
    let file = write_draft(VALID_DRAFT);
    Command::cargo_bin("nutrex")
        .unwrap()
        .args(["inspect", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("vitamin D DECREASES RISK OF rickets"));
}

#[test]
fn inspect_json_format() {
    let file = write_draft(VALID_DRAFT);
    Command::cargo_bin("nutrex")
        .unwrap()
        .args(["inspect", file.path().to_str().unwrap(), "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"predicate\": \"DECREASES RISK OF\""));
}

#[test]
fn validate_rejects_invalid_json() {
    let file = write_draft("not json at all");
    Command::cargo_bin("nutrex")
        .unwrap()
        .args(["validate", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}
