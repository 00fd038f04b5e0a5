//! Integration tests for the namescreen CLI binary.
//!
//! Verifies exit-code behavior (0 for any completed analysis, non-zero for
//! input errors), the JSON output schema, and report saving.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn namescreen_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_namescreen"))
}

fn write_article(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("article.txt");
    fs::write(&path, content).expect("write article");
    path
}

#[test]
fn completed_match_exits_zero() {
    let dir = TempDir::new().unwrap();
    let article = write_article(
        &dir,
        "Local businessman Bill Johnson was arraigned on fraud charges Tuesday.",
    );

    let output = namescreen_cmd()
        .args(["--name", "William Johnson", "--filepath"])
        .arg(&article)
        .output()
        .expect("run binary");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("MATCH FOUND"));
}

#[test]
fn completed_no_match_also_exits_zero() {
    let dir = TempDir::new().unwrap();
    let article = write_article(
        &dir,
        "Furniture designer Timothy Oulton opened a showroom in Milan.",
    );

    let output = namescreen_cmd()
        .args(["--name", "Maria Garcia", "--filepath"])
        .arg(&article)
        .output()
        .expect("run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("NO MATCH"));
}

#[test]
fn json_output_matches_the_wire_schema() {
    let dir = TempDir::new().unwrap();
    let article = write_article(
        &dir,
        "Local businessman Bill Johnson was arraigned on fraud charges Tuesday.",
    );

    let output = namescreen_cmd()
        .args(["--name", "William Johnson", "--output", "json", "--filepath"])
        .arg(&article)
        .output()
        .expect("run binary");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");

    assert_eq!(value["target_name"], "William Johnson");
    assert_eq!(value["match_found"], true);
    assert_eq!(value["confidence_tier"], "HIGH");
    assert_eq!(value["method"], "fuzzy_high_confidence");
    assert_eq!(value["matched_article_name"], "Bill Johnson");
    assert!(value["explanation"].as_str().is_some_and(|s| !s.is_empty()));
    assert!(value["timestamp"].is_string());
}

#[test]
fn missing_article_file_is_an_input_error() {
    let output = namescreen_cmd()
        .args(["--name", "William Johnson", "--filepath", "/no/such/file.txt"])
        .output()
        .expect("run binary");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error"));
}

#[test]
fn empty_article_file_is_an_input_error() {
    let dir = TempDir::new().unwrap();
    let article = write_article(&dir, "   \n  ");

    let output = namescreen_cmd()
        .args(["--name", "William Johnson", "--filepath"])
        .arg(&article)
        .output()
        .expect("run binary");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn empty_name_is_an_input_error() {
    let dir = TempDir::new().unwrap();
    let article = write_article(&dir, "Some article text about Bill Johnson.");

    let output = namescreen_cmd()
        .args(["--name", "   ", "--filepath"])
        .arg(&article)
        .output()
        .expect("run binary");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn save_report_writes_the_rendered_output() {
    let dir = TempDir::new().unwrap();
    let article = write_article(
        &dir,
        "Local businessman Bill Johnson was arraigned on fraud charges Tuesday.",
    );
    let report = dir.path().join("report");

    let output = namescreen_cmd()
        .args(["--name", "William Johnson", "--output", "json", "--filepath"])
        .arg(&article)
        .arg("--save-report")
        .arg(&report)
        .output()
        .expect("run binary");

    assert!(output.status.success());
    let saved = fs::read_to_string(dir.path().join("report.json")).expect("saved report");
    let value: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(value["match_found"], true);
}
