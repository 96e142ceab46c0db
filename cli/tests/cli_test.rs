use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("tests")
        .join("fixtures")
        .join("language.json")
}

#[test]
fn test_usage_without_arguments() {
    cargo_bin_cmd!("specgen")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: specgen <input path> <output path>"));
}

#[test]
fn test_usage_with_single_path() {
    cargo_bin_cmd!("specgen")
        .arg(fixture_path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_generate_markdown() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("language.md");

    cargo_bin_cmd!("specgen")
        .arg(fixture_path())
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Checking specification...\nChecked specification...\nWriting specification...",
        ));

    let markdown = fs::read_to_string(&output).unwrap();
    assert!(markdown.starts_with("# Calculator Language\n"));
    assert!(markdown.contains("## Table of Contents"));
}

#[test]
fn test_generate_package() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("language.xml");

    cargo_bin_cmd!("specgen")
        .arg(fixture_path())
        .arg(&output)
        .assert()
        .success();

    let package = fs::read_to_string(&output).unwrap();
    assert!(package.starts_with("<?xml"));
    assert!(package.contains("pkg:name=\"/word/document.xml\""));
}

#[test]
fn test_generate_reports_findings() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.json");
    let output = dir.path().join("broken.md");
    fs::write(
        &input,
        r#"{"body": [{"title": "G", "children": [{"kind": "grammar", "rules": [
            {"kind": "syntax", "name": "start", "productions": [[{"kind": "nonTerminal", "name": "gone"}]]}
        ]}]}]}"#,
    )
    .unwrap();

    cargo_bin_cmd!("specgen")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Syntax reference to missing syntax 'gone'.",
        ));
    assert!(output.exists());
}

#[test]
fn test_check_clean_fixture() {
    cargo_bin_cmd!("specgen")
        .arg("check")
        .arg(fixture_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No grammar issues found"));
}

#[test]
fn test_markdown_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.md");

    cargo_bin_cmd!("specgen")
        .arg("markdown")
        .arg(fixture_path())
        .arg("-o")
        .arg(&output)
        .arg("--no-title")
        .arg("--no-contents")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to"));

    let markdown = fs::read_to_string(&output).unwrap();
    assert!(markdown.starts_with("# <a name=\"1\"/>1 Introduction\n"));
}

#[test]
fn test_package_copyright_flag() {
    cargo_bin_cmd!("specgen")
        .arg("package")
        .arg(fixture_path())
        .arg("--copyright")
        .arg("Example Corp")
        .assert()
        .success()
        .stdout(predicate::str::contains("Copyright \u{a9} Example Corp "));
}

#[test]
fn test_json_compact() {
    cargo_bin_cmd!("specgen")
        .arg("json")
        .arg(fixture_path())
        .arg("--compact")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\"head\":{\"title\":\"Calculator Language\""));
}

#[test]
fn test_info_shows_statistics() {
    cargo_bin_cmd!("specgen")
        .arg("info")
        .arg(fixture_path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Calculator Language")
                .and(predicate::str::contains("Grammar rules"))
                .and(predicate::str::contains("Language Team")),
        );
}

#[test]
fn test_version() {
    cargo_bin_cmd!("specgen")
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_input_fails() {
    cargo_bin_cmd!("specgen")
        .arg("check")
        .arg("does-not-exist.json")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("I/O error"));
}
