//! Integration tests for JSON ingest.

use std::fs::{self, File};

use specgen::render::to_json;
use specgen::{load_file, load_reader, load_str, Error, JsonFormat, Specgen};
use tempfile::tempdir;

const FIXTURE: &str = "tests/fixtures/language.json";

#[test]
fn test_path_reader_and_string_agree() {
    let from_path = load_file(FIXTURE).unwrap();
    let from_reader = load_reader(File::open(FIXTURE).unwrap()).unwrap();
    let from_str = load_str(&fs::read_to_string(FIXTURE).unwrap()).unwrap();

    assert_eq!(from_path, from_reader);
    assert_eq!(from_path, from_str);
    assert_eq!(from_path.section_count(), 3);
    assert_eq!(from_path.head.status(), Some("Draft"));
}

#[test]
fn test_json_dump_reloads() {
    let doc = load_file(FIXTURE).unwrap();
    let dir = tempdir().unwrap();

    for format in [JsonFormat::Pretty, JsonFormat::Compact] {
        let path = dir.path().join("dump.json");
        fs::write(&path, to_json(&doc, format).unwrap()).unwrap();
        assert_eq!(load_file(&path).unwrap(), doc);
    }
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let err = load_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_malformed_json() {
    let err = load_str("{\"head\": ").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert!(err.to_string().starts_with("JSON error:"));
}

#[test]
fn test_invalid_tree_rejected_by_builder() {
    let text = r#"{
        "body": [{"title": "Only", "children": [
            {"kind": "grammar", "rules": [{"kind": "syntax", "name": ""}]}
        ]}]
    }"#;
    let err = Specgen::new().load_str(text).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid document: grammar rule without a name in section 1"
    );
}
