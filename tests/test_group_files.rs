//! Tests for loading tables and group records from JSON files

mod common;

use cayleyrs::group_files::{
    find_record, load_group_file, parse_group_document, GroupRecord, LoadError,
};
use cayleyrs::validate::is_valid_group;
use common::*;
use std::fs;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_bare_table_named_after_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "z3.json", Z3_JSON);

    let records = load_group_file(&path).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "z3");
    assert_eq!(records[0].table().unwrap(), &z3());
}

#[test]
fn test_load_group_record() {
    let json = format!(
        r#"{{"name": "Z3", "description": "cyclic", "_id": "abc123",
            "structure": {{"type": "multiplication_table", "table": {}}}}}"#,
        Z3_JSON
    );
    let records = parse_group_document(&json, "ignored").unwrap();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.name, "Z3");
    assert_eq!(record.description.as_deref(), Some("cyclic"));
    assert_eq!(record.id.as_deref(), Some("abc123"));
    assert_eq!(
        record.structure.as_ref().unwrap().kind.as_deref(),
        Some("multiplication_table")
    );
    assert!(is_valid_group(record.table().unwrap()));
}

#[test]
fn test_load_record_listing() {
    let json = format!(
        r#"[
            {{"name": "Empty", "description": "", "structure": {{}}}},
            {{"name": "Cyclic", "description": "order 3", "structure": {{"type": "cyclic", "order": 3}}}},
            {{"name": "Z3", "description": null, "structure": {{"table": {}}}}}
        ]"#,
        Z3_JSON
    );
    let records = parse_group_document(&json, "ignored").unwrap();
    assert_eq!(records.len(), 3);
    assert!(records[0].table().is_none());
    assert!(records[1].table().is_none());
    assert!(records[2].table().is_some());

    // First record with a table is chosen by default
    assert_eq!(find_record(&records, None).unwrap().name, "Z3");
    assert_eq!(find_record(&records, Some("Z3")).unwrap().name, "Z3");
    assert!(matches!(
        find_record(&records, Some("Cyclic")),
        Err(LoadError::NoTable(name)) if name == "Cyclic"
    ));
    assert!(matches!(
        find_record(&records, Some("S3")),
        Err(LoadError::UnknownGroup(name)) if name == "S3"
    ));
}

#[test]
fn test_load_bare_structure() {
    let json = format!(r#"{{"type": "multiplication_table", "table": {}}}"#, Z3_JSON);
    let records = parse_group_document(&json, "from_structure").unwrap();
    assert_eq!(records[0].name, "from_structure");
    assert_eq!(records[0].table().unwrap(), &z3());
}

#[test]
fn test_empty_listing_has_no_tables() {
    let records = parse_group_document("[]", "ignored").unwrap();
    assert!(records.is_empty());
    assert!(matches!(find_record(&records, None), Err(LoadError::NoTables)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_group_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_invalid_json_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "broken.json", r#"{"e": {"e": "#);
    let err = load_group_file(&path).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_table_with_scalar_row_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "bad.json", r#"{"e": {"e": "e", "a": "a"}, "a": "oops"}"#);
    assert!(matches!(
        load_group_file(&path),
        Err(LoadError::Parse { .. })
    ));
}

#[test]
fn test_non_string_product_is_parse_error() {
    assert!(parse_group_document(r#"{"e": {"e": 1}}"#, "bad").is_err());
    assert!(parse_group_document(r#""just a string""#, "bad").is_err());
}

#[test]
fn test_record_round_trips_through_serde() {
    let record = GroupRecord::from_table("S3", s3());
    let json = serde_json::to_string(&record).unwrap();
    let parsed = parse_group_document(&json, "ignored").unwrap();
    assert_eq!(parsed, vec![record]);
}
