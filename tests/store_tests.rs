mod common;
use common::{at, rec};

use std::fs;
use tstamp::core::add::AddLogic;
use tstamp::errors::AppError;
use tstamp::store::RecordStore;

fn temp_store() -> (tempfile::TempDir, RecordStore) {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = RecordStore::new(dir.path().join("nested").join("timestamps.csv"));
    (dir, store)
}

#[test]
fn test_missing_store_loads_empty() {
    let (_dir, store) = temp_store();
    assert!(!store.exists());
    assert!(store.load_all().expect("load").is_empty());
}

#[test]
fn test_add_to_empty_store_creates_one_default_record() {
    let (_dir, store) = temp_store();

    let added = AddLogic::apply(&store, "default", at(9, 30, 0)).expect("add");
    let records = store.load_all().expect("load");

    assert_eq!(records, vec![added]);
    assert_eq!(records[0].name, "default");
}

#[test]
fn test_append_writes_timestamp_then_name() {
    let (_dir, store) = temp_store();
    store.append(&rec("a", at(10, 0, 0))).expect("append");
    store.append(&rec("b", at(10, 0, 5))).expect("append");

    let content = fs::read_to_string(store.path()).expect("read");
    assert_eq!(content, "2024-01-01 10:00:00,a\n2024-01-01 10:00:05,b\n");
}

#[test]
fn test_rewrite_then_load_round_trips() {
    let (_dir, store) = temp_store();
    let records = vec![
        rec("b", at(11, 0, 0)),
        rec("a", at(10, 0, 0)),
        rec("with, comma", at(10, 0, 0)),
        rec("with \"quotes\"", at(12, 30, 59)),
        rec("b", at(9, 0, 0)),
    ];

    store.rewrite_all(&records).expect("rewrite");
    assert_eq!(store.load_all().expect("load"), records);
}

#[test]
fn test_rewrite_replaces_previous_content() {
    let (_dir, store) = temp_store();
    store.append(&rec("old", at(8, 0, 0))).expect("append");

    let fresh = vec![rec("new", at(9, 0, 0))];
    store.rewrite_all(&fresh).expect("rewrite");

    assert_eq!(store.load_all().expect("load"), fresh);
}

#[test]
fn test_delete_removes_file_and_is_idempotent() {
    let (_dir, store) = temp_store();
    store.append(&rec("a", at(8, 0, 0))).expect("append");

    store.delete().expect("delete");
    assert!(!store.exists());
    store.delete().expect("second delete");
    assert!(store.load_all().expect("load").is_empty());
}

#[test]
fn test_malformed_timestamp_is_a_format_error() {
    let (_dir, store) = temp_store();
    store.append(&rec("a", at(8, 0, 0))).expect("append");

    let mut content = fs::read_to_string(store.path()).expect("read");
    content.push_str("not a date,b\n");
    fs::write(store.path(), content).expect("write");

    match store.load_all() {
        Err(AppError::Format { line, text }) => {
            assert_eq!(line, 2);
            assert_eq!(text, "not a date");
        }
        other => panic!("expected format error, got {other:?}"),
    }
}

#[test]
fn test_row_without_name_is_a_format_error() {
    let (_dir, store) = temp_store();
    store.ensure_exists().expect("create");
    fs::write(store.path(), "2024-01-01 10:00:00\n").expect("write");

    assert!(matches!(
        store.load_all(),
        Err(AppError::Format { line: 1, .. })
    ));
}
