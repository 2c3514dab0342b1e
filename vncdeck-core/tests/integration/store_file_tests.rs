//! Integration tests for the store's file format
//!
//! These tests verify files written by other tools are read correctly and
//! that damaged files never surface as errors.

use serde_json::{Value, json};
use tempfile::TempDir;
use vncdeck_core::config::ConfigManager;
use vncdeck_core::models::Connection;
use vncdeck_core::store::{CONNECTIONS_FILE, ConnectionStore, LAST_CONNECTION_FILE};

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).expect("readable")).expect("valid JSON")
}

// ============================================================================
// Reading hand-written files
// ============================================================================

#[test]
fn test_reads_existing_connections_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONNECTIONS_FILE),
        r#"[
            {"name": "office", "host": "desk.example.com", "port": 5901, "username": "alice", "display": ":1"},
            {"name": "lab", "host": "10.0.0.5", "port": null},
            {"name": "nas", "host": "nas.lan"}
        ]"#,
    )
    .unwrap();

    let store = ConnectionStore::open(dir.path()).unwrap();
    let list = store.list();

    assert_eq!(list.len(), 3);
    assert_eq!(list[0].target(), "alice@desk.example.com:5901");
    assert_eq!(list[0].display(), Some(":1"));
    assert_eq!(list[1].port(), 5900, "null port reads as default");
    assert_eq!(list[2].port(), 5900, "missing port reads as default");
}

#[test]
fn test_invalid_entry_discards_whole_list() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONNECTIONS_FILE),
        r#"[{"name": "ok", "host": "h"}, {"name": "bad", "host": "h", "port": 70000}]"#,
    )
    .unwrap();

    let store = ConnectionStore::open(dir.path()).unwrap();
    assert!(store.list().is_empty());
}

#[test]
fn test_damaged_files_read_as_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONNECTIONS_FILE), "{\"truncated\": [").unwrap();
    std::fs::write(dir.path().join(LAST_CONNECTION_FILE), "not json").unwrap();

    let store = ConnectionStore::open(dir.path()).unwrap();
    assert!(store.list().is_empty());
    assert!(store.load_last_used().is_none());
    assert!(store.get_by_name("anything").is_none());
}

// ============================================================================
// Written format
// ============================================================================

#[test]
fn test_written_files_are_plain_mappings() {
    let dir = TempDir::new().unwrap();
    let store = ConnectionStore::open(dir.path()).unwrap();
    let conn = Connection::new("office", "desk.example.com", 5901)
        .unwrap()
        .with_username(Some("alice".to_string()));

    store.add(&conn).unwrap();
    store.save_last_used(&conn).unwrap();

    let expected = json!({
        "name": "office",
        "host": "desk.example.com",
        "port": 5901,
        "username": "alice",
        "display": null
    });
    assert_eq!(read_json(store.connections_file()), json!([expected.clone()]));
    assert_eq!(read_json(store.last_connection_file()), expected);
}

#[test]
fn test_no_temporary_files_left_behind() {
    let dir = TempDir::new().unwrap();
    let store = ConnectionStore::open(dir.path()).unwrap();
    let conn = Connection::with_defaults("a", "h").unwrap();

    store.add(&conn).unwrap();
    store.save_last_used(&conn).unwrap();
    store.delete("a").unwrap();

    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec![CONNECTIONS_FILE, LAST_CONNECTION_FILE]);
}

#[test]
fn test_store_from_config_manager() {
    let dir = TempDir::new().unwrap();
    let config = ConfigManager::with_config_dir(dir.path().join("vncdeck"));

    let store = ConnectionStore::from_config(&config).unwrap();
    assert!(store.config_dir().is_dir());
    assert_eq!(store.connections_file(), config.config_dir().join(CONNECTIONS_FILE));
}
