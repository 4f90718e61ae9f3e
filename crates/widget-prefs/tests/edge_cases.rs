//! Edge case tests
//!
//! Corrupt records, unavailable or failing storage, out-of-range indices.
//! Every case must degrade to defaults or a no-op without an error.

use std::fs;
use tempfile::tempdir;
use widget_prefs::{
    default_widgets, reorder, toggle, FileStorage, MemoryStorage, PreferenceStore, Unavailable,
    WidgetBoard, WidgetId, STORAGE_KEY,
};

#[test]
fn test_not_json_record_falls_back_without_write() {
    let store = PreferenceStore::new(MemoryStorage::with_entry(STORAGE_KEY, "not json"));
    assert_eq!(store.load(), default_widgets());
    assert_eq!(store.storage().writes(), 0);
}

#[test]
fn test_wrong_shape_records_fall_back_to_defaults() {
    for record in [
        r#"{"tasks": true}"#,
        r#"[{"id": "tasks", "visible": true}]"#,
        r#"[{"id": "tasks", "label": "T", "visible": 1}]"#,
        r#"[{"id": "tasks", "label": "T", "visible": true}, 42]"#,
        r#"[{"id": "tasks", "label": "A", "visible": true}, {"id": "tasks", "label": "B", "visible": true}]"#,
    ] {
        let store = PreferenceStore::new(MemoryStorage::with_entry(STORAGE_KEY, record));
        assert_eq!(store.load(), default_widgets(), "record {record:?}");
    }
}

#[test]
fn test_corrupt_file_is_left_alone_by_load() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("dashboard-widgets.json");
    fs::write(&path, "{truncated").expect("Write failed");

    let store = PreferenceStore::new(FileStorage::new(dir.path()));
    assert_eq!(store.load(), default_widgets());
    assert_eq!(fs::read_to_string(&path).expect("Read failed"), "{truncated");
}

#[test]
fn test_unreadable_record_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temp directory");
    // A directory where the record file should be makes the read fail
    fs::create_dir(dir.path().join("dashboard-widgets.json")).expect("mkdir failed");

    let store = PreferenceStore::new(FileStorage::new(dir.path()));
    assert_eq!(store.load(), default_widgets());
}

#[test]
fn test_failed_save_keeps_toggle_in_memory() {
    let mut board = WidgetBoard::open(PreferenceStore::new(MemoryStorage::new()));

    board.on_toggle(&WidgetId::ServiceReminders);
    assert_eq!(board.store().storage().writes(), 1);

    // Storage fills up before the next gesture
    board.store_mut().storage_mut().reject_writes(true);
    board.on_toggle(&WidgetId::ServiceReminders);
    board.on_toggle(&WidgetId::FleetStatus);

    let fleet = board
        .widgets()
        .iter()
        .find(|w| w.id == WidgetId::FleetStatus)
        .expect("fleet widget present");
    assert!(!fleet.visible);
    assert!(board.widgets()[2].visible, "second toggle applied in memory");
    assert_eq!(board.store().storage().writes(), 1);
}

#[test]
fn test_quota_exceeded_is_swallowed() {
    let mut board = WidgetBoard::open(PreferenceStore::new(
        MemoryStorage::new().with_quota(16),
    ));
    board.on_reorder(0, 3);
    assert_eq!(board.widgets()[3].id, WidgetId::Tasks);
    assert_eq!(board.store().storage().raw(STORAGE_KEY), None);
}

#[test]
fn test_unavailable_storage_board_still_works() {
    let mut board = WidgetBoard::open(PreferenceStore::new(Unavailable));
    board.on_toggle(&WidgetId::Contracts);
    board.on_reorder(1, 0);
    assert_eq!(board.widgets()[0].id, WidgetId::Contracts);
    assert!(!board.widgets()[0].visible);
}

#[test]
fn test_storage_becoming_available_later() {
    let mut storage = MemoryStorage::new();
    storage.set_available(false);
    let mut board = WidgetBoard::open(PreferenceStore::new(storage));
    board.on_toggle(&WidgetId::Tasks);
    assert_eq!(board.store().storage().writes(), 0);

    board.store_mut().storage_mut().set_available(true);
    board.on_toggle(&WidgetId::Contracts);
    let persisted = board.store().load();
    assert!(!persisted[0].visible);
    assert!(!persisted[1].visible);
}

#[test]
fn test_out_of_range_reorder_is_deterministic() {
    let widgets = default_widgets();
    assert_eq!(reorder(&widgets, widgets.len(), 0), widgets);
    assert_eq!(reorder(&widgets, 100, 100), widgets);

    let clamped = reorder(&widgets, 0, 100);
    assert_eq!(clamped.last().map(|w| &w.id), Some(&WidgetId::Tasks));
    assert_eq!(clamped, reorder(&widgets, 0, widgets.len() - 1));
}

#[test]
fn test_toggle_on_empty_sequence() {
    assert!(toggle(&[], &WidgetId::Tasks).is_empty());
}
