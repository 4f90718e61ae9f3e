//! Persistence tests
//!
//! Exercise load/save through real file storage and the in-memory fake:
//! round trips, merging of widgets added after the last save, and the
//! board callbacks end to end.

use std::fs;
use tempfile::tempdir;
use widget_prefs::{
    default_widgets, reorder, toggle, FileStorage, MemoryStorage, PreferenceStore, Storage,
    WidgetBoard, WidgetConfig, WidgetId, STORAGE_KEY,
};

fn ids(widgets: &[WidgetConfig]) -> Vec<String> {
    widgets.iter().map(|w| w.id.to_string()).collect()
}

#[test]
fn test_save_load_roundtrip_with_file_storage() {
    let dir = tempdir().expect("Failed to create temp directory");
    let mut store = PreferenceStore::new(FileStorage::new(dir.path()));

    let mut widgets = reorder(&default_widgets(), 6, 0);
    widgets = toggle(&widgets, &WidgetId::SalesLeads);
    store.save(&widgets);

    // Fresh store over the same directory sees the same sequence
    let reopened = PreferenceStore::new(FileStorage::new(dir.path()));
    assert_eq!(reopened.load(), widgets);
}

#[test]
fn test_repeated_saves_are_idempotent() {
    let dir = tempdir().expect("Failed to create temp directory");
    let mut store = PreferenceStore::new(FileStorage::new(dir.path()));
    let widgets = toggle(&default_widgets(), &WidgetId::Tasks);

    store.save(&widgets);
    let first = fs::read_to_string(dir.path().join("dashboard-widgets.json"))
        .expect("record should exist");
    store.save(&widgets);
    let second = fs::read_to_string(dir.path().join("dashboard-widgets.json"))
        .expect("record should exist");

    assert_eq!(first, second);
}

#[test]
fn test_last_write_wins() {
    let mut store = PreferenceStore::new(MemoryStorage::new());
    store.save(&toggle(&default_widgets(), &WidgetId::Tasks));
    store.save(&toggle(&default_widgets(), &WidgetId::Contracts));

    let loaded = store.load();
    assert!(loaded[0].visible, "first save should be overwritten");
    assert!(!loaded[1].visible);
}

#[test]
fn test_widget_added_after_last_save_is_appended() {
    // Record written by a build that only knew tasks and open cases
    let record = r#"[
        {"id": "open-cases", "label": "Cases", "visible": false},
        {"id": "tasks", "label": "My Tasks", "visible": true}
    ]"#;
    let store = PreferenceStore::new(MemoryStorage::with_entry(STORAGE_KEY, record));
    let widgets = store.load();

    assert_eq!(
        ids(&widgets),
        vec![
            "open-cases",
            "tasks",
            "contracts",
            "service-reminders",
            "sales-leads",
            "notifications",
            "fleet-status",
        ]
    );
    assert_eq!(widgets[0].label, "Cases", "persisted label is kept");
    assert!(!widgets[0].visible, "persisted visibility is kept");
    assert!(widgets[2..].iter().all(|w| w.visible));
}

#[test]
fn test_record_from_newer_build_keeps_unknown_widget() {
    let record = r#"[
        {"id": "damage-reports", "label": "Damage Reports", "visible": true},
        {"id": "tasks", "label": "My Tasks", "visible": true}
    ]"#;
    let mut board = WidgetBoard::open(PreferenceStore::new(MemoryStorage::with_entry(
        STORAGE_KEY,
        record,
    )));
    assert_eq!(
        board.widgets()[0].id,
        WidgetId::Other("damage-reports".to_string())
    );

    // Saving keeps the foreign entry for the newer build to find
    board.on_toggle(&WidgetId::Tasks);
    let raw = board
        .store()
        .storage()
        .raw(STORAGE_KEY)
        .expect("record written");
    assert!(raw.contains("damage-reports"));
}

#[test]
fn test_other_spelling_of_known_id_survives_save_and_load() {
    let mut store = PreferenceStore::new(MemoryStorage::new());
    let saved = widget_prefs::merge_with_defaults(vec![WidgetConfig::new(
        WidgetId::Other("tasks".to_string()),
        "Mine",
        false,
    )]);
    store.save(&saved);

    let loaded = store.load();
    assert_eq!(loaded.len(), WidgetId::KNOWN.len());
    assert_eq!(loaded[0].id, WidgetId::Tasks);
    assert_eq!(loaded[0].label, "Mine");
    assert!(!loaded[0].visible, "customization must not be discarded");
}

#[test]
fn test_board_gestures_persist_across_sessions() {
    let dir = tempdir().expect("Failed to create temp directory");

    {
        let mut board = WidgetBoard::open(PreferenceStore::new(FileStorage::new(dir.path())));
        board.on_toggle(&WidgetId::Notifications);
        board.on_reorder(6, 0);
    }

    let board = WidgetBoard::open(PreferenceStore::new(FileStorage::new(dir.path())));
    assert_eq!(board.widgets()[0].id, WidgetId::FleetStatus);
    assert_eq!(board.hidden_count(), 1);
    assert!(board.visible().all(|w| w.id != WidgetId::Notifications));
}

#[test]
fn test_load_never_writes() {
    let mut storage = MemoryStorage::new();
    storage
        .set(STORAGE_KEY, r#"[{"id": "tasks", "label": "T", "visible": true}]"#)
        .expect("seed write");
    let store = PreferenceStore::new(storage);

    let _ = store.load();
    let _ = store.load();
    assert_eq!(store.storage().writes(), 1, "only the seed write");
}
