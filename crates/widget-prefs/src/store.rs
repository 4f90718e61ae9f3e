//! Preference store
//!
//! Persists the widget sequence under [`STORAGE_KEY`] through a [`Storage`]
//! port. Reads never fail: a missing, unreadable, or malformed record
//! yields the default sequence. Writes never fail from the caller's point
//! of view: storage errors are logged and dropped.

use crate::error::Result;
use crate::ops::merge_with_defaults;
use crate::record;
use crate::storage::Storage;
use crate::types::{default_widgets, WidgetConfig};

/// Key the widget preference record lives under
pub const STORAGE_KEY: &str = "dashboard-widgets";

/// Loads and saves the widget sequence
#[derive(Debug)]
pub struct PreferenceStore<S> {
    storage: S,
}

impl<S: Storage> PreferenceStore<S> {
    /// Wrap a storage backend
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the persisted sequence, merged with the current defaults
    ///
    /// Falls back to [`default_widgets`] when storage is unavailable, the
    /// record is absent, or the record fails to decode. Never writes.
    pub fn load(&self) -> Vec<WidgetConfig> {
        if !self.storage.is_available() {
            log::debug!("Widget preferences: storage unavailable, using defaults");
            return default_widgets();
        }

        let text = match self.storage.get(STORAGE_KEY) {
            Ok(Some(text)) => text,
            Ok(None) => return default_widgets(),
            Err(e) => {
                log::debug!("Widget preferences: read failed ({}), using defaults", e);
                return default_widgets();
            }
        };

        match record::decode(&text) {
            Ok(saved) => merge_with_defaults(saved),
            Err(e) => {
                log::debug!("Widget preferences: {}, using defaults", e);
                default_widgets()
            }
        }
    }

    /// Persist `widgets`, replacing any previous record
    ///
    /// Failures are logged at debug level and otherwise ignored.
    pub fn save(&mut self, widgets: &[WidgetConfig]) {
        if let Err(e) = self.try_save(widgets) {
            log::debug!("Widget preferences not persisted: {}", e);
        }
    }

    /// Persist `widgets`, returning any storage or encoding failure
    ///
    /// A no-op returning `Ok(())` when storage is unavailable.
    ///
    /// # Errors
    ///
    /// - `RecordError::Serialize` if the sequence cannot be encoded
    /// - `StorageError` variants from the backend
    pub fn try_save(&mut self, widgets: &[WidgetConfig]) -> Result<()> {
        if !self.storage.is_available() {
            return Ok(());
        }
        let text = record::encode(widgets)?;
        self.storage.set(STORAGE_KEY, &text)?;
        Ok(())
    }

    /// Backing storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Backing storage, mutably
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, StorageError};
    use crate::storage::{MemoryStorage, Unavailable};
    use crate::types::WidgetId;

    #[test]
    fn test_load_without_record_returns_defaults() {
        let store = PreferenceStore::new(MemoryStorage::new());
        assert_eq!(store.load(), default_widgets());
        assert_eq!(store.storage().writes(), 0);
    }

    #[test]
    fn test_load_corrupt_record_returns_defaults_without_writing() {
        let store = PreferenceStore::new(MemoryStorage::with_entry(STORAGE_KEY, "not json"));
        assert_eq!(store.load(), default_widgets());
        assert_eq!(store.storage().writes(), 0);
        assert_eq!(store.storage().raw(STORAGE_KEY), Some("not json"));
    }

    #[test]
    fn test_load_merges_missing_widgets() {
        let record = r#"[
            {"id": "tasks", "label": "My Tasks", "visible": false},
            {"id": "contracts", "label": "Corporate Contracts", "visible": true}
        ]"#;
        let store = PreferenceStore::new(MemoryStorage::with_entry(STORAGE_KEY, record));
        let widgets = store.load();

        assert_eq!(widgets.len(), WidgetId::KNOWN.len());
        assert_eq!(widgets[0].id, WidgetId::Tasks);
        assert!(!widgets[0].visible);
        assert_eq!(widgets[1].id, WidgetId::Contracts);
        assert_eq!(widgets[2].id, WidgetId::ServiceReminders);
        assert!(widgets[2..].iter().all(|w| w.visible));
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let mut store = PreferenceStore::new(MemoryStorage::new());
        let mut widgets = default_widgets();
        widgets.reverse();
        widgets[0].visible = false;

        store.save(&widgets);
        assert_eq!(store.load(), widgets);
        assert_eq!(store.storage().writes(), 1);
    }

    #[test]
    fn test_save_swallows_storage_failure() {
        let mut store = PreferenceStore::new(MemoryStorage::new());
        store.storage_mut().reject_writes(true);
        store.save(&default_widgets());
        assert_eq!(store.storage().raw(STORAGE_KEY), None);
    }

    #[test]
    fn test_try_save_reports_quota() {
        let mut store = PreferenceStore::new(MemoryStorage::new().with_quota(8));
        let err = store
            .try_save(&default_widgets())
            .expect_err("record exceeds quota");
        assert!(matches!(
            err,
            Error::Storage(StorageError::QuotaExceeded { .. })
        ));
    }

    #[test]
    fn test_unavailable_storage_is_noop() {
        let mut store = PreferenceStore::new(Unavailable);
        assert_eq!(store.load(), default_widgets());
        store.try_save(&default_widgets()).expect("no-op save succeeds");
        store.save(&default_widgets());
    }

    #[test]
    fn test_disabled_memory_storage_skips_write() {
        let mut storage = MemoryStorage::new();
        storage.set_available(false);
        let mut store = PreferenceStore::new(storage);
        store.save(&default_widgets());
        assert_eq!(store.storage().writes(), 0);
    }
}
