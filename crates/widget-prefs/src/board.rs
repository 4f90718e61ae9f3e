//! Widget board: the interface the composition layer drives
//!
//! Holds the current widget sequence and persists it after every user
//! gesture. The in-memory sequence is authoritative for the session even
//! when persistence fails.

use crate::ops;
use crate::storage::Storage;
use crate::store::PreferenceStore;
use crate::types::{default_widgets, WidgetConfig, WidgetId};

/// Current widget sequence plus gesture callbacks
#[derive(Debug)]
pub struct WidgetBoard<S> {
    store: PreferenceStore<S>,
    widgets: Vec<WidgetConfig>,
}

impl<S: Storage> WidgetBoard<S> {
    /// Load the sequence from `store`
    pub fn open(store: PreferenceStore<S>) -> Self {
        let widgets = store.load();
        Self { store, widgets }
    }

    /// Full sequence in render order, hidden entries included
    pub fn widgets(&self) -> &[WidgetConfig] {
        &self.widgets
    }

    /// Visible entries in render order
    pub fn visible(&self) -> impl Iterator<Item = &WidgetConfig> {
        self.widgets.iter().filter(|w| w.visible)
    }

    /// Number of hidden entries
    pub fn hidden_count(&self) -> usize {
        self.widgets.iter().filter(|w| !w.visible).count()
    }

    /// Toggle visibility of `id` and persist
    pub fn on_toggle(&mut self, id: &WidgetId) {
        let next = ops::toggle(&self.widgets, id);
        self.replace(next);
    }

    /// Move the entry at `from` to `to` and persist
    pub fn on_reorder(&mut self, from: usize, to: usize) {
        let next = ops::reorder(&self.widgets, from, to);
        self.replace(next);
    }

    /// Restore the default sequence and persist
    pub fn reset(&mut self) {
        self.replace(default_widgets());
    }

    /// Underlying store
    pub fn store(&self) -> &PreferenceStore<S> {
        &self.store
    }

    /// Underlying store, mutably
    pub fn store_mut(&mut self) -> &mut PreferenceStore<S> {
        &mut self.store
    }

    fn replace(&mut self, next: Vec<WidgetConfig>) {
        self.widgets = next;
        self.store.save(&self.widgets);
    }
}
