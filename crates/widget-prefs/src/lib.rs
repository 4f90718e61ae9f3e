//! Persisted dashboard widget preferences
//!
//! This crate keeps the per-device visibility and order of the fleet CRM
//! dashboard widgets. It is split into:
//!
//! - pure operations over a widget sequence ([`toggle`], [`reorder`],
//!   [`merge_with_defaults`])
//! - a [`PreferenceStore`] that loads and saves the sequence through an
//!   injectable [`Storage`] port
//! - a [`WidgetBoard`] that the rendering layer drives with
//!   `on_toggle` / `on_reorder` callbacks
//!
//! Nothing here surfaces an error to the end user. Corrupt or missing
//! records fall back to [`default_widgets`]; failed writes leave the
//! in-memory sequence authoritative.
//!
//! # Examples
//!
//! ```
//! use widget_prefs::{MemoryStorage, PreferenceStore, WidgetBoard, WidgetId};
//!
//! let mut board = WidgetBoard::open(PreferenceStore::new(MemoryStorage::new()));
//! board.on_toggle(&WidgetId::Notifications);
//! board.on_reorder(0, 2);
//!
//! assert_eq!(board.hidden_count(), 1);
//! assert_eq!(board.widgets()[2].id, WidgetId::Tasks);
//! ```

#![warn(missing_docs)]

mod board;
mod error;
mod ops;
mod record;
mod storage;
mod store;
mod types;

// Re-export all public types
pub use board::WidgetBoard;
pub use error::{Error, RecordError, Result, StorageError};
pub use ops::{merge_with_defaults, reorder, toggle};
pub use record::{decode, encode};
pub use storage::{FileStorage, MemoryStorage, Storage, Unavailable};
pub use store::{PreferenceStore, STORAGE_KEY};
pub use types::{default_widgets, WidgetConfig, WidgetId};
