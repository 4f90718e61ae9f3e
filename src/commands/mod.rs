//! Command implementations for the `fleetdash` CLI.
//!
//! - `widgets` - list, toggle, move and reset dashboard widgets
//! - `show` - render the visible widgets against a record snapshot

pub mod show;
pub mod widgets;

pub use show::run_show;
pub use widgets::{run_list, run_move, run_reset, run_toggle};

use std::path::Path;

use thiserror::Error;
use widget_prefs::{FileStorage, PreferenceStore, RecordError, Storage, Unavailable, WidgetBoard};

use crate::config::schema::Config;
use crate::snapshot::SnapshotError;

/// Board type used by every command: file-backed, or [`Unavailable`] when
/// the preference directory cannot be created.
pub type Board = WidgetBoard<Box<dyn Storage>>;

/// Errors surfaced to the user by a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The widget id is not on the board.
    #[error("unknown widget '{0}'")]
    UnknownWidget(String),

    /// Encoding the preference list failed.
    #[error(transparent)]
    Record(#[from] RecordError),

    /// The snapshot could not be loaded.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Open the widget board for this device.
///
/// `data_dir` overrides `[dashboard] storage_dir`. If the directory cannot
/// be created, the board falls back to defaults and nothing persists.
pub fn open_board(config: &Config, data_dir: Option<&Path>) -> Board {
    let dir = data_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.dashboard.storage_dir_path());

    let storage: Box<dyn Storage> = match FileStorage::open(&dir) {
        Ok(storage) => {
            tracing::debug!("Widget preferences stored in {}", storage.dir().display());
            Box::new(storage)
        }
        Err(e) => {
            tracing::warn!("Widget preferences will not be saved: {e}");
            Box::new(Unavailable)
        }
    };

    WidgetBoard::open(PreferenceStore::new(storage))
}
