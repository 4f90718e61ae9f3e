//! Record-count snapshot consumed by the summary widgets.
//!
//! A snapshot is a JSON object keyed by widget id:
//!
//! ```json
//! {"tasks": {"total": 12, "flagged": 3}, "fleet-status": {"total": 40}}
//! ```
//!
//! Categories absent from the file, and fields absent from a category,
//! count as zero.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use widget_prefs::WidgetId;

/// Failure loading a snapshot file.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The file could not be read.
    #[error("failed to read snapshot {path}: {source}")]
    Read {
        /// Snapshot path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid snapshot document.
    #[error("failed to parse snapshot {path}: {source}")]
    Parse {
        /// Snapshot path.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Counts for one record category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tally {
    /// Records in the category.
    pub total: u64,
    /// Records needing attention (overdue, escalated, expiring...).
    pub flagged: u64,
}

impl Tally {
    /// Create a tally.
    pub fn new(total: u64, flagged: u64) -> Self {
        Self { total, flagged }
    }
}

/// Per-category counts for one dashboard render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DashboardSnapshot {
    categories: HashMap<WidgetId, Tally>,
}

impl DashboardSnapshot {
    /// Empty snapshot; every tally is zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse a snapshot file.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let content = fs::read_to_string(path).map_err(|source| SnapshotError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = serde_json::from_str(&content).map_err(|source| SnapshotError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded snapshot from {}", path.display());
        Ok(snapshot)
    }

    /// Set the tally for one category.
    pub fn with(mut self, id: WidgetId, tally: Tally) -> Self {
        self.categories.insert(id, tally);
        self
    }

    /// Tally for `id`, zero when absent.
    pub fn tally(&self, id: &WidgetId) -> Tally {
        self.categories.get(id).copied().unwrap_or_default()
    }
}
