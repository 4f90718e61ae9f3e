//! Error types for widget-prefs
//!
//! None of these escape `load`, `save`, or the board callbacks: they are
//! logged and degraded to defaults or no-ops there. They exist so storage
//! adapters and `try_save` callers get structured failures.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type
#[derive(Debug, Error)]
pub enum Error {
    /// Storage backend error
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Persisted record error
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Storage port errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// No persistent storage in this environment
    #[error("Persistent storage is unavailable")]
    Unavailable,

    /// Key cannot be used by this backend
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// I/O error reading or writing a key
    #[error("Storage I/O failed for key {key}")]
    Io {
        /// Key being accessed
        key: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Value does not fit the backend quota
    #[error("Storage quota exceeded for key {key}: {needed} bytes needed, quota is {quota}")]
    QuotaExceeded {
        /// Key being written
        key: String,
        /// Bytes the store would hold after the write
        needed: usize,
        /// Configured quota in bytes
        quota: usize,
    },

    /// Backend refused the write
    #[error("Storage rejected write for key {0}")]
    WriteRejected(String),

    /// Temp-then-rename write could not complete
    #[error("Failed to write {path} atomically (temp file {temp_path})")]
    WriteAtomic {
        /// Destination path
        path: PathBuf,
        /// Temporary file that could not be renamed
        temp_path: PathBuf,
    },
}

/// Persisted record errors
#[derive(Debug, Error)]
pub enum RecordError {
    /// Text is not an array of `{id, label, visible}` records
    #[error("Failed to parse widget record: {0}")]
    Parse(#[source] serde_json::Error),

    /// The same widget id appears more than once
    #[error("Duplicate widget id in record: {0}")]
    DuplicateId(String),

    /// Sequence could not be encoded
    #[error("Failed to serialize widget record: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result type alias for widget-prefs operations
pub type Result<T> = std::result::Result<T, Error>;
