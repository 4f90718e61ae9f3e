//! TOML configuration schema types for the fleet dashboard.
//!
//! All structs derive `Deserialize` and `Serialize` with sensible defaults via
//! `#[serde(default)]`, so a partial file only overrides what it names.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::xdg;

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration encompassing all sections.
///
/// Corresponds to the full TOML file structure:
/// ```toml
/// [dashboard]
/// [logging]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Dashboard storage and rendering settings.
    pub dashboard: DashboardConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Dashboard configuration from the `[dashboard]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory for persisted widget preferences.
    /// Empty string means `$XDG_DATA_HOME/fleet-dashboard`.
    pub storage_dir: String,
    /// Record-count snapshot rendered by `show` when `--snapshot` is absent.
    /// Empty string means no snapshot (all counts zero).
    pub snapshot: String,
    /// Render width in columns for `show`.
    pub width: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            storage_dir: String::new(),
            snapshot: String::new(),
            width: 60,
        }
    }
}

impl DashboardConfig {
    /// Resolved preference directory, with `~` expanded.
    pub fn storage_dir_path(&self) -> PathBuf {
        if self.storage_dir.is_empty() {
            xdg::data_dir()
        } else {
            xdg::expand_tilde(&self.storage_dir)
        }
    }

    /// Resolved snapshot path, `None` when unset.
    pub fn snapshot_path(&self) -> Option<PathBuf> {
        (!self.snapshot.is_empty()).then(|| xdg::expand_tilde(&self.snapshot))
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Logging configuration from the `[logging]` section.
///
/// The `FLEETDASH_LOG` environment variable takes precedence over `level`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Logging verbosity.
    pub level: LogLevel,
    /// Path to log file. Empty string means stderr.
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            file: String::new(),
        }
    }
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings (default).
    Warn,
    /// Informational messages.
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
