//! Fleet Dashboard library
//!
//! Host side of the fleet CRM dashboard: configuration, logging, the
//! record snapshot, widget rendering and the command handlers behind the
//! `fleetdash` binary. Widget visibility and order are owned by the
//! [`widget_prefs`] crate; this crate decides where they are stored and
//! how the visible widgets are drawn.

/// Command handlers for the `fleetdash` CLI.
pub mod commands;

/// Configuration utilities including XDG path resolution.
pub mod config;

/// Tracing subscriber setup.
pub mod logging;

/// Per-category record counts rendered by the widgets.
pub mod snapshot;

/// Widget system for composable dashboard lines.
pub mod widgets;
