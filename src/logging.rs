//! Logging initialization for `fleetdash`.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `FLEETDASH_LOG` environment variable, falling back to the `[logging]`
//! config level. Records emitted through the `log` facade (the preference
//! library) are forwarded into the same subscriber.
//!
//! # Usage
//!
//! ```bash
//! # Debug level, including preference fallbacks
//! FLEETDASH_LOG=debug fleetdash widgets list
//!
//! # Module-specific filtering
//! FLEETDASH_LOG=widget_prefs=debug,warn fleetdash show
//! ```

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::schema::LoggingConfig;
use crate::config::xdg;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "FLEETDASH_LOG";

/// Build the filter: `FLEETDASH_LOG` if set and valid, else the config level.
pub fn filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(config.level.as_directive()))
}

/// Initialize the tracing subscriber.
///
/// Writes to `config.file` (appending, no ANSI colors) when set, otherwise
/// to stderr. If the log file cannot be opened, falls back to stderr and
/// reports the failure there.
///
/// # Panics
///
/// Panics if a global subscriber has already been set (should only be
/// called once, at startup).
pub fn init(config: &LoggingConfig) {
    let filter = filter(config);

    if !config.file.is_empty() {
        let path = xdg::expand_tilde(&config.file);
        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => {
                fmt()
                    .with_env_filter(filter)
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .init();
                return;
            }
            Err(e) => {
                eprintln!("Warning: cannot open log file {}: {}", path.display(), e);
            }
        }
    }

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
