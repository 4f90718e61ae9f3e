//! `fleetdash config init`: the commented default `config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

/// Commented configuration whose values equal `Config::default()`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Fleet Dashboard Configuration
#
# This file was auto-generated with default values.
# All values shown below are the built-in defaults.
#
# Location: $XDG_CONFIG_HOME/fleet-dashboard/config.toml

# ==============================================================================
# Dashboard
# ==============================================================================

[dashboard]

# Directory where widget visibility and order are persisted.
# Empty string means $XDG_DATA_HOME/fleet-dashboard
# (~/.local/share/fleet-dashboard on Linux).
# Tilde (~) is expanded to the user's home directory.
storage_dir = ""

# JSON snapshot of CRM record counts rendered by `fleetdash show`.
# Overridden by --snapshot. Empty string means all counts are zero.
# Example: "~/crm/snapshot.json"
snapshot = ""

# Render width in columns for `fleetdash show`.
# Widget lines longer than this are truncated with an ellipsis.
width = 60

# ==============================================================================
# Logging
# ==============================================================================

[logging]

# Logging verbosity level.
# Options: "error", "warn", "info", "debug", "trace"
#   error - Only errors
#   warn  - Errors and warnings (recommended)
#   info  - General operational information
#   debug - Detailed debugging information, including preference fallbacks
#   trace - Very verbose
# The FLEETDASH_LOG environment variable overrides this value.
level = "warn"

# Path to log file. Empty string means log to stderr.
# Example: "~/.local/share/fleet-dashboard/fleetdash.log"
file = ""
"#;

/// Where `config init --force` keeps the previous file: `config.toml.backup`.
pub fn backup_path(path: &Path) -> PathBuf {
    path.with_extension("toml.backup")
}

/// Write [`DEFAULT_CONFIG_TEMPLATE`] to `path`, or to [`xdg::config_path`]
/// when `None`, with mode 0600.
///
/// An existing file is an error unless `force` is set, in which case it is
/// copied to [`backup_path`] first. Missing parent directories are
/// created (owner-only for the XDG location). Returns the path written.
pub fn create_default_config(path: Option<&Path>, force: bool) -> Result<PathBuf, ConfigError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => xdg::config_path(),
    };

    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists { path });
        }
        let backup = backup_path(&path);
        fs::copy(&path, &backup).map_err(ConfigError::write(&backup))?;
        tracing::info!("Previous configuration saved to {}", backup.display());
    }

    match path.parent() {
        Some(parent) if parent == xdg::config_dir() => {
            xdg::ensure_config_dir().map_err(ConfigError::write(&path))?;
        }
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(ConfigError::write(&path))?;
        }
        _ => {}
    }
    fs::write(&path, DEFAULT_CONFIG_TEMPLATE).map_err(ConfigError::write(&path))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
            .map_err(ConfigError::write(&path))?;
    }
    Ok(path)
}
