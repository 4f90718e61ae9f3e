//! Where `fleetdash` keeps its files.
//!
//! | Kind   | Override          | Linux default    | macOS default                   |
//! |--------|-------------------|------------------|---------------------------------|
//! | Config | `XDG_CONFIG_HOME` | `~/.config`      | `~/Library/Application Support` |
//! | Data   | `XDG_DATA_HOME`   | `~/.local/share` | `~/Library/Application Support` |
//!
//! Either way the app directory is `<base>/fleet-dashboard`. An override
//! set to the empty string counts as unset.

use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under each base directory.
pub const APP_NAME: &str = "fleet-dashboard";

/// Base directory kinds used by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseDir {
    /// Holds `config.toml`.
    Config,
    /// Holds persisted widget preferences.
    Data,
}

impl BaseDir {
    /// Environment variable that overrides the platform default.
    pub fn env_var(self) -> &'static str {
        match self {
            BaseDir::Config => "XDG_CONFIG_HOME",
            BaseDir::Data => "XDG_DATA_HOME",
        }
    }

    /// Platform base directory, ignoring any override.
    fn platform_base(self) -> PathBuf {
        #[cfg(target_os = "macos")]
        {
            let _ = self;
            home().join("Library/Application Support")
        }
        #[cfg(not(target_os = "macos"))]
        {
            match self {
                BaseDir::Config => home().join(".config"),
                BaseDir::Data => home().join(".local/share"),
            }
        }
    }

    /// The app directory for this kind: `<base>/fleet-dashboard`.
    pub fn app_dir(self) -> PathBuf {
        let base = std::env::var_os(self.env_var())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| self.platform_base());
        base.join(APP_NAME)
    }
}

// Relative paths are used when the home directory is unknown.
fn home() -> PathBuf {
    dirs::home_dir().unwrap_or_default()
}

/// `config.toml`'s directory.
pub fn config_dir() -> PathBuf {
    BaseDir::Config.app_dir()
}

/// Default location of the configuration file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Default directory for widget preferences, used when
/// `[dashboard] storage_dir` is empty.
pub fn data_dir() -> PathBuf {
    BaseDir::Data.app_dir()
}

/// Expands a leading `~` to the home directory. Other paths, and `~`
/// when the home directory is unknown, are returned unchanged.
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(path);
    };
    match path.strip_prefix('~') {
        Some("") => home,
        Some(rest) if rest.starts_with('/') => home.join(&rest[1..]),
        _ => PathBuf::from(path),
    }
}

/// `mkdir -p` with owner-only (0700) permissions on the leaf.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o700))?;
    }
    Ok(())
}

/// Create the config directory if needed and return it.
pub fn ensure_config_dir() -> std::io::Result<PathBuf> {
    let dir = config_dir();
    ensure_dir(&dir)?;
    Ok(dir)
}
