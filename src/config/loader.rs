//! Reads `config.toml`.
//!
//! An explicit `--config` path must exist. The default location may be
//! absent, in which case the built-in defaults apply.

use std::fs;
use std::path::Path;

use crate::config::error::ConfigError;
use crate::config::schema::Config;
use crate::config::xdg;

/// Load from `path` when given, otherwise from the default location.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load_file(path),
        None => load_default(),
    }
}

/// Load a specific file. Missing files are an error.
pub fn load_file(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::read(path, e))?;
    parse(&content, path)
}

/// Load from [`xdg::config_path`], or defaults if nothing is there.
pub fn load_default() -> Result<Config, ConfigError> {
    let path = xdg::config_path();
    match load_file(&path) {
        Err(ConfigError::NotFound { .. }) => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
        other => other,
    }
}

fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::parse(path, content, &e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LogLevel;
    use serial_test::serial;

    fn with_xdg_config<F: FnOnce()>(dir: &Path, f: F) {
        let original = std::env::var_os("XDG_CONFIG_HOME");
        std::env::set_var("XDG_CONFIG_HOME", dir);
        f();
        match original {
            Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
        let path = dir.join("config.toml");
        fs::write(&path, content).expect("failed to write config");
        path
    }

    #[test]
    fn explicit_file_overrides_only_named_keys() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = write_config(dir.path(), "[dashboard]\nwidth = 120\n");
        let config = load(Some(&path)).expect("should load");
        assert_eq!(config.dashboard.width, 120);
        assert_eq!(config.dashboard.storage_dir, "");
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn explicit_missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("absent.toml");
        match load(Some(&path)).expect_err("should fail") {
            ConfigError::NotFound { path: p } => assert_eq!(p, path),
            other => panic!("expected NotFound, got: {other:?}"),
        }
    }

    #[test]
    fn directory_is_read_error() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let err = load_file(dir.path()).expect_err("should fail");
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn wrong_type_is_parse_error_with_path() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = write_config(dir.path(), "[dashboard]\nwidth = \"wide\"\n");
        match load_file(&path).expect_err("should fail") {
            ConfigError::Parse { path: p, message, .. } => {
                assert_eq!(p, path);
                assert!(!message.is_empty());
            }
            other => panic!("expected Parse, got: {other:?}"),
        }
    }

    #[test]
    #[serial(xdg)]
    fn default_location_absent_gives_defaults() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        with_xdg_config(dir.path(), || {
            assert_eq!(load(None).expect("defaults"), Config::default());
        });
    }

    #[test]
    #[serial(xdg)]
    fn default_location_present_is_parsed() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let app_dir = dir.path().join(xdg::APP_NAME);
        fs::create_dir_all(&app_dir).expect("failed to create config dir");
        write_config(&app_dir, "[logging]\nlevel = \"error\"\n");
        with_xdg_config(dir.path(), || {
            assert_eq!(load(None).expect("should load").logging.level, LogLevel::Error);
        });
    }

    #[test]
    #[serial(xdg)]
    fn default_location_invalid_is_reported() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let app_dir = dir.path().join(xdg::APP_NAME);
        fs::create_dir_all(&app_dir).expect("failed to create config dir");
        write_config(&app_dir, "[logging]\nlevel = \"loud\"\n");
        with_xdg_config(dir.path(), || {
            assert!(matches!(load(None), Err(ConfigError::Parse { .. })));
        });
    }
}
