//! File-backed storage adapter
//!
//! Each key maps to `<dir>/<key>.json`. Writes use the temp-file-then-rename
//! pattern so a crash mid-write never leaves a truncated record behind.

use super::Storage;
use crate::error::StorageError;
use chrono::Local;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Directory of one-file-per-key records
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `dir`. The directory is not created.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage rooted at `dir`, creating the directory if missing.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Root directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path backing `key`
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidKey` unless the key is non-empty, does
    /// not start with `.`, and only uses ASCII alphanumerics, `.`, `_`, `-`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn is_available(&self) -> bool {
        self.dir.is_dir()
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    /// Write atomically:
    /// 1. Write to temp file with timestamp suffix
    /// 2. Fsync to disk
    /// 3. Rename temp to destination
    ///
    /// The temp file is removed whenever a step fails.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let temp_path = temp_path_for(&path);
        replace_atomic(key, path, temp_path, |temp| write_synced(temp, value))
    }
}

/// Sibling temp file for `path`: `<file>.tmp.<yyyyMMdd-hhmmss>`
fn temp_path_for(path: &Path) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d-%H%M%S");
    path.with_extension(format!("json.tmp.{timestamp}"))
}

fn write_synced(path: &Path, value: &str) -> io::Result<()> {
    fs::write(path, value)?;
    fs::File::open(path)?.sync_all()
}

/// Run `write` against `temp_path`, then rename it onto `path`.
fn replace_atomic<W>(
    key: &str,
    path: PathBuf,
    temp_path: PathBuf,
    write: W,
) -> Result<(), StorageError>
where
    W: FnOnce(&Path) -> io::Result<()>,
{
    if let Err(source) = write(&temp_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(StorageError::Io {
            key: key.to_string(),
            source,
        });
    }

    if fs::rename(&temp_path, &path).is_err() {
        let _ = fs::remove_file(&temp_path);
        return Err(StorageError::WriteAtomic { path, temp_path });
    }

    Ok(())
}
