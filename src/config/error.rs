//! Errors from reading, parsing and writing `config.toml`.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration failure. Every variant names the file involved.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file is not valid TOML or does not match the schema.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        /// File containing the error.
        path: PathBuf,
        /// One-based line, 0 if unknown.
        line: usize,
        /// One-based column, 0 if unknown.
        column: usize,
        /// Parser message.
        message: String,
    },

    /// An explicitly requested file does not exist.
    #[error("no configuration file at {path}")]
    NotFound {
        /// Requested path.
        path: PathBuf,
    },

    /// `config init` would overwrite an existing file.
    #[error("{path} already exists (use --force to overwrite it, a backup is kept)")]
    AlreadyExists {
        /// Existing file.
        path: PathBuf,
    },

    /// Writing the file or its backup failed.
    #[error("cannot write {path}: {source}")]
    Write {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    /// Classify a failed read of `path`: missing files are `NotFound`.
    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Adapter for `map_err` on writes to `path`.
    pub(crate) fn write(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Parse error located within `content` by the error's byte span.
    pub(crate) fn parse(path: &Path, content: &str, err: &toml::de::Error) -> Self {
        let (line, column) = err
            .span()
            .map(|span| {
                let before = &content[..span.start.min(content.len())];
                let line = before.matches('\n').count() + 1;
                let line_start = before.rfind('\n').map_or(0, |p| p + 1);
                (line, before.len() - line_start + 1)
            })
            .unwrap_or((0, 0));
        ConfigError::Parse {
            path: path.to_path_buf(),
            line,
            column,
            message: err.message().to_string(),
        }
    }
}
