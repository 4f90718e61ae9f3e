//! Key-value storage port
//!
//! The preference store never touches a persistence backend directly; it
//! talks to a [`Storage`] implementation. Adapters:
//!
//! - [`MemoryStorage`]: in-process map with failure knobs
//! - [`FileStorage`]: one JSON file per key, atomic writes
//! - [`Unavailable`]: no persistence at all

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StorageError;

/// Text key-value persistence
pub trait Storage {
    /// Whether persistence can be used right now.
    ///
    /// When this returns `false` the store skips `get`/`set` entirely.
    fn is_available(&self) -> bool {
        true
    }

    /// Read the value under `key`, `Ok(None)` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Storage for environments without persistence
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl Storage for Unavailable {
    fn is_available(&self) -> bool {
        false
    }

    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}
