//! In-memory storage adapter.

use super::Storage;
use crate::error::StorageError;
use std::collections::HashMap;

/// `HashMap`-backed storage
///
/// Used by tests and by hosts that have no client context yet. The
/// availability, quota, and write-failure knobs stand in for a browser-style
/// key-value store being disabled or full.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    available: bool,
    quota: Option<usize>,
    reject_writes: bool,
    writes: usize,
}

impl MemoryStorage {
    /// Empty, available storage without a quota.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            available: true,
            quota: None,
            reject_writes: false,
            writes: 0,
        }
    }

    /// Storage pre-seeded with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.into(), value.into());
        storage
    }

    /// Limit the total size of stored values, in bytes.
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// Toggle availability.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Make every subsequent `set` fail with `WriteRejected`.
    pub fn reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Raw stored value, bypassing availability.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(_, v)| v.len())
            .sum()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemoryStorage {
    fn is_available(&self) -> bool {
        self.available
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        if self.reject_writes {
            return Err(StorageError::WriteRejected(key.to_string()));
        }
        if let Some(quota) = self.quota {
            let needed = self.used_bytes_without(key) + value.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    quota,
                });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
