//! In-memory Key-Value Store
//!
//! Used by tests and native hosts. Can emulate a storage quota and an
//! environment with no storage at all.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::traits::KeyValueStore;
use crate::domain::{StorageError, StorageResult};

/// HashMap-backed storage
#[derive(Debug)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    /// Max total bytes of keys and values
    quota: Option<usize>,
    available: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            quota: None,
            available: true,
        }
    }

    /// Storage that rejects writes once keys and values exceed `bytes`
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            quota: Some(bytes),
            ..Self::new()
        }
    }

    /// Storage that behaves like a missing backend
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> StorageResult<MutexGuard<'_, HashMap<String, String>>> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        self.entries
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.lock()?;

        if let Some(quota) = self.quota {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded(format!(
                    "{} bytes needed, {} allowed",
                    needed, quota
                )));
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}
