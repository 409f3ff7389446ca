//! JSON helpers over a key-value store
//!
//! Reads never fail: a miss, a storage error or an unparsable value all
//! yield the caller's fallback. Writes log and swallow failures.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::traits::KeyValueStore;
use crate::domain::StorageError;

/// Read and parse the JSON value under `key`, or return `fallback`
pub fn read_json<T, S>(store: &S, key: &str, fallback: T) -> T
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return fallback,
        Err(StorageError::Unavailable) => return fallback,
        Err(e) => {
            log::warn!("Error reading storage key \"{}\": {}", key, e);
            return fallback;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Error reading storage key \"{}\": {}", key, StorageError::from(e));
            fallback
        }
    }
}

/// Serialize `value` as JSON under `key`. Returns whether it was stored.
pub fn write_json<T, S>(store: &S, key: &str, value: &T) -> bool
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let result = serde_json::to_string(value)
        .map_err(StorageError::from)
        .and_then(|json| store.set(key, &json));

    match result {
        Ok(()) => true,
        Err(StorageError::Unavailable) => false,
        Err(e) => {
            log::warn!("Error writing storage key \"{}\": {}", key, e);
            false
        }
    }
}

/// Remove `key`. Returns whether the provider accepted the removal.
pub fn remove_key<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> bool {
    match store.remove(key) {
        Ok(()) => true,
        Err(StorageError::Unavailable) => false,
        Err(e) => {
            log::warn!("Error removing storage key \"{}\": {}", key, e);
            false
        }
    }
}
