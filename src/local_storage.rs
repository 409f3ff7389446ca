//! Browser Local Storage
//!
//! `KeyValueStore` backed by `window.localStorage`. Missing window or
//! disabled storage reports `Unavailable`, which the store treats as an
//! empty, write-ignoring backend.

use grid_store::{KeyValueStore, StorageError, StorageResult};
use wasm_bindgen::{JsCast, JsValue};

/// Handle to the page's local storage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage(&self) -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(to_storage_error)?
            .ok_or(StorageError::Unavailable)
    }
}

/// Map a thrown DOMException to a storage error
fn to_storage_error(err: JsValue) -> StorageError {
    match err.dyn_ref::<js_sys::Error>() {
        Some(e) if String::from(e.name()) == "QuotaExceededError" => {
            StorageError::QuotaExceeded(String::from(e.message()))
        }
        Some(e) => StorageError::Backend(format!("{}: {}", String::from(e.name()), String::from(e.message()))),
        None => StorageError::Backend(format!("{:?}", err)),
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage()?.get_item(key).map_err(to_storage_error)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage()?.set_item(key, value).map_err(to_storage_error)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.storage()?.remove_item(key).map_err(to_storage_error)
    }
}
