//! Browser `localStorage` backend for WASM targets.
//!
//! The storage handle is looked up on every call: hosts may revoke access
//! (private browsing, quota) at any time and the port reports that as
//! [`StorageError::Unavailable`] instead of caching a dead handle.

use wasm_bindgen::JsValue;

use crate::error::{StorageError, StorageResult};
use crate::service::KeyValueStore;

/// `window.localStorage` wrapped as a [`KeyValueStore`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    /// Create a new handle. No browser API is touched until first use.
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> StorageResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| StorageError::unavailable("no window"))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StorageError::unavailable("localStorage disabled"))
    }
}

fn js_error(value: JsValue) -> StorageError {
    StorageError::Unavailable(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Io(js_error(e).to_string()))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}
