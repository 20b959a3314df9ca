//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage`.

use tally_core::{KeyValueStore, StoreError};
use wasm_bindgen::JsValue;

pub struct LocalStorageStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStorageStore {
    /// Grab `localStorage`; private browsing modes may deny it
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[Storage] localStorage unavailable, changes will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StoreError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("localStorage is not available".to_string()))
    }
}

fn js_error(key: &str, e: JsValue) -> StoreError {
    StoreError::Rejected {
        key: key.to_string(),
        reason: e.as_string().unwrap_or_else(|| format!("{:?}", e)),
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?.get_item(key).map_err(|e| js_error(key, e))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?.set_item(key, value).map_err(|e| js_error(key, e))
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.storage()?.remove_item(key).map_err(|e| js_error(key, e))
    }
}
