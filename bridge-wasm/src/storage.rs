//! `localStorage`-backed preference store for plain browser sessions.
//!
//! Keys are prefixed with the storage namespace so several apps on one
//! origin cannot clobber each other's values.

use async_trait::async_trait;
use bridge_traits::{
    error::{BridgeError, Result as BridgeResult},
    storage::PreferenceStore,
};
use wasm_bindgen::JsValue;

use crate::error::js_message;

const PREFERENCES_SEGMENT: &str = "prefs";

fn js_error(context: &str, err: JsValue) -> BridgeError {
    BridgeError::Storage(format!("localStorage {context}: {}", js_message(&err)))
}

fn local_storage() -> BridgeResult<web_sys::Storage> {
    let window = web_sys::window().ok_or_else(|| BridgeError::NotAvailable("window".into()))?;
    window
        .local_storage()
        .map_err(|err| js_error("access", err))?
        .ok_or_else(|| BridgeError::NotAvailable("localStorage".into()))
}

/// Browser-backed preference store.
#[derive(Clone)]
pub struct LocalStoragePreferenceStore {
    storage: web_sys::Storage,
    prefix: String,
}

impl LocalStoragePreferenceStore {
    pub fn new(namespace: &str) -> BridgeResult<Self> {
        Ok(Self {
            storage: local_storage()?,
            prefix: format!("{namespace}::{PREFERENCES_SEGMENT}::"),
        })
    }

    fn key_for(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }
}

#[async_trait(?Send)]
impl PreferenceStore for LocalStoragePreferenceStore {
    async fn set(&self, key: &str, value: &str) -> BridgeResult<()> {
        self.storage
            .set_item(&self.key_for(key), value)
            .map_err(|err| js_error("set_item", err))
    }

    async fn get(&self, key: &str) -> BridgeResult<Option<String>> {
        self.storage
            .get_item(&self.key_for(key))
            .map_err(|err| js_error("get_item", err))
    }

    async fn remove(&self, key: &str) -> BridgeResult<()> {
        self.storage
            .remove_item(&self.key_for(key))
            .map_err(|err| js_error("remove_item", err))
    }

    async fn keys(&self) -> BridgeResult<Vec<String>> {
        let len = self
            .storage
            .length()
            .map_err(|err| js_error("length", err))?;

        let mut keys = Vec::new();
        for idx in 0..len {
            let entry = self
                .storage
                .key(idx)
                .map_err(|err| js_error("key", err))?;
            if let Some(key) = entry.and_then(|e| e.strip_prefix(&self.prefix).map(str::to_string))
            {
                keys.push(key);
            }
        }
        keys.sort();
        Ok(keys)
    }

    async fn clear(&self) -> BridgeResult<()> {
        // Only this namespace; other apps on the origin keep their data.
        for key in self.keys().await? {
            self.remove(&key).await?;
        }
        Ok(())
    }
}
