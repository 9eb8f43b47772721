//! LocalStorage backend

use wasm_bindgen::JsValue;

use crate::persistence::{KeyValueStore, StorageError};

/// `window.localStorage`, or nothing when the browser refuses access
/// (private mode, disabled storage). Writes then fail with `Unavailable`.
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let inner = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if inner.is_none() {
            log::warn!("LocalStorage unavailable, progress will not be saved");
        }
        Self { inner }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.inner.as_ref().ok_or(StorageError::Unavailable)
    }
}

fn backend(err: JsValue) -> StorageError {
    StorageError::Backend(format!("{:?}", err))
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(backend)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(backend)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage()?.remove_item(key).map_err(backend)
    }
}
