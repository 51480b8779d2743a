//! `localStorage` backend for the session store

use jobboard_core::{SessionStorage, StorageError};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// The window's `localStorage`, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local() -> Result<Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".into()))?
            .local_storage()
            .map_err(|err| StorageError::Unavailable(describe(&err)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".into()))
    }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local()?
            .get_item(key)
            .map_err(|err| StorageError::Unavailable(describe(&err)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local()?
            .set_item(key, value)
            .map_err(|err| StorageError::write_rejected(key, describe(&err)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::local()?
            .remove_item(key)
            .map_err(|err| StorageError::Unavailable(describe(&err)))
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_roundtrip() {
        let storage = BrowserStorage;
        storage.set("jobboard-test", "value").unwrap();
        assert_eq!(
            storage.get("jobboard-test").unwrap().as_deref(),
            Some("value")
        );
        storage.remove("jobboard-test").unwrap();
        assert_eq!(storage.get("jobboard-test").unwrap(), None);
    }
}
