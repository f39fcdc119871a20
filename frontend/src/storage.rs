//! `localStorage` backend and the store handle shared with the pages.
//!
//! The handle is created once by `App` and passed down as a property, so the
//! pages never look storage up on their own.

use std::rc::Rc;

use common::storage::{KeyValueStorage, StorageError};
use common::store::MetadataStore;
use wasm_bindgen::JsValue;

/// The window's `localStorage`, resolved on every call so a storage that
/// becomes unavailable degrades into errors rather than a stale handle.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(describe(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(describe(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(describe(&e)))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Write(describe(&e)))
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Cheap, comparable reference to the application's [`MetadataStore`].
#[derive(Clone)]
pub struct StoreHandle(Rc<MetadataStore<BrowserStorage>>);

impl StoreHandle {
    pub fn new() -> Self {
        Self(Rc::new(MetadataStore::new(BrowserStorage)))
    }

    pub fn store(&self) -> &MetadataStore<BrowserStorage> {
        &self.0
    }
}

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
