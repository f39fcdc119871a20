//! The metadata store: sole owner of the persisted document history.
//!
//! The whole history is one JSON array under a single storage key; every
//! mutation reads the list, changes it and rewrites the full blob. Storage
//! faults never reach the caller as errors on read: a missing, unreadable or
//! corrupt blob is an empty history. Write and remove faults are logged and
//! swallowed, so a caller can report success for a write that did not land.
//! Nothing guards against another tab writing the same key; the last writer
//! wins.

use log::{debug, error};
use thiserror::Error;

use crate::config::STORAGE_KEY;
use crate::model::document::DocumentMetadata;
use crate::storage::{KeyValueStorage, StorageError};

pub use crate::format::{format_size, format_timestamp};

/// Failures of [`MetadataStore::append`] that are not storage faults.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub struct MetadataStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> MetadataStore<S> {
    /// Store over `storage` using the application key.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Every stored record, in upload order.
    pub fn get_all(&self) -> Vec<DocumentMetadata> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                error!("Lecture localStorage échouée: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(e) => {
                error!("Lecture localStorage échouée: {}", e);
                Vec::new()
            }
        }
    }

    /// Appends `record` to the end of the history.
    ///
    /// A rejected storage write is logged and reported as `Ok`. Only a
    /// failure to serialize the list is returned.
    pub fn append(&self, record: DocumentMetadata) -> Result<(), StoreError> {
        let mut list = self.get_all();
        debug!("appending document {} ({} bytes)", record.id, record.size);
        list.push(record);
        self.save_soft(&list)
    }

    /// Removes the first record whose id is `id`.
    ///
    /// Returns `false`, without writing, when no record matches.
    pub fn remove(&self, id: &str) -> bool {
        let mut list = self.get_all();
        let Some(index) = list.iter().position(|doc| doc.id == id) else {
            return false;
        };
        list.remove(index);
        if let Err(e) = self.save_soft(&list) {
            error!("Suppression de {} échouée: {}", id, e);
        }
        true
    }

    /// Drops the stored blob entirely.
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove_item(&self.key) {
            error!("Effacement localStorage échoué: {}", e);
        }
    }

    fn save(&self, list: &[DocumentMetadata]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(list)?;
        self.storage.set_item(&self.key, &raw)?;
        Ok(())
    }

    fn save_soft(&self, list: &[DocumentMetadata]) -> Result<(), StoreError> {
        match self.save(list) {
            Err(StoreError::Storage(e)) => {
                error!("Écriture localStorage échouée: {}", e);
                Ok(())
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn doc(id: &str, uploaded_at: &str) -> DocumentMetadata {
        DocumentMetadata {
            id: id.to_string(),
            name: format!("{}.txt", id),
            size: 10,
            mime_type: "text/plain".to_string(),
            last_modified: 0,
            uploaded_at: uploaded_at.to_string(),
        }
    }

    #[test]
    fn test_get_all_on_absent_key_is_empty() {
        let store = MetadataStore::new(MemoryStorage::new());
        assert!(store.get_all().is_empty());
        assert_eq!(store.storage().write_count(), 0);
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let store = MetadataStore::new(MemoryStorage::new());
        store.append(doc("a", "2024-01-02T00:00:00Z")).unwrap();
        store.append(doc("b", "2024-01-01T00:00:00Z")).unwrap();

        let ids: Vec<_> = store.get_all().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_append_writes_under_application_key() {
        let store = MetadataStore::new(MemoryStorage::new());
        store.append(doc("a", "2024-01-01T00:00:00Z")).unwrap();

        let raw = store.storage().get_item(STORAGE_KEY).unwrap().unwrap();
        assert!(raw.starts_with('['));
        assert!(raw.contains("\"uploadedAt\""));
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let store = MetadataStore::new(MemoryStorage::new());
        store.storage().set_fail_writes(true);

        assert!(store.append(doc("a", "2024-01-01T00:00:00Z")).is_ok());
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn test_remove_by_id() {
        let store = MetadataStore::new(MemoryStorage::new());
        store.append(doc("a", "2024-01-01T00:00:00Z")).unwrap();
        store.append(doc("b", "2024-01-02T00:00:00Z")).unwrap();

        assert!(store.remove("a"));
        let ids: Vec<_> = store.get_all().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn test_remove_unknown_id_does_not_write() {
        let store = MetadataStore::new(MemoryStorage::new());
        store.append(doc("a", "2024-01-01T00:00:00Z")).unwrap();
        let writes = store.storage().write_count();

        assert!(!store.remove("missing"));
        assert_eq!(store.storage().write_count(), writes);
        assert_eq!(store.get_all().len(), 1);
    }

    #[test]
    fn test_clear_failure_is_swallowed() {
        let store = MetadataStore::new(MemoryStorage::new());
        store.append(doc("a", "2024-01-01T00:00:00Z")).unwrap();
        store.storage().set_fail_writes(true);

        store.clear();
        assert_eq!(store.get_all().len(), 1);
    }

    #[test]
    fn test_custom_key_is_isolated() {
        let store = MetadataStore::with_key(MemoryStorage::new(), "other");
        store.append(doc("a", "2024-01-01T00:00:00Z")).unwrap();

        assert!(store.storage().get_item(STORAGE_KEY).unwrap().is_none());
        assert!(store.storage().get_item("other").unwrap().is_some());
    }
}
