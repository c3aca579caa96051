/// Process-local document store
///
/// Keeps collections in a mutex-guarded map. Failures can be switched on per
/// operation, and append calls are counted, which is what the tests lean on.

use crate::store::document::{Document, DocumentId, DocumentStore, StoreError, StoredDocument};
use chrono::Utc;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

#[derive(Debug, Default)]
struct MemoryState {
    collections: HashMap<String, Vec<StoredDocument>>,
    append_calls: usize,
    fail_appends: bool,
    fail_lists: bool,
}

/// In-memory `DocumentStore`; clones share the same data
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `append` fail
    pub fn fail_appends(&self, fail: bool) {
        self.lock().fail_appends = fail;
    }

    /// Make every following `list_all` fail
    pub fn fail_lists(&self, fail: bool) {
        self.lock().fail_lists = fail;
    }

    /// Number of `append` calls received, failed ones included
    pub fn append_calls(&self) -> usize {
        self.lock().append_calls
    }

    /// Number of documents held in `collection`
    pub fn len(&self, collection: &str) -> usize {
        self.lock().collections.get(collection).map_or(0, Vec::len)
    }

    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }

    /// Insert a document as-is, bypassing failure switches and counters
    pub fn insert_raw(&self, collection: &str, document: StoredDocument) {
        self.lock()
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(document);
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        // A panic while holding the lock leaves plain data behind; keep using it.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DocumentStore for MemoryDocumentStore {
    async fn append(&self, collection: &str, document: Document) -> Result<DocumentId, StoreError> {
        let mut state = self.lock();
        state.append_calls += 1;
        if state.fail_appends {
            return Err(StoreError::Unavailable("memory store rejecting appends".to_string()));
        }

        let id = DocumentId::generate();
        state
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument {
                id: id.clone(),
                fields: document,
                stored_at: Utc::now(),
            });
        Ok(id)
    }

    async fn list_all(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError> {
        let state = self.lock();
        if state.fail_lists {
            return Err(StoreError::Unavailable("memory store rejecting lists".to_string()));
        }
        Ok(state.collections.get(collection).cloned().unwrap_or_default())
    }
}
