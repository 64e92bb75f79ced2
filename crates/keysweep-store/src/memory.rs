use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use keysweep_types::{Document, Key};

use crate::error::{StoreError, StoreResult};
use crate::traits::DocumentStore;

/// In-memory, HashMap-based document store.
///
/// Intended for tests and embedding. Documents are held behind a `RwLock`
/// and cloned on fetch. Two failure-injection hooks exist for exercising
/// the batch loop's error isolation: keys whose deletes are rejected, and
/// keys whose fetches fail outright.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<Key, Document>>,
    rejected_deletes: RwLock<HashSet<Key>>,
    failing_fetches: RwLock<HashSet<Key>>,
}

impl InMemoryDocumentStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a document.
    pub fn insert(&self, key: Key, document: Document) {
        self.documents
            .write()
            .expect("lock poisoned")
            .insert(key, document);
    }

    /// Number of documents currently stored.
    pub fn len(&self) -> usize {
        self.documents.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.read().expect("lock poisoned").is_empty()
    }

    /// Returns `true` if a document exists under `key`.
    pub fn contains(&self, key: &Key) -> bool {
        self.documents
            .read()
            .expect("lock poisoned")
            .contains_key(key)
    }

    /// Make every delete of `key` fail with a rejection.
    pub fn reject_deletes_of(&self, key: Key) {
        self.rejected_deletes
            .write()
            .expect("lock poisoned")
            .insert(key);
    }

    /// Make every fetch of `key` fail with a rejection.
    pub fn fail_fetches_of(&self, key: Key) {
        self.failing_fetches
            .write()
            .expect("lock poisoned")
            .insert(key);
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn fetch(&self, key: &Key) -> StoreResult<Option<Document>> {
        if self
            .failing_fetches
            .read()
            .expect("lock poisoned")
            .contains(key)
        {
            return Err(StoreError::Rejected {
                key: key.clone(),
                reason: "injected fetch failure".into(),
            });
        }
        let map = self.documents.read().expect("lock poisoned");
        Ok(map.get(key).cloned())
    }

    fn delete(&self, key: &Key) -> StoreResult<()> {
        if self
            .rejected_deletes
            .read()
            .expect("lock poisoned")
            .contains(key)
        {
            return Err(StoreError::Rejected {
                key: key.clone(),
                reason: "injected delete failure".into(),
            });
        }
        let mut map = self.documents.write().expect("lock poisoned");
        match map.remove(key) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(key.clone())),
        }
    }
}

impl std::fmt::Debug for InMemoryDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryDocumentStore")
            .field("document_count", &self.len())
            .finish()
    }
}
