//! In-memory document store for tests and throwaway sessions.

use std::collections::HashMap;

use serde_json::Value as JsonValue;

use super::{DocumentKey, DocumentStore, StoreError};

/// A [`DocumentStore`] that keeps documents in a `HashMap`.
///
/// Nothing survives the process; useful for tests and for browsing a shop
/// without touching disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: HashMap<DocumentKey, JsonValue>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents that have been written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether no document has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn read(&self, key: DocumentKey) -> Result<Option<JsonValue>, StoreError> {
        Ok(self.documents.get(&key).cloned())
    }

    fn write(&mut self, key: DocumentKey, value: &JsonValue) -> Result<(), StoreError> {
        self.documents.insert(key, value.clone());
        Ok(())
    }
}
