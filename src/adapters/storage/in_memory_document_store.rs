//! In-Memory Document Store Adapter
//!
//! Stores documents in nested maps keyed by collection then id.
//! Used by the development server and by tests.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{DocumentStore, StoreError};

type Collections = HashMap<String, HashMap<String, Value>>;

/// In-memory document store
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    collections: Arc<RwLock<Collections>>,
}

impl InMemoryDocumentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map(HashMap::len)
            .unwrap_or(0)
    }

    /// Write a document unconditionally, bypassing create/replace checks.
    ///
    /// Lets tests seed documents that no validating writer would produce.
    pub async fn insert_raw(&self, collection: &str, id: &str, document: Value) {
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), document);
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .cloned())
    }

    async fn create(&self, collection: &str, id: &str, document: Value) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();
        if docs.contains_key(id) {
            return Err(StoreError::already_exists(collection, id));
        }
        docs.insert(id.to_string(), document);
        tracing::debug!(collection, id, "Document created");
        Ok(())
    }

    async fn replace(
        &self,
        collection: &str,
        id: &str,
        document: Value,
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let slot = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
            .ok_or_else(|| StoreError::not_found(collection, id))?;
        *slot = document;
        tracing::debug!(collection, id, "Document replaced");
        Ok(())
    }

    async fn list_ids(&self, collection: &str) -> Result<Vec<String>, StoreError> {
        let collections = self.collections.read().await;
        let mut ids: Vec<String> = collections
            .get(collection)
            .map(|docs| docs.keys().cloned().collect())
            .unwrap_or_default();
        ids.sort();
        Ok(ids)
    }
}
