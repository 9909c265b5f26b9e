//! Document store port.
//!
//! A minimal named-collection document store: every document is a JSON value
//! addressed by `(collection, id)`. Collection names come from
//! [`collections`](crate::domain::access::collections).

use async_trait::async_trait;
use serde_json::Value;

/// Errors that can occur during document store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Document {collection}/{id} already exists")]
    AlreadyExists { collection: String, id: String },

    #[error("Document {collection}/{id} not found")]
    NotFound { collection: String, id: String },

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn already_exists(collection: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::AlreadyExists {
            collection: collection.into(),
            id: id.into(),
        }
    }

    pub fn not_found(collection: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            collection: collection.into(),
            id: id.into(),
        }
    }
}

/// Port for reading and writing documents in named collections.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a document. Returns `None` if it does not exist.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError>;

    /// Insert a document that must not exist yet.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if a document with this id is present
    async fn create(&self, collection: &str, id: &str, document: Value) -> Result<(), StoreError>;

    /// Replace an existing document.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no document with this id is present
    async fn replace(&self, collection: &str, id: &str, document: Value)
        -> Result<(), StoreError>;

    /// List the ids stored in a collection, sorted ascending.
    async fn list_ids(&self, collection: &str) -> Result<Vec<String>, StoreError>;
}
