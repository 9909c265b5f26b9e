//! Storage Adapters
//!
//! Implementations of the DocumentStore port.
//!
//! ## Available Adapters
//!
//! - **InMemoryDocumentStore** - Stores documents in memory (development/testing)
//!
//! ## Usage
//!
//! ```ignore
//! use dopair::adapters::storage::InMemoryDocumentStore;
//!
//! let store = InMemoryDocumentStore::new();
//! ```

mod in_memory_document_store;

pub use in_memory_document_store::InMemoryDocumentStore;
