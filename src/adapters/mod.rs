//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Document store implementations (in-memory)
//! - `profile` - Typed profile repository over a document store
//! - `access` - Status allow-list access policy
//! - `http` - REST endpoints and router assembly

pub mod access;
pub mod http;
pub mod profile;
pub mod storage;

pub use access::StatusAccessPolicy;
pub use profile::DocumentProfileRepository;
pub use storage::InMemoryDocumentStore;
