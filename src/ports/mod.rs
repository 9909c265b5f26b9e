//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `DocumentStore` - Named-collection JSON document storage
//! - `UserProfileRepository` - Typed profile persistence over the `users` collection
//!
//! ## Access Ports
//!
//! - `AccessPolicy` - Status-based dashboard gate

mod access_policy;
mod document_store;
mod user_profile_repository;

pub use access_policy::{AccessDeniedReason, AccessPolicy, AccessResult};
pub use document_store::{DocumentStore, StoreError};
pub use user_profile_repository::UserProfileRepository;
