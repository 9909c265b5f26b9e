//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, timestamps, errors)
//! - `access` - User access-state model (statuses, profile, subscription, constants)

pub mod access;
pub mod foundation;
