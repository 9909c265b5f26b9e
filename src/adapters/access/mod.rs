//! Access policy adapters.

mod status_access_policy;

pub use status_access_policy::StatusAccessPolicy;
