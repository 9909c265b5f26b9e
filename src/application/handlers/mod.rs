//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod user;

pub use user::{
    // Commands
    ApplyBillingStateCommand, ApplyBillingStateHandler, ApplyBillingStateResult,
    CreateProfileCommand, CreateProfileHandler, CreateProfileResult,
    SetApprovalCommand, SetApprovalHandler,
    // Queries
    CheckAccessHandler, CheckAccessQuery, CheckAccessResult,
    GetProfileHandler, GetProfileQuery,
};
