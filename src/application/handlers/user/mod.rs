//! User profile application handlers.
//!
//! Command and query handlers for the access-state model.

mod apply_billing_state;
mod check_access;
mod create_profile;
mod get_profile;
mod set_approval;

pub use apply_billing_state::{
    ApplyBillingStateCommand, ApplyBillingStateHandler, ApplyBillingStateResult,
};
pub use check_access::{CheckAccessHandler, CheckAccessQuery, CheckAccessResult};
pub use create_profile::{CreateProfileCommand, CreateProfileHandler, CreateProfileResult};
pub use get_profile::{GetProfileHandler, GetProfileQuery};
pub use set_approval::{SetApprovalCommand, SetApprovalHandler};
