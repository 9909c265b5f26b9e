//! Access-state domain module.
//!
//! The shared vocabulary for account entitlement and billing state. Every
//! consumer (dashboard guard, billing webhook processor, usage metering)
//! reads and writes profiles through these types.
//!
//! # Module Structure
//!
//! - `user_status` - UserStatus entitlement enum
//! - `payment_status` - PaymentStatus billing enum
//! - `subscription` - Subscription metadata record
//! - `profile` - UserProfile record
//! - `constants` - Collection names and access levels
//! - `errors` - ProfileError

mod constants;
mod errors;
mod payment_status;
mod profile;
mod subscription;
mod user_status;

pub use constants::{access_levels, collections};
pub use errors::ProfileError;
pub use payment_status::PaymentStatus;
pub use profile::UserProfile;
pub use subscription::Subscription;
pub use user_status::UserStatus;
