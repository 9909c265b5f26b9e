//! User profile repository port.
//!
//! Typed persistence for [`UserProfile`] records. Implementations store
//! profiles in the `users` collection keyed by uid.
//!
//! # Contract
//!
//! - **Validating writer**: `create` and `update` reject records that fail
//!   [`UserProfile::validate`] without touching storage
//! - **Closed-set reader**: documents holding unknown status literals or
//!   otherwise malformed data surface as `ProfileError::InvalidRecord`
//! - **No delete**: deactivation is a status change

use async_trait::async_trait;

use crate::domain::access::{ProfileError, UserProfile};
use crate::domain::foundation::UserId;

/// Repository port for user profiles.
#[async_trait]
pub trait UserProfileRepository: Send + Sync {
    /// Persist a new profile.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if the uid already has a profile
    /// - `ValidationFailed` if the record breaks an invariant
    async fn create(&self, profile: &UserProfile) -> Result<(), ProfileError>;

    /// Replace an existing profile.
    ///
    /// # Errors
    ///
    /// - `NotFoundForUser` if the uid has no profile
    /// - `ValidationFailed` if the record breaks an invariant
    async fn update(&self, profile: &UserProfile) -> Result<(), ProfileError>;

    /// Find a profile by uid. Returns `None` if absent.
    async fn find_by_uid(&self, uid: &UserId) -> Result<Option<UserProfile>, ProfileError>;

    /// Returns true if the uid has a profile.
    async fn exists(&self, uid: &UserId) -> Result<bool, ProfileError> {
        Ok(self.find_by_uid(uid).await?.is_some())
    }
}
