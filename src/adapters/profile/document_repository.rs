//! DocumentStore adapter for UserProfileRepository
//!
//! Profiles live in the `users` collection, one document per uid. Every
//! write is validated first; every read is checked against the closed enum
//! sets and the document key before it reaches callers.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::access::{collections, ProfileError, UserProfile};
use crate::domain::foundation::UserId;
use crate::ports::{DocumentStore, StoreError, UserProfileRepository};

/// Profile repository backed by any [`DocumentStore`].
#[derive(Clone)]
pub struct DocumentProfileRepository {
    store: Arc<dyn DocumentStore>,
}

impl DocumentProfileRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    fn to_document(profile: &UserProfile) -> Result<serde_json::Value, ProfileError> {
        profile.validate()?;
        serde_json::to_value(profile).map_err(|e| ProfileError::infrastructure(e.to_string()))
    }

    /// Reads a stored document.
    ///
    /// Only the closed enum sets and the document key are enforced here.
    /// Broken write-time invariants are logged and the record is returned,
    /// since access depends on `status` alone.
    fn from_document(
        uid: &UserId,
        document: serde_json::Value,
    ) -> Result<UserProfile, ProfileError> {
        let profile: UserProfile = serde_json::from_value(document).map_err(|e| {
            tracing::warn!(uid = %uid, error = %e, "Rejected malformed profile document");
            ProfileError::invalid_record(e.to_string())
        })?;

        if &profile.uid != uid {
            tracing::warn!(
                uid = %uid,
                stored_uid = %profile.uid,
                "Profile uid does not match document key"
            );
            return Err(ProfileError::invalid_record(format!(
                "document key '{}' holds profile for '{}'",
                uid, profile.uid
            )));
        }

        if let Err(e) = profile.validate() {
            tracing::warn!(
                uid = %uid,
                error = %e,
                "Stored profile breaks a write-time invariant"
            );
        }

        Ok(profile)
    }
}

fn map_store_error(uid: &UserId, err: StoreError) -> ProfileError {
    match err {
        StoreError::AlreadyExists { .. } => ProfileError::already_exists(uid.clone()),
        StoreError::NotFound { .. } => ProfileError::not_found_for_user(uid.clone()),
        StoreError::Unavailable(msg) => ProfileError::infrastructure(msg),
    }
}

#[async_trait]
impl UserProfileRepository for DocumentProfileRepository {
    async fn create(&self, profile: &UserProfile) -> Result<(), ProfileError> {
        let document = Self::to_document(profile)?;
        self.store
            .create(collections::USERS, profile.uid.as_str(), document)
            .await
            .map_err(|e| map_store_error(&profile.uid, e))?;
        tracing::info!(uid = %profile.uid, status = %profile.status, "Profile created");
        Ok(())
    }

    async fn update(&self, profile: &UserProfile) -> Result<(), ProfileError> {
        let document = Self::to_document(profile)?;
        self.store
            .replace(collections::USERS, profile.uid.as_str(), document)
            .await
            .map_err(|e| map_store_error(&profile.uid, e))?;
        tracing::info!(uid = %profile.uid, status = %profile.status, "Profile updated");
        Ok(())
    }

    async fn find_by_uid(&self, uid: &UserId) -> Result<Option<UserProfile>, ProfileError> {
        let document = self
            .store
            .get(collections::USERS, uid.as_str())
            .await
            .map_err(|e| map_store_error(uid, e))?;

        document
            .map(|doc| Self::from_document(uid, doc))
            .transpose()
    }
}
