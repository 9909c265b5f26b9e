//! GetProfileHandler - Query handler for reading a user's profile.

use std::sync::Arc;

use crate::domain::access::{ProfileError, UserProfile};
use crate::domain::foundation::UserId;
use crate::ports::UserProfileRepository;

/// Query to fetch a profile.
#[derive(Debug, Clone)]
pub struct GetProfileQuery {
    pub uid: UserId,
}

/// Handler for fetching profiles.
pub struct GetProfileHandler {
    repository: Arc<dyn UserProfileRepository>,
}

impl GetProfileHandler {
    pub fn new(repository: Arc<dyn UserProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetProfileQuery) -> Result<UserProfile, ProfileError> {
        self.repository
            .find_by_uid(&query.uid)
            .await?
            .ok_or(ProfileError::NotFoundForUser(query.uid))
    }
}
