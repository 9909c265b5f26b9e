//! CreateProfile - Command handler for creating user profiles on first sign-up.

use std::sync::Arc;

use crate::domain::access::{ProfileError, UserProfile};
use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::UserProfileRepository;

/// Command to create a new user profile.
#[derive(Debug, Clone)]
pub struct CreateProfileCommand {
    pub uid: UserId,
    pub email: String,
}

/// Result of successful profile creation.
#[derive(Debug, Clone)]
pub struct CreateProfileResult {
    pub profile: UserProfile,
}

/// Handler for creating profiles.
pub struct CreateProfileHandler {
    repository: Arc<dyn UserProfileRepository>,
}

impl CreateProfileHandler {
    pub fn new(repository: Arc<dyn UserProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateProfileCommand,
    ) -> Result<CreateProfileResult, ProfileError> {
        // 1. Reject duplicates before building anything
        if self.repository.exists(&cmd.uid).await? {
            return Err(ProfileError::already_exists(cmd.uid));
        }

        // 2. New profiles start free with no billing data
        let profile = UserProfile::new(cmd.uid, cmd.email.trim(), Timestamp::now())?;

        // 3. Persist; the repository still guards against a racing create
        self.repository.create(&profile).await?;

        Ok(CreateProfileResult { profile })
    }
}
