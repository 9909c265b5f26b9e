//! SetApproval - Command handler for the manual-approval path.

use std::sync::Arc;

use crate::domain::access::{ProfileError, UserProfile};
use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::UserProfileRepository;

/// Command to record a manual approval decision.
#[derive(Debug, Clone)]
pub struct SetApprovalCommand {
    pub uid: UserId,
    pub approval_type: String,
    pub is_approved: bool,
}

/// Handler for recording approvals. Leaves `status` untouched.
pub struct SetApprovalHandler {
    repository: Arc<dyn UserProfileRepository>,
}

impl SetApprovalHandler {
    pub fn new(repository: Arc<dyn UserProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SetApprovalCommand) -> Result<UserProfile, ProfileError> {
        let mut profile = self
            .repository
            .find_by_uid(&cmd.uid)
            .await?
            .ok_or_else(|| ProfileError::not_found_for_user(cmd.uid.clone()))?;

        profile.set_approval(cmd.approval_type, cmd.is_approved, Timestamp::now())?;
        self.repository.update(&profile).await?;

        tracing::info!(
            uid = %cmd.uid,
            approval_type = ?profile.approval_type,
            is_approved = cmd.is_approved,
            "Approval recorded"
        );

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::profile::DocumentProfileRepository;
    use crate::adapters::storage::InMemoryDocumentStore;
    use crate::domain::access::UserStatus;

    async fn setup() -> SetApprovalHandler {
        let repo = Arc::new(DocumentProfileRepository::new(Arc::new(
            InMemoryDocumentStore::new(),
        )));
        let profile =
            UserProfile::new(UserId::new("u1").unwrap(), "u1@example.com", Timestamp::now())
                .unwrap();
        repo.create(&profile).await.unwrap();
        SetApprovalHandler::new(repo)
    }

    #[tokio::test]
    async fn records_approval_without_changing_status() {
        let handler = setup().await;
        let profile = handler
            .handle(SetApprovalCommand {
                uid: UserId::new("u1").unwrap(),
                approval_type: "admin".to_string(),
                is_approved: true,
            })
            .await
            .unwrap();

        assert_eq!(profile.approval_type.as_deref(), Some("admin"));
        assert_eq!(profile.is_approved, Some(true));
        assert_eq!(profile.status, UserStatus::Free);
    }

    #[tokio::test]
    async fn blank_approval_type_is_rejected() {
        let handler = setup().await;
        let err = handler
            .handle(SetApprovalCommand {
                uid: UserId::new("u1").unwrap(),
                approval_type: "  ".to_string(),
                is_approved: true,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ProfileError::ValidationFailed { .. }));
    }
}
