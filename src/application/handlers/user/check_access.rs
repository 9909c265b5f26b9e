//! CheckAccessHandler - Query handler for dashboard gating.

use std::sync::Arc;

use crate::domain::access::{ProfileError, UserStatus};
use crate::domain::foundation::UserId;
use crate::ports::{AccessDeniedReason, AccessPolicy, AccessResult, UserProfileRepository};

/// Query to check if a user may reach the dashboard.
#[derive(Debug, Clone)]
pub struct CheckAccessQuery {
    pub uid: UserId,
}

/// Result of access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckAccessResult {
    /// Whether the user has access.
    pub has_access: bool,
    /// Status the decision was based on; `None` when no profile exists.
    pub status: Option<UserStatus>,
    /// Why access was denied, if it was.
    pub reason: Option<AccessDeniedReason>,
}

/// Handler for checking user access.
///
/// Fail-secure: a missing profile is a denial, not an error.
pub struct CheckAccessHandler {
    repository: Arc<dyn UserProfileRepository>,
    policy: Arc<dyn AccessPolicy>,
}

impl CheckAccessHandler {
    pub fn new(
        repository: Arc<dyn UserProfileRepository>,
        policy: Arc<dyn AccessPolicy>,
    ) -> Self {
        Self { repository, policy }
    }

    pub async fn handle(
        &self,
        query: CheckAccessQuery,
    ) -> Result<CheckAccessResult, ProfileError> {
        let Some(profile) = self.repository.find_by_uid(&query.uid).await? else {
            tracing::debug!(uid = %query.uid, "Access denied: no profile");
            return Ok(CheckAccessResult {
                has_access: false,
                status: None,
                reason: Some(AccessDeniedReason::NoProfile),
            });
        };

        let result = match self.policy.decide(&profile) {
            AccessResult::Allowed => CheckAccessResult {
                has_access: true,
                status: Some(profile.status),
                reason: None,
            },
            AccessResult::Denied(reason) => CheckAccessResult {
                has_access: false,
                status: Some(profile.status),
                reason: Some(reason),
            },
        };

        tracing::debug!(
            uid = %query.uid,
            status = %profile.status,
            has_access = result.has_access,
            "Access checked"
        );

        Ok(result)
    }
}
