//! Status allow-list implementation of AccessPolicy.
//!
//! Grants dashboard access when the profile's `status` is in a configured
//! set. The default set is `premium` and `grace_period`.
//!
//! # Usage
//!
//! ```ignore
//! use dopair::adapters::access::StatusAccessPolicy;
//! use dopair::domain::access::UserStatus;
//!
//! let policy = StatusAccessPolicy::default();
//! // Or with an explicit set:
//! let policy = StatusAccessPolicy::allowing([UserStatus::Premium]);
//! ```

use std::collections::HashSet;

use crate::domain::access::{UserProfile, UserStatus};
use crate::ports::{AccessDeniedReason, AccessPolicy, AccessResult};

/// AccessPolicy that permits a fixed set of statuses.
#[derive(Debug, Clone)]
pub struct StatusAccessPolicy {
    allowed: HashSet<UserStatus>,
}

impl Default for StatusAccessPolicy {
    fn default() -> Self {
        Self::allowing(Self::DEFAULT_ALLOWED)
    }
}

impl StatusAccessPolicy {
    /// Statuses permitted when nothing is configured.
    pub const DEFAULT_ALLOWED: [UserStatus; 2] = [UserStatus::Premium, UserStatus::GracePeriod];

    /// Create a policy permitting exactly the given statuses.
    pub fn allowing(statuses: impl IntoIterator<Item = UserStatus>) -> Self {
        Self {
            allowed: statuses.into_iter().collect(),
        }
    }

    /// Returns true if the status is permitted.
    pub fn permits(&self, status: UserStatus) -> bool {
        self.allowed.contains(&status)
    }

    /// Permitted statuses in declaration order.
    pub fn allowed_statuses(&self) -> Vec<UserStatus> {
        UserStatus::ALL
            .into_iter()
            .filter(|s| self.allowed.contains(s))
            .collect()
    }
}

impl AccessPolicy for StatusAccessPolicy {
    fn decide(&self, profile: &UserProfile) -> AccessResult {
        if self.permits(profile.status) {
            AccessResult::Allowed
        } else {
            AccessResult::Denied(AccessDeniedReason::StatusNotPermitted {
                status: profile.status,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::access::PaymentStatus;
    use crate::domain::foundation::{Timestamp, UserId};

    fn profile_with(status: UserStatus) -> UserProfile {
        let mut profile = UserProfile::new(
            UserId::new("test-user-123").unwrap(),
            "t@example.com",
            Timestamp::from_epoch_millis(0).unwrap(),
        )
        .unwrap();
        profile.status = status;
        profile
    }

    #[test]
    fn default_permits_premium_and_grace_period() {
        let policy = StatusAccessPolicy::default();
        assert_eq!(
            policy.allowed_statuses(),
            vec![UserStatus::Premium, UserStatus::GracePeriod]
        );
    }

    #[test]
    fn default_allows_premium() {
        let policy = StatusAccessPolicy::default();
        assert!(policy.decide(&profile_with(UserStatus::Premium)).is_allowed());
    }

    #[test]
    fn default_allows_grace_period() {
        let policy = StatusAccessPolicy::default();
        assert!(policy.decide(&profile_with(UserStatus::GracePeriod)).is_allowed());
    }

    #[test]
    fn default_denies_suspended_with_reason() {
        let policy = StatusAccessPolicy::default();
        assert_eq!(
            policy.decide(&profile_with(UserStatus::Suspended)),
            AccessResult::Denied(AccessDeniedReason::StatusNotPermitted {
                status: UserStatus::Suspended
            })
        );
    }

    #[test]
    fn default_denies_free_and_past_due() {
        let policy = StatusAccessPolicy::default();
        assert!(policy.decide(&profile_with(UserStatus::Free)).is_denied());
        assert!(policy.decide(&profile_with(UserStatus::PastDue)).is_denied());
    }

    #[test]
    fn payment_status_is_ignored() {
        let policy = StatusAccessPolicy::default();
        let mut profile = profile_with(UserStatus::Premium);
        profile.payment_status = Some(PaymentStatus::Unpaid);
        assert!(policy.decide(&profile).is_allowed());

        let mut profile = profile_with(UserStatus::Suspended);
        profile.payment_status = Some(PaymentStatus::Active);
        assert!(policy.decide(&profile).is_denied());
    }

    #[test]
    fn approval_does_not_override_status() {
        let policy = StatusAccessPolicy::default();
        let mut profile = profile_with(UserStatus::Free);
        profile.approval_type = Some("admin".to_string());
        profile.is_approved = Some(true);
        assert!(policy.decide(&profile).is_denied());
    }

    #[test]
    fn custom_set_is_respected() {
        let policy = StatusAccessPolicy::allowing([UserStatus::Free]);
        assert!(policy.decide(&profile_with(UserStatus::Free)).is_allowed());
        assert!(policy.decide(&profile_with(UserStatus::Premium)).is_denied());
    }

    #[test]
    fn empty_set_denies_everything() {
        let policy = StatusAccessPolicy::allowing([]);
        for status in UserStatus::ALL {
            assert!(policy.decide(&profile_with(status)).is_denied());
        }
    }
}
