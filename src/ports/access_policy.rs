//! Access policy port for dashboard gating.
//!
//! The policy decides, from a profile's entitlement `status` alone, whether
//! the account may reach the dashboard. It never inspects `paymentStatus`
//! and never changes state.
//!
//! # Design
//!
//! Callers follow a **fail-secure** rule: no profile means no access.

use serde::{Deserialize, Serialize};

use crate::domain::access::{UserProfile, UserStatus};

/// Port for deciding dashboard access from a profile.
pub trait AccessPolicy: Send + Sync {
    /// Decide whether the profile's owner may access the dashboard.
    fn decide(&self, profile: &UserProfile) -> AccessResult;
}

/// Result of an access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessResult {
    /// Access is granted.
    Allowed,
    /// Access is denied with a specific reason.
    Denied(AccessDeniedReason),
}

impl AccessResult {
    /// Returns true if access is allowed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessResult::Allowed)
    }

    /// Returns true if access is denied.
    pub fn is_denied(&self) -> bool {
        matches!(self, AccessResult::Denied(_))
    }
}

/// Reason why access was denied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccessDeniedReason {
    /// User has no profile record.
    NoProfile,

    /// The profile's status is outside the permitted set.
    StatusNotPermitted {
        /// Status found on the profile.
        status: UserStatus,
    },
}

impl AccessDeniedReason {
    /// Get a user-facing message for the denial reason.
    pub fn user_message(&self) -> String {
        match self {
            AccessDeniedReason::NoProfile => {
                "An account is required to access the dashboard.".to_string()
            }
            AccessDeniedReason::StatusNotPermitted { status } => {
                format!("Accounts with status '{}' cannot access the dashboard.", status)
            }
        }
    }
}

impl std::fmt::Display for AccessDeniedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_policy_is_object_safe() {
        fn _accepts_dyn(_policy: &dyn AccessPolicy) {}
    }

    #[test]
    fn allowed_is_not_denied() {
        assert!(AccessResult::Allowed.is_allowed());
        assert!(!AccessResult::Allowed.is_denied());
    }

    #[test]
    fn denied_is_not_allowed() {
        let result = AccessResult::Denied(AccessDeniedReason::NoProfile);
        assert!(result.is_denied());
        assert!(!result.is_allowed());
    }

    #[test]
    fn denied_reason_serializes_tagged() {
        let reason = AccessDeniedReason::StatusNotPermitted {
            status: UserStatus::Suspended,
        };
        let json = serde_json::to_value(&reason).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "status_not_permitted", "status": "suspended" })
        );
    }

    #[test]
    fn user_message_names_status() {
        let reason = AccessDeniedReason::StatusNotPermitted {
            status: UserStatus::PastDue,
        };
        assert!(reason.to_string().contains("past_due"));
    }
}
