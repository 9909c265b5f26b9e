//! Account entitlement status.
//!
//! `UserStatus` is the single value access-control logic consults. It is
//! deliberately separate from [`PaymentStatus`](super::PaymentStatus): the
//! billing processor's view of an account may lag behind, or be overridden
//! by, the entitlement recorded here.
//!
//! Transitions between statuses are owned by the billing and admin
//! collaborators that write profiles. No transition table lives here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Current entitlement state of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// Signed up, no paid entitlement. Every new profile starts here.
    #[default]
    Free,

    /// Paid entitlement in good standing.
    Premium,

    /// Latest payment failed; entitlement not yet resolved.
    PastDue,

    /// Payment lapsed but access continues pending resolution.
    GracePeriod,

    /// Account deactivated.
    Suspended,
}

impl UserStatus {
    /// Every member of the closed set, in declaration order.
    pub const ALL: [UserStatus; 5] = [
        UserStatus::Free,
        UserStatus::Premium,
        UserStatus::PastDue,
        UserStatus::GracePeriod,
        UserStatus::Suspended,
    ];

    /// Returns the persisted literal for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Free => "free",
            UserStatus::Premium => "premium",
            UserStatus::PastDue => "past_due",
            UserStatus::GracePeriod => "grace_period",
            UserStatus::Suspended => "suspended",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_variant("status", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_is_free() {
        assert_eq!(UserStatus::default(), UserStatus::Free);
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&UserStatus::GracePeriod).unwrap(),
            "\"grace_period\""
        );
        assert_eq!(
            serde_json::to_string(&UserStatus::PastDue).unwrap(),
            "\"past_due\""
        );
    }

    #[test]
    fn serde_form_matches_as_str() {
        for status in UserStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn deserialize_rejects_unknown_literal() {
        let result: Result<UserStatus, _> = serde_json::from_str("\"gold\"");
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_is_case_sensitive() {
        let result: Result<UserStatus, _> = serde_json::from_str("\"Premium\"");
        assert!(result.is_err());
    }

    #[test]
    fn from_str_parses_every_literal() {
        for status in UserStatus::ALL {
            assert_eq!(status.as_str().parse::<UserStatus>().unwrap(), status);
        }
    }

    #[test]
    fn from_str_rejects_unknown_literal() {
        let err = "active".parse::<UserStatus>().unwrap_err();
        assert_eq!(err, ValidationError::unknown_variant("status", "active"));
    }
}
