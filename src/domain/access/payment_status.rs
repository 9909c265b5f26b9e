//! Billing processor payment status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Last-known payment state reported by the billing processor.
///
/// Independent of [`UserStatus`](super::UserStatus); any combination of the
/// two is a valid record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Active,
    PastDue,
    Canceled,
    Unpaid,
}

impl PaymentStatus {
    /// Every member of the closed set, in declaration order.
    pub const ALL: [PaymentStatus; 4] = [
        PaymentStatus::Active,
        PaymentStatus::PastDue,
        PaymentStatus::Canceled,
        PaymentStatus::Unpaid,
    ];

    /// Returns the persisted literal for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Active => "active",
            PaymentStatus::PastDue => "past_due",
            PaymentStatus::Canceled => "canceled",
            PaymentStatus::Unpaid => "unpaid",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_variant("paymentStatus", s))
    }
}
