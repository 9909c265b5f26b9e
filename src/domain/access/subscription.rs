//! Subscription metadata embedded in a user profile.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, ValidationError};

/// Billing subscription attached to a profile.
///
/// # Invariants
///
/// - `tier` is non-empty
/// - `current_period_start <= current_period_end` when both are present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Tier name, usually one of [`access_levels`](super::access_levels).
    pub tier: String,

    /// Billing processor subscription id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,

    /// Billing processor customer id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_period_start: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_period_end: Option<Timestamp>,
}

impl Subscription {
    /// Creates a subscription with only a tier set.
    pub fn new(tier: impl Into<String>) -> Self {
        Self {
            tier: tier.into(),
            subscription_id: None,
            customer_id: None,
            current_period_start: None,
            current_period_end: None,
        }
    }

    /// Sets the processor ids.
    pub fn with_ids(
        mut self,
        subscription_id: impl Into<String>,
        customer_id: impl Into<String>,
    ) -> Self {
        self.subscription_id = Some(subscription_id.into());
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Sets the current billing period.
    pub fn with_period(mut self, start: Timestamp, end: Timestamp) -> Self {
        self.current_period_start = Some(start);
        self.current_period_end = Some(end);
        self
    }

    /// Checks the subscription invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.tier.trim().is_empty() {
            return Err(ValidationError::empty_field("subscription.tier"));
        }
        if let (Some(start), Some(end)) = (self.current_period_start, self.current_period_end) {
            if start > end {
                return Err(ValidationError::inverted_range(
                    "subscription.currentPeriodStart",
                    "subscription.currentPeriodEnd",
                ));
            }
        }
        Ok(())
    }
}
