//! ApplyBillingState - Command handler recording billing-derived state.
//!
//! Billing webhook processors decide the new entitlement status themselves
//! and hand it here. This handler validates and stores; it does not judge
//! whether the change is a legal transition.

use std::sync::Arc;

use crate::domain::access::{PaymentStatus, ProfileError, Subscription, UserProfile, UserStatus};
use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::UserProfileRepository;

/// Command to record billing state on a profile.
///
/// `payment_status` and `subscription` replace the stored values when
/// `Some` and leave them untouched when `None`.
#[derive(Debug, Clone)]
pub struct ApplyBillingStateCommand {
    pub uid: UserId,
    pub status: UserStatus,
    pub payment_status: Option<PaymentStatus>,
    pub subscription: Option<Subscription>,
}

/// Result of applying billing state.
#[derive(Debug, Clone)]
pub struct ApplyBillingStateResult {
    pub previous_status: UserStatus,
    pub profile: UserProfile,
}

/// Handler for recording billing state.
pub struct ApplyBillingStateHandler {
    repository: Arc<dyn UserProfileRepository>,
}

impl ApplyBillingStateHandler {
    pub fn new(repository: Arc<dyn UserProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: ApplyBillingStateCommand,
    ) -> Result<ApplyBillingStateResult, ProfileError> {
        let mut profile = self
            .repository
            .find_by_uid(&cmd.uid)
            .await?
            .ok_or_else(|| ProfileError::not_found_for_user(cmd.uid.clone()))?;

        let previous_status = profile.status;
        let now = Timestamp::now();

        // Subscription first: an invalid period must abort before any field changes
        if let Some(subscription) = cmd.subscription {
            profile.set_subscription(subscription, now)?;
        }
        if let Some(payment_status) = cmd.payment_status {
            profile.set_payment_status(Some(payment_status), now);
        }
        profile.set_status(cmd.status, now);

        self.repository.update(&profile).await?;

        tracing::info!(
            uid = %cmd.uid,
            from = %previous_status,
            to = %profile.status,
            payment_status = ?profile.payment_status,
            "Billing state applied"
        );

        Ok(ApplyBillingStateResult {
            previous_status,
            profile,
        })
    }
}
