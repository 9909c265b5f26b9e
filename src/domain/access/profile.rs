//! User profile record.
//!
//! The profile is the document stored under the `users` collection, keyed by
//! the account uid. It combines the entitlement status with optional billing
//! and manual-approval data.
//!
//! # Design Decisions
//!
//! - **Status is authoritative**: access decisions read `status` only
//! - **Independent optionals**: payment status, approval and subscription
//!   are each absent until something writes them
//! - **No transition table**: setters record whatever the caller decided
//! - **Epoch millis**: every timestamp is stored as an integer

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId, ValidationError};

use super::{PaymentStatus, Subscription, UserStatus};

/// A user's access-state record.
///
/// # Invariants
///
/// - `email` is non-empty and contains `@`
/// - `created_at <= updated_at`
/// - an attached subscription satisfies [`Subscription::validate`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub uid: UserId,

    pub email: String,

    /// Entitlement state consulted by access control.
    pub status: UserStatus,

    /// Last state reported by the billing processor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,

    /// How a manual approval was granted (e.g. "admin", "beta").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_approved: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Subscription>,

    pub created_at: Timestamp,

    pub updated_at: Timestamp,
}

impl UserProfile {
    /// Creates the profile written on first sign-up.
    ///
    /// New profiles are `free` with every optional field absent.
    pub fn new(
        uid: UserId,
        email: impl Into<String>,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let profile = Self {
            uid,
            email: email.into(),
            status: UserStatus::Free,
            payment_status: None,
            approval_type: None,
            is_approved: None,
            subscription: None,
            created_at: now,
            updated_at: now,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Checks every record invariant.
    ///
    /// Writers must call this before persisting. Readers only log a
    /// failure, since stored documents may have been written elsewhere.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if !email.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing '@'"));
        }
        if let Some(approval_type) = &self.approval_type {
            if approval_type.trim().is_empty() {
                return Err(ValidationError::empty_field("approvalType"));
            }
        }
        if self.created_at > self.updated_at {
            return Err(ValidationError::inverted_range("createdAt", "updatedAt"));
        }
        if let Some(subscription) = &self.subscription {
            subscription.validate()?;
        }
        Ok(())
    }

    /// Records a new entitlement status.
    ///
    /// Any status may follow any other; deactivation is `Suspended`.
    pub fn set_status(&mut self, status: UserStatus, now: Timestamp) {
        self.status = status;
        self.touch(now);
    }

    /// Records (or clears) the processor-reported payment status.
    pub fn set_payment_status(&mut self, payment_status: Option<PaymentStatus>, now: Timestamp) {
        self.payment_status = payment_status;
        self.touch(now);
    }

    /// Records a manual approval decision.
    pub fn set_approval(
        &mut self,
        approval_type: impl Into<String>,
        is_approved: bool,
        now: Timestamp,
    ) -> Result<(), ValidationError> {
        let approval_type = approval_type.into();
        if approval_type.trim().is_empty() {
            return Err(ValidationError::empty_field("approvalType"));
        }
        self.approval_type = Some(approval_type);
        self.is_approved = Some(is_approved);
        self.touch(now);
        Ok(())
    }

    /// Attaches subscription metadata after validating its period.
    ///
    /// # Errors
    ///
    /// Returns error and leaves the profile untouched if the subscription is invalid.
    pub fn set_subscription(
        &mut self,
        subscription: Subscription,
        now: Timestamp,
    ) -> Result<(), ValidationError> {
        subscription.validate()?;
        self.subscription = Some(subscription);
        self.touch(now);
        Ok(())
    }

    /// Removes subscription metadata.
    pub fn clear_subscription(&mut self, now: Timestamp) {
        self.subscription = None;
        self.touch(now);
    }

    fn touch(&mut self, now: Timestamp) {
        self.updated_at = now.max(self.created_at);
    }
}
