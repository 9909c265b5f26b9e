//! Data Transfer Objects for user profile endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::CheckAccessResult;
use crate::domain::access::{PaymentStatus, Subscription, UserProfile, UserStatus};
use crate::ports::AccessDeniedReason;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create the caller's profile.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfileRequest {
    pub email: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Subscription metadata as exposed over HTTP.
///
/// Same field spelling as the stored `users` document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionResponse {
    pub tier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_period_start: Option<i64>,
    /// Epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_period_end: Option<i64>,
}

impl From<Subscription> for SubscriptionResponse {
    fn from(sub: Subscription) -> Self {
        Self {
            tier: sub.tier,
            subscription_id: sub.subscription_id,
            customer_id: sub.customer_id,
            current_period_start: sub.current_period_start.map(|t| t.as_epoch_millis()),
            current_period_end: sub.current_period_end.map(|t| t.as_epoch_millis()),
        }
    }
}

/// Profile view returned by `/api/users/me`.
///
/// Same field spelling as the stored `users` document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub uid: String,
    pub email: String,
    pub status: UserStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_approved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<SubscriptionResponse>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            uid: profile.uid.into(),
            email: profile.email,
            status: profile.status,
            payment_status: profile.payment_status,
            approval_type: profile.approval_type,
            is_approved: profile.is_approved,
            subscription: profile.subscription.map(SubscriptionResponse::from),
            created_at: profile.created_at.as_epoch_millis(),
            updated_at: profile.updated_at.as_epoch_millis(),
        }
    }
}

/// Access check response.
#[derive(Debug, Clone, Serialize)]
pub struct AccessCheckResponse {
    pub has_access: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<AccessDeniedReason>,
    /// Human-readable explanation for a denial.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<CheckAccessResult> for AccessCheckResponse {
    fn from(result: CheckAccessResult) -> Self {
        let message = result.reason.as_ref().map(|r| r.user_message());
        Self {
            has_access: result.has_access,
            status: result.status,
            reason: result.reason,
            message,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Response DTO
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        error_code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}
