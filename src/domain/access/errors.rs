//! Profile-specific error types.
//!
//! Errors raised while creating, reading or updating user profiles.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFoundForUser | 404 |
//! | AlreadyExists | 409 |
//! | ValidationFailed | 400 |
//! | InvalidRecord | 500 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{ErrorCode, UserId, ValidationError};

/// Profile-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// No profile exists for this user.
    NotFoundForUser(UserId),

    /// A profile already exists for this user.
    AlreadyExists(UserId),

    /// A value supplied by the caller broke a record invariant.
    ValidationFailed { field: String, message: String },

    /// A stored document could not be read as a profile.
    InvalidRecord(String),

    /// Storage or other infrastructure failure.
    Infrastructure(String),
}

impl ProfileError {
    pub fn not_found_for_user(user_id: UserId) -> Self {
        ProfileError::NotFoundForUser(user_id)
    }

    pub fn already_exists(user_id: UserId) -> Self {
        ProfileError::AlreadyExists(user_id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ProfileError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn invalid_record(message: impl Into<String>) -> Self {
        ProfileError::InvalidRecord(message.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ProfileError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ProfileError::NotFoundForUser(_) => ErrorCode::ProfileNotFound,
            ProfileError::AlreadyExists(_) => ErrorCode::AlreadyExists,
            ProfileError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ProfileError::InvalidRecord(_) => ErrorCode::InvalidRecord,
            ProfileError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            ProfileError::NotFoundForUser(user_id) => {
                format!("No profile found for user: {}", user_id)
            }
            ProfileError::AlreadyExists(user_id) => {
                format!("User {} already has a profile", user_id)
            }
            ProfileError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ProfileError::InvalidRecord(msg) => format!("Stored profile is invalid: {}", msg),
            ProfileError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ProfileError {}

impl From<ValidationError> for ProfileError {
    fn from(err: ValidationError) -> Self {
        ProfileError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
