//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Field '{field}' has unknown value '{value}'")]
    UnknownVariant { field: String, value: String },

    #[error("'{start}' must not be after '{end}'")]
    InvertedRange { start: String, end: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an error for a value outside a closed enumeration.
    pub fn unknown_variant(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::UnknownVariant {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates an error for a range whose start lies after its end.
    pub fn inverted_range(start: impl Into<String>, end: impl Into<String>) -> Self {
        ValidationError::InvertedRange {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::UnknownVariant { field, .. } => field,
            ValidationError::InvertedRange { start, .. } => start,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    InvalidRecord,

    // Not found errors
    ProfileNotFound,

    // Conflict errors
    AlreadyExists,

    // Infrastructure errors
    StorageError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidRecord => "INVALID_RECORD",
            ErrorCode::ProfileNotFound => "PROFILE_NOT_FOUND",
            ErrorCode::AlreadyExists => "ALREADY_EXISTS",
            ErrorCode::StorageError => "STORAGE_ERROR",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("email");
        assert_eq!(format!("{}", err), "Field 'email' cannot be empty");
    }

    #[test]
    fn validation_error_unknown_variant_displays_correctly() {
        let err = ValidationError::unknown_variant("status", "gold");
        assert_eq!(format!("{}", err), "Field 'status' has unknown value 'gold'");
    }

    #[test]
    fn validation_error_inverted_range_displays_correctly() {
        let err = ValidationError::inverted_range("currentPeriodStart", "currentPeriodEnd");
        assert_eq!(
            format!("{}", err),
            "'currentPeriodStart' must not be after 'currentPeriodEnd'"
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::AlreadyExists), "ALREADY_EXISTS");
        assert_eq!(format!("{}", ErrorCode::StorageError), "STORAGE_ERROR");
    }
}
