//! HTTP handlers for user profile endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequestParts, Json, State};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::{
    CheckAccessHandler, CheckAccessQuery, CreateProfileCommand, CreateProfileHandler,
    GetProfileHandler, GetProfileQuery,
};
use crate::domain::access::ProfileError;
use crate::domain::foundation::UserId;
use crate::ports::{AccessPolicy, UserProfileRepository};

use super::dto::{AccessCheckResponse, CreateProfileRequest, ErrorResponse, ProfileResponse};

/// Header carrying the caller's uid, set by the authenticating proxy.
pub const USER_ID_HEADER: &str = "X-User-Id";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the user endpoints.
#[derive(Clone)]
pub struct UsersAppState {
    pub profile_repository: Arc<dyn UserProfileRepository>,
    pub access_policy: Arc<dyn AccessPolicy>,
}

impl UsersAppState {
    pub fn new(
        profile_repository: Arc<dyn UserProfileRepository>,
        access_policy: Arc<dyn AccessPolicy>,
    ) -> Self {
        Self {
            profile_repository,
            access_policy,
        }
    }

    pub fn create_profile_handler(&self) -> CreateProfileHandler {
        CreateProfileHandler::new(self.profile_repository.clone())
    }

    pub fn get_profile_handler(&self) -> GetProfileHandler {
        GetProfileHandler::new(self.profile_repository.clone())
    }

    pub fn check_access_handler(&self) -> CheckAccessHandler {
        CheckAccessHandler::new(self.profile_repository.clone(), self.access_policy.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Caller Identity
// ════════════════════════════════════════════════════════════════════════════════

/// Caller identity extracted from the `X-User-Id` header.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Rejection type for AuthenticatedUser extraction.
pub struct AuthenticationRequired;

impl IntoResponse for AuthenticationRequired {
    fn into_response(self) -> Response {
        let error = ErrorResponse::new("AUTHENTICATION_REQUIRED", "Authentication is required");
        (StatusCode::UNAUTHORIZED, Json(error)).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthenticationRequired;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| UserId::new(s).ok())
            .ok_or(AuthenticationRequired)?;

        Ok(AuthenticatedUser { user_id })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/users/me - Get the caller's profile
pub async fn get_my_profile(
    State(state): State<UsersAppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, UsersApiError> {
    let handler = state.get_profile_handler();
    let profile = handler
        .handle(GetProfileQuery {
            uid: user.user_id,
        })
        .await?;

    Ok(Json(ProfileResponse::from(profile)))
}

/// POST /api/users/me - Create the caller's profile on first sign-in
pub async fn create_my_profile(
    State(state): State<UsersAppState>,
    user: AuthenticatedUser,
    payload: Result<Json<CreateProfileRequest>, JsonRejection>,
) -> Result<impl IntoResponse, UsersApiError> {
    let Json(request) = payload?;
    let handler = state.create_profile_handler();
    let cmd = CreateProfileCommand {
        uid: user.user_id,
        email: request.email,
    };

    let result = handler.handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(ProfileResponse::from(result.profile))))
}

/// GET /api/users/me/access - Check dashboard access
pub async fn check_my_access(
    State(state): State<UsersAppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, UsersApiError> {
    let handler = state.check_access_handler();
    let result = handler
        .handle(CheckAccessQuery {
            uid: user.user_id,
        })
        .await?;

    Ok(Json(AccessCheckResponse::from(result)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts profile errors to HTTP responses.
#[derive(Debug)]
pub struct UsersApiError(ProfileError);

impl From<ProfileError> for UsersApiError {
    fn from(err: ProfileError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for UsersApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(ProfileError::validation("body", rejection.body_text()))
    }
}

impl IntoResponse for UsersApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0 {
            ProfileError::NotFoundForUser(_) => (StatusCode::NOT_FOUND, "PROFILE_NOT_FOUND"),
            ProfileError::AlreadyExists(_) => (StatusCode::CONFLICT, "PROFILE_EXISTS"),
            ProfileError::ValidationFailed { .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_FAILED")
            }
            ProfileError::InvalidRecord(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INVALID_RECORD")
            }
            ProfileError::Infrastructure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, code = %self.0.code(), "Profile request failed");
        }

        let body = match &self.0 {
            ProfileError::ValidationFailed { field, .. } => ErrorResponse::with_details(
                error_code,
                self.0.message(),
                serde_json::json!({ "field": field }),
            ),
            _ => ErrorResponse::new(error_code, self.0.message()),
        };
        (status, Json(body)).into_response()
    }
}
