//! Route configuration for user profile endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{check_my_access, create_my_profile, get_my_profile, UsersAppState};

/// Creates the user profile router.
///
/// Routes:
/// - `GET /api/users/me` - Caller's profile
/// - `POST /api/users/me` - Create caller's profile
/// - `GET /api/users/me/access` - Dashboard access check
pub fn users_router() -> Router<UsersAppState> {
    Router::new()
        .route("/api/users/me", get(get_my_profile).post(create_my_profile))
        .route("/api/users/me/access", get(check_my_access))
}
