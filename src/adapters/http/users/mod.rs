//! HTTP adapter for user profile endpoints.
//!
//! - `GET /api/users/me` - Caller's profile
//! - `POST /api/users/me` - Create caller's profile
//! - `GET /api/users/me/access` - Dashboard access check

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{
    AccessCheckResponse, CreateProfileRequest, ErrorResponse, ProfileResponse,
    SubscriptionResponse,
};
pub use handlers::{AuthenticatedUser, AuthenticationRequired, UsersApiError, UsersAppState};
pub use routes::users_router;
