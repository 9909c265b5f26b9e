//! HTTP adapters - REST API implementations.
//!
//! - `cors_test` - Cross-origin smoke test for front-end deployments
//! - `health` - Liveness check
//! - `users` - Caller profile and access endpoints
//! - `router` - Assembly with CORS, timeout and trace layers

pub mod cors_test;
pub mod health;
pub mod router;
pub mod users;

// Re-export key types for convenience
pub use cors_test::{cors_test_router, CorsTestState};
pub use health::health_router;
pub use router::{api_cors_layer, build_router};
pub use users::{users_router, UsersAppState};
