//! Router assembly.
//!
//! Merges the feature routers into one application and layers the
//! cross-cutting middleware on top.

use std::time::Duration;

use axum::Router;
use http::{HeaderName, HeaderValue, Method};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::AppConfig;

use super::cors_test::{cors_test_router, CorsTestState, DEFAULT_ALLOWED_ORIGIN};
use super::health::health_router;
use super::users::{users_router, UsersAppState};

/// Builds the full application router.
///
/// - `/api/*` carries the configured `CorsLayer` and the request timeout
/// - `/corsTest` sets its own CORS headers
/// - `/health` has no timeout
/// - every route is traced
pub fn build_router(config: &AppConfig, users_state: UsersAppState) -> Router {
    let api = users_router().with_state(users_state).layer(
        ServiceBuilder::new()
            .layer(api_cors_layer(&config.api_cors_origins()))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            ))),
    );

    let cors_test = cors_test_router().with_state(CorsTestState {
        allowed_origin: cors_test_origin(&config.access.cors_test_origin),
    });

    Router::new()
        .merge(api)
        .merge(cors_test)
        .merge(health_router())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// CORS policy for the API routes.
///
/// Origins that are not valid header values are skipped.
pub fn api_cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Skipping unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            http::header::CONTENT_TYPE,
            http::header::AUTHORIZATION,
            HeaderName::from_static("x-user-id"),
        ])
}

fn cors_test_origin(configured: &str) -> HeaderValue {
    HeaderValue::from_str(configured.trim()).unwrap_or_else(|_| {
        tracing::warn!(origin = %configured, "Invalid CORS test origin, using default");
        HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN)
    })
}
