//! CORS test endpoint.
//!
//! Lets front-end deployments confirm that cross-origin requests from the
//! app domain reach the backend with credentials allowed. Headers are set
//! explicitly on every response, independent of the `CorsLayer` guarding
//! the API routes.

use axum::extract::State;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS,
    ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN,
};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Json, Router};
use serde::Serialize;

/// Origin advertised when nothing else is configured.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://dopair.app";

const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// State for the CORS test route.
#[derive(Clone)]
pub struct CorsTestState {
    pub allowed_origin: HeaderValue,
}

impl Default for CorsTestState {
    fn default() -> Self {
        Self {
            allowed_origin: HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN),
        }
    }
}

/// Body returned for non-preflight requests.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CorsTestResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

/// ANY /corsTest
///
/// `OPTIONS` answers the preflight with an empty 200; every other method
/// echoes the caller's `Origin` header back in the body.
pub async fn cors_test(
    State(state): State<CorsTestState>,
    method: Method,
    headers: HeaderMap,
) -> Response {
    let mut response = if method == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        let origin = headers
            .get(ORIGIN)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        tracing::debug!(origin = ?origin, %method, "CORS test request");

        let body = CorsTestResponse {
            message: "CORS test successful".to_string(),
            origin,
        };
        (StatusCode::OK, Json(body)).into_response()
    };

    let response_headers = response.headers_mut();
    response_headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, state.allowed_origin);
    response_headers.insert(
        ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    response_headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    response_headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );

    response
}

/// Creates the CORS test router.
///
/// Routes:
/// - `ANY /corsTest`
pub fn cors_test_router() -> Router<CorsTestState> {
    Router::new().route("/corsTest", any(cors_test))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn app() -> Router {
        cors_test_router().with_state(CorsTestState::default())
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    fn assert_cors_headers(response: &Response) {
        let headers = response.headers();
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], "https://dopair.app");
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_METHODS], "GET, POST, OPTIONS");
        assert_eq!(
            headers[ACCESS_CONTROL_ALLOW_HEADERS],
            "Content-Type, Authorization"
        );
    }

    #[tokio::test]
    async fn options_returns_empty_ok_with_headers() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/corsTest")
                    .header(ORIGIN, "https://evil.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors_headers(&response);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn get_echoes_origin() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/corsTest")
                    .header(ORIGIN, "https://x.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors_headers(&response);
        let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"message": "CORS test successful", "origin": "https://x.com"})
        );
    }

    #[tokio::test]
    async fn missing_origin_omits_key() {
        for method in [Method::GET, Method::POST] {
            let response = app()
                .oneshot(
                    Request::builder()
                        .method(method.clone())
                        .uri("/corsTest")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            assert_cors_headers(&response);
            let bytes = body_bytes(response).await;
            let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(
                json,
                serde_json::json!({"message": "CORS test successful"}),
                "{method} without Origin"
            );
        }
    }

    #[tokio::test]
    async fn allowed_origin_does_not_depend_on_request() {
        for method in [Method::GET, Method::PUT, Method::DELETE] {
            let response = app()
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri("/corsTest")
                        .header(ORIGIN, "https://other.example")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            assert_cors_headers(&response);
        }
    }
}
