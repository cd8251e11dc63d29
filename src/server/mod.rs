pub mod cors;
pub mod error;
pub mod handlers;
pub mod types;

use crate::server::cors::permissive_cors;
use crate::server::handlers::{analyze_handler, not_found_handler};
use crate::server::types::AppState;
use crate::utils::constants::SERVER_REQUEST_BODY_LIMIT;
use axum::{Router, middleware, routing::post};
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/analyze",
            post(analyze_handler).fallback(not_found_handler),
        )
        .fallback(not_found_handler)
        .layer(middleware::from_fn(permissive_cors))
        .layer(RequestBodyLimitLayer::new(SERVER_REQUEST_BODY_LIMIT))
        .with_state(state)
}

#[cfg(test)]
mod cfg_tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use reqwest::Client;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn test_state(api_key: &str, api_url: &str) -> Arc<AppState> {
        Arc::new(AppState {
            http_client: Client::new(),
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn analyze_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_json_body_is_400() {
        let router = build_router(test_state("test-key", "http://127.0.0.1:9"));
        let response = router.oneshot(analyze_request("not json {")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body, json!({"error": "Invalid JSON body"}));
    }

    #[tokio::test]
    async fn test_missing_api_key_is_500() {
        let router = build_router(test_state("", "http://127.0.0.1:9"));
        let response = router
            .oneshot(analyze_request(r#"{"type":"text","content":"hello"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(
            body,
            json!({"error": "ANTHROPIC_API_KEY environment variable not set"})
        );
    }

    #[tokio::test]
    async fn test_invalid_body_wins_over_missing_key() {
        // body parse order matches the upstream gate order: 400 first
        let router = build_router(test_state("", "http://127.0.0.1:9"));
        let response = router.oneshot(analyze_request("{{{{")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let router = build_router(test_state("test-key", "http://127.0.0.1:9"));
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/other")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body, json!({"error": "Not found"}));
    }

    #[tokio::test]
    async fn test_wrong_method_on_analyze_is_404() {
        let router = build_router(test_state("test-key", "http://127.0.0.1:9"));
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/analyze")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_options_is_204_on_any_path() {
        let router = build_router(test_state("test-key", "http://127.0.0.1:9"));
        for uri in ["/api/analyze", "/", "/nowhere"] {
            let response = router
                .clone()
                .oneshot(
                    Request::builder()
                        .method("OPTIONS")
                        .uri(uri)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NO_CONTENT);
            assert_eq!(
                response
                    .headers()
                    .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                    .unwrap(),
                "*"
            );
            assert_eq!(
                response
                    .headers()
                    .get(header::ACCESS_CONTROL_ALLOW_METHODS)
                    .unwrap(),
                "POST, OPTIONS"
            );
            assert_eq!(
                response
                    .headers()
                    .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
                    .unwrap(),
                "Content-Type, Authorization"
            );
            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            assert!(bytes.is_empty());
        }
    }

    #[tokio::test]
    async fn test_cors_headers_on_error_responses() {
        let router = build_router(test_state("test-key", "http://127.0.0.1:9"));
        let response = router.oneshot(analyze_request("nope")).await.unwrap();
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_502() {
        // port 9 (discard) refuses connections, so the transport fails fast
        let router = build_router(test_state("test-key", "http://127.0.0.1:9"));
        let response = router
            .oneshot(analyze_request(r#"{"type":"text","content":"hello"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        let message = body["error"].as_str().unwrap();
        assert!(message.starts_with("API request failed:"), "{message}");
    }
}
