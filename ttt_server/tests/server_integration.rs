//! Integration tests for the HTTP surface: health checks, static fallback,
//! and WebSocket upgrade requirements.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tictactoe::CoordinatorConfig;
use tower::ServiceExt; // For `oneshot` method
use ttt_server::api::{AppState, create_router};

/// Helper to create a router backed by a live coordinator
fn create_test_server() -> (axum::Router, AppState) {
    let state = AppState::launch(CoordinatorConfig::default(), 10);
    let app = create_router(state.clone(), "tests/does-not-exist");
    (app, state)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check_endpoint() {
    let (app, _) = create_test_server();

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["players"], 0);
    assert_eq!(json["activeGames"], 0);
    assert_eq!(json["connections"], 0);
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_health_check_reports_unavailable_coordinator() {
    let (app, state) = create_test_server();
    state.coordinator.close().await.unwrap();

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = body_json(response).await;
    assert_eq!(json["status"], "unhealthy");
}

#[tokio::test]
async fn test_health_check_allows_cross_origin() {
    let (app, _) = create_test_server();

    let request = Request::builder()
        .uri("/health")
        .header("Origin", "http://example.com")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin")
    );
}

// ============================================================================
// Routing Tests
// ============================================================================

#[tokio::test]
async fn test_missing_static_file_is_not_found() {
    let (app, _) = create_test_server();

    let request = Request::builder()
        .uri("/nope.html")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bundled_client_is_served() {
    let state = AppState::launch(CoordinatorConfig::default(), 10);
    let app = create_router(state, concat!(env!("CARGO_MANIFEST_DIR"), "/public"));

    let request = Request::builder()
        .uri("/index.html")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_websocket_route_requires_upgrade() {
    let (app, _) = create_test_server();

    let request = Request::builder()
        .uri("/ws")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(
        response.status().is_client_error(),
        "Plain GET on /ws should be rejected, got: {}",
        response.status()
    );
}
