//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use lru_cache_server::{api::create_router, AppState, Cache, Config, LruCache};
use serde_json::{json, Value};
use tower::ServiceExt;

// == Helper Functions ==

fn create_app(capacity: usize) -> (Router, Arc<LruCache<Value>>) {
    let cache = Arc::new(LruCache::new(capacity));
    let state = AppState::new(cache.clone(), Config::default());
    (create_router(state), cache)
}

fn create_test_app() -> Router {
    create_app(100).0
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

// == SET Endpoint Tests ==

#[tokio::test]
async fn test_set_endpoint_success() {
    let app = create_test_app();

    let (status, json) = send(
        &app,
        "POST",
        "/api/cache",
        Some(json!({"key": "test_key", "value": "test_value", "expiry": 0})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"status": "success"}));
}

#[tokio::test]
async fn test_set_endpoint_accepts_structured_values() {
    let app = create_test_app();
    let value = json!({"user": {"id": 7, "tags": ["a", "b"]}});

    let (status, _) = send(
        &app,
        "POST",
        "/api/cache",
        Some(json!({"key": "doc", "value": value, "expiry": 60})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = send(&app, "GET", "/api/cache/doc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["value"], value);
    assert!(json["data"]["expiry"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_invalid_json_request() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/cache")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"invalid json"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["error"], "Invalid JSON format");
}

#[tokio::test]
async fn test_validation_errors() {
    let app = create_test_app();

    let cases = [
        (json!({"key": "", "value": "v", "expiry": 0}), "Key cannot be empty"),
        (json!({"key": "k", "value": "", "expiry": 0}), "Value cannot be empty"),
        (json!({"key": "k", "expiry": 0}), "Value cannot be empty"),
        (
            json!({"key": "k", "value": "v", "expiry": 86_400}),
            "Expiry must be in range 0 - 86400",
        ),
        (
            json!({"key": "k", "value": "v", "expiry": -1}),
            "Expiry must be in range 0 - 86400",
        ),
    ];

    for (body, message) in cases {
        let (status, json) = send(&app, "POST", "/api/cache", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], message);
    }

    let (_, json) = send(&app, "GET", "/api/cache", None).await;
    assert_eq!(json["data"], json!([]));
}

// == GET Endpoint Tests ==

#[tokio::test]
async fn test_get_endpoint_success() {
    let app = create_test_app();

    send(
        &app,
        "POST",
        "/api/cache",
        Some(json!({"key": "get_key", "value": "get_value", "expiry": 0})),
    )
    .await;

    let (status, json) = send(&app, "GET", "/api/cache/get_key", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({"data": {"key": "get_key", "value": "get_value", "expiry": 0}})
    );
}

#[tokio::test]
async fn test_get_endpoint_not_found() {
    let app = create_test_app();

    let (status, json) = send(&app, "GET", "/api/cache/nonexistent_key", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_get_all_endpoint() {
    let app = create_test_app();

    let (status, json) = send(&app, "GET", "/api/cache", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"data": []}));

    for (key, value) in [("b", 2), ("a", 1)] {
        send(
            &app,
            "POST",
            "/api/cache",
            Some(json!({"key": key, "value": value, "expiry": 0})),
        )
        .await;
    }

    let (_, json) = send(&app, "GET", "/api/cache", None).await;
    assert_eq!(
        json["data"],
        json!([
            {"key": "a", "value": 1, "expiry": 0},
            {"key": "b", "value": 2, "expiry": 0}
        ])
    );
}

// == Eviction and Expiry via API ==

#[tokio::test]
async fn test_lru_eviction_via_api() {
    let (app, _) = create_app(2);

    for key in ["a", "b"] {
        send(
            &app,
            "POST",
            "/api/cache",
            Some(json!({"key": key, "value": key, "expiry": 0})),
        )
        .await;
    }
    let (status, _) = send(&app, "GET", "/api/cache/a", None).await;
    assert_eq!(status, StatusCode::OK);

    send(
        &app,
        "POST",
        "/api/cache",
        Some(json!({"key": "c", "value": "c", "expiry": 0})),
    )
    .await;

    let (status, _) = send(&app, "GET", "/api/cache/b", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "GET", "/api/cache/a", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "GET", "/api/cache/c", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_listing_does_not_refresh_recency() {
    let (app, _) = create_app(2);

    for key in ["a", "b"] {
        send(
            &app,
            "POST",
            "/api/cache",
            Some(json!({"key": key, "value": 1, "expiry": 0})),
        )
        .await;
    }
    send(&app, "GET", "/api/cache", None).await;
    send(
        &app,
        "POST",
        "/api/cache",
        Some(json!({"key": "c", "value": 1, "expiry": 0})),
    )
    .await;

    let (status, _) = send(&app, "GET", "/api/cache/a", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_expired_entry_via_api() {
    let (app, cache) = create_app(10);

    // Entries already past their expiry can only be written through the engine
    let past = lru_cache_server::cache::current_timestamp() - 1;
    cache.set("stale".to_string(), json!("old"), past).unwrap();
    cache.set("fresh".to_string(), json!("new"), 0).unwrap();

    let (_, json) = send(&app, "GET", "/api/cache", None).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["key"], "fresh");

    let (status, _) = send(&app, "GET", "/api/cache/stale", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(cache.len(), 1);
}

// == DELETE Endpoint Tests ==

#[tokio::test]
async fn test_delete_endpoint_success() {
    let app = create_test_app();

    send(
        &app,
        "POST",
        "/api/cache",
        Some(json!({"key": "delete_key", "value": "delete_value", "expiry": 0})),
    )
    .await;

    let (status, json) = send(&app, "DELETE", "/api/cache/delete_key", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"status": "success"}));

    let (status, _) = send(&app, "GET", "/api/cache/delete_key", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_endpoint_not_found() {
    let app = create_test_app();

    let (status, json) = send(&app, "DELETE", "/api/cache/nonexistent_key", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Key not found: nonexistent_key");
}

// == CLEAR Endpoint Tests ==

#[tokio::test]
async fn test_clear_endpoint() {
    let (app, cache) = create_app(10);
    cache.set("a".to_string(), json!(1), 0).unwrap();
    cache.set("b".to_string(), json!(2), 0).unwrap();

    let (status, json) = send(&app, "DELETE", "/api/cache", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"status": "success"}));
    assert!(cache.is_empty());

    // Clearing an empty cache still succeeds
    let (status, _) = send(&app, "DELETE", "/api/cache", None).await;
    assert_eq!(status, StatusCode::OK);
}

// == HEALTH Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let (status, json) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}
