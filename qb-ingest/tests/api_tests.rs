//! Integration tests for qb-ingest API endpoints
//!
//! Tests cover:
//! - Health endpoint
//! - Allowed point listing and point snapping
//! - Assignee resolution tiers over HTTP
//! - Quest normalization and its error responses

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use qb_ingest::services::QuestNormalizer;
use qb_ingest::{bind_listener, build_router, AppState};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: Create app with default points of 10
fn setup_app() -> axum::Router {
    let normalizer = QuestNormalizer::new(10).expect("10 is an allowed point value");
    build_router(AppState::new(normalizer))
}

/// Test helper: Create GET request
fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: Create POST request with JSON body
fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

fn family() -> Value {
    json!([
        {"id": "a", "display_name": "Al"},
        {"id": "b", "display_name": "Alice"},
        {"id": "c", "display_name": "Alexandra", "nickname": "Lexi"}
    ])
}

// =============================================================================
// Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let response = setup_app().oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "qb-ingest");
    assert!(body["version"].is_string());
}

// =============================================================================
// Point Tests
// =============================================================================

#[tokio::test]
async fn test_list_allowed_points() {
    let response = setup_app().oneshot(get_request("/api/points")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["allowed_points"], json!([5, 10, 15, 20, 25, 50]));
    assert_eq!(body["default_points"], 10);
}

#[tokio::test]
async fn test_snap_tie_goes_to_lower_point() {
    let request = post_json("/api/points/snap", json!({"value": 7.5}));
    let response = setup_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["points"], 5);
}

#[tokio::test]
async fn test_snap_out_of_range_values() {
    for (value, expected) in [(-12.0, 5), (0.0, 5), (42.0, 50), (10000.0, 50)] {
        let request = post_json("/api/points/snap", json!({"value": value}));
        let response = setup_app().oneshot(request).await.unwrap();
        let body = extract_json(response.into_body()).await;
        assert_eq!(body["points"], expected, "value {}", value);
    }
}

#[tokio::test]
async fn test_snap_rejects_non_numeric_value() {
    let request = post_json("/api/points/snap", json!({"value": "ten"}));
    let response = setup_app().oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"]["code"], "MALFORMED_BODY");
}

// =============================================================================
// Assignee Resolution Tests
// =============================================================================

#[tokio::test]
async fn test_resolve_exact_beats_substring() {
    let request = post_json(
        "/api/assignees/resolve",
        json!({"name": "Al", "members": family()}),
    );
    let response = setup_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["member_id"], "a");
    assert_eq!(body["tier"], "exact");
}

#[tokio::test]
async fn test_resolve_prefix_and_nickname() {
    let request = post_json(
        "/api/assignees/resolve",
        json!({"name": "ALEX", "members": family()}),
    );
    let body = extract_json(setup_app().oneshot(request).await.unwrap().into_body()).await;
    assert_eq!(body["member_id"], "c");
    assert_eq!(body["tier"], "prefix");

    let request = post_json(
        "/api/assignees/resolve",
        json!({"name": "lexi", "members": family()}),
    );
    let body = extract_json(setup_app().oneshot(request).await.unwrap().into_body()).await;
    assert_eq!(body["member_id"], "c");
    assert_eq!(body["tier"], "exact");
}

#[tokio::test]
async fn test_resolve_missing_name_is_no_match() {
    for payload in [
        json!({"members": family()}),
        json!({"name": null, "members": family()}),
        json!({"name": "", "members": family()}),
        json!({"name": "Zoe", "members": family()}),
        json!({"name": "Alice", "members": []}),
    ] {
        let request = post_json("/api/assignees/resolve", payload.clone());
        let response = setup_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = extract_json(response.into_body()).await;
        assert!(body["member_id"].is_null(), "payload {}", payload);
        assert!(body["tier"].is_null());
    }
}

// =============================================================================
// Quest Normalization Tests
// =============================================================================

#[tokio::test]
async fn test_normalize_quest() {
    let request = post_json(
        "/api/quests/normalize",
        json!({
            "quest": {
                "title": "Unload the dishwasher",
                "points": "about 22 points",
                "assignee": "ice",
                "time_of_day": "morning",
                "recurrence": "daily"
            },
            "members": family()
        }),
    );
    let response = setup_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["title"], "Unload the dishwasher");
    assert_eq!(body["points"], 20);
    assert_eq!(body["assigned_to"], "b");
    assert_eq!(body["time_of_day"], "morning");
    assert_eq!(body["recurrence"], "daily");
    assert_eq!(body["resolution"]["points_candidate"], 22.0);
    assert_eq!(body["resolution"]["points_defaulted"], false);
    assert_eq!(body["resolution"]["assignee_tier"], "substring");
}

#[tokio::test]
async fn test_normalize_defaults() {
    let request = post_json(
        "/api/quests/normalize",
        json!({"quest": {"title": "Make the bed"}}),
    );
    let response = setup_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["points"], 10);
    assert!(body["assigned_to"].is_null());
    assert_eq!(body["time_of_day"], "anytime");
    assert_eq!(body["recurrence"], "once");
    assert_eq!(body["resolution"]["points_defaulted"], true);
}

#[tokio::test]
async fn test_normalize_blank_title_is_bad_request() {
    let request = post_json(
        "/api/quests/normalize",
        json!({"quest": {"title": "   ", "points": 10}, "members": family()}),
    );
    let response = setup_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_normalize_unknown_recurrence_is_rejected() {
    let request = post_json(
        "/api/quests/normalize",
        json!({"quest": {"title": "Mow lawn", "recurrence": "hourly"}}),
    );
    let response = setup_app().oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

// =============================================================================
// Listener Tests
// =============================================================================

#[tokio::test]
async fn test_bind_listener_reports_ephemeral_port() {
    let (listener, addr) = bind_listener("127.0.0.1:0").await.unwrap();

    assert_ne!(addr.port(), 0);
    assert_eq!(listener.local_addr().unwrap(), addr);
}

#[tokio::test]
async fn test_bind_listener_rejects_bad_address() {
    let err = bind_listener("not-an-address").await.unwrap_err();
    assert!(err.to_string().contains("not-an-address"));
}
