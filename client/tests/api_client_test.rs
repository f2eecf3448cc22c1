//! Integration tests for the HTTP API client

use pantry_tracker_client::{AnalyticsApi, AnalyticsHook, ApiClient, ClientConfig, ClientError};
use pantry_tracker_shared::{NewWasteLog, WasteLogFilters, WasteReason};
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ClientConfig {
        base_url: format!("{}/api/", server.uri()),
        request_timeout_ms: 2_000,
    })
    .unwrap()
    .with_access_token("session-token")
}

fn metrics_json(period: u32) -> Value {
    json!({
        "period_days": period,
        "total_items_wasted": 12,
        "total_quantity": 5.5,
        "total_cost": 23.75,
        "waste_by_category": [
            { "category": "produce", "count": 7, "quantity": 3.0, "cost": 11.0 }
        ],
        "waste_by_reason": [
            { "reason": "expired", "count": 5 }
        ]
    })
}

fn waste_log_json() -> Value {
    json!({
        "id": "8a0f5a8e-51a4-4b59-9a3e-5b7c7d1e2f30",
        "user_id": "1c2d3e4f-5a6b-4c7d-8e9f-0a1b2c3d4e5f",
        "item_name": "Yogurt",
        "category": "dairy",
        "quantity": 2.0,
        "unit": "cup",
        "reason": "expired",
        "logged_at": "2026-10-10T08:30:00Z"
    })
}

fn new_log() -> NewWasteLog {
    NewWasteLog {
        item_name: "Yogurt".into(),
        category: "dairy".into(),
        quantity: 2.0,
        unit: "cup".into(),
        reason: WasteReason::Expired,
        estimated_cost: Some(1.5),
        notes: None,
        logged_at: None,
    }
}

#[tokio::test]
async fn test_get_analytics_sends_period_and_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics"))
        .and(query_param("period", "30"))
        .and(header("Authorization", "Bearer session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(metrics_json(30)))
        .expect(1)
        .mount(&server)
        .await;

    let metrics = client_for(&server).get_analytics(30).await.unwrap();

    assert_eq!(metrics.total_items_wasted, 12);
    assert_eq!(metrics.waste_by_category[0].category, "produce");
    assert_eq!(metrics.waste_by_reason[0].reason, WasteReason::Expired);
}

#[tokio::test]
async fn test_invalid_period_is_not_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server).get_analytics(0).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
}

#[tokio::test]
async fn test_long_period_is_sent_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics"))
        .and(query_param("period", "400"))
        .respond_with(ResponseTemplate::new(200).set_body_json(metrics_json(400)))
        .expect(1)
        .mount(&server)
        .await;

    let metrics = client_for(&server).get_analytics(400).await.unwrap();
    assert_eq!(metrics.period_days, 400);
}

#[tokio::test]
async fn test_get_waste_logs_passes_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/waste-logs"))
        .and(query_param("category", "dairy"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([waste_log_json()])))
        .expect(1)
        .mount(&server)
        .await;

    let filters = WasteLogFilters {
        category: Some("dairy".into()),
        limit: Some(5),
        ..Default::default()
    };
    let logs = client_for(&server).get_waste_logs(&filters).await.unwrap();

    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].item_name, "Yogurt");
}

#[tokio::test]
async fn test_api_error_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/category-insights"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "Unauthorized" })))
        .mount(&server)
        .await;

    match client_for(&server).get_category_insights().await {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Unauthorized");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_error_body_falls_back_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/category-insights"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    match client_for(&server).get_category_insights().await {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 502);
            assert_eq!(message, "Request failed with status 502");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_get_waste_reduction() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/waste-reduction"))
        .and(query_param("days", "14"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "days": 14,
            "current_period_count": 3,
            "previous_period_count": 6,
            "reduction_percentage": 50.0,
            "trend": "improving"
        })))
        .mount(&server)
        .await;

    let reduction = client_for(&server).get_waste_reduction(14).await.unwrap();
    assert_eq!(reduction.previous_period_count, 6);
}

#[tokio::test]
async fn test_hook_refetches_after_create() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics"))
        .and(query_param("period", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(metrics_json(7)))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/waste-logs"))
        .and(body_partial_json(json!({ "item_name": "Yogurt", "reason": "expired" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(waste_log_json()))
        .expect(1)
        .mount(&server)
        .await;

    let mut hook = AnalyticsHook::mount(Arc::new(client_for(&server)), 7).await;
    let created = hook.create_waste_log(&new_log()).await.unwrap();

    assert_eq!(created.category, "dairy");
    assert_eq!(hook.data().unwrap().period_days, 7);
}

#[tokio::test]
async fn test_hook_stores_http_failure_as_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({ "error": "Service unavailable" })))
        .mount(&server)
        .await;

    let hook = AnalyticsHook::mount(Arc::new(client_for(&server)), 30).await;

    assert!(hook.data().is_none());
    assert_eq!(hook.error().as_deref(), Some("Service unavailable"));
}
