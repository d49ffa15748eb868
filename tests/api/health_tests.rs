//! Health Check API Tests

use axum::http::StatusCode;

use crate::common::{response_json, TestApp};

/// Basic health check returns 200 with status and timestamp
#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["status"], "OK");

    let timestamp = json["timestamp"].as_str().expect("timestamp missing");
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

/// Liveness probe always returns 200 while the server is up
#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let response = app.get("/health/live").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["status"], "alive");
}

/// Metrics endpoint exposes request counters in Prometheus text format
#[tokio::test]
async fn test_metrics_endpoint_exposes_http_counters() {
    let app = TestApp::new();

    // Generate at least one labeled sample
    let _ = app.get("/health").await;

    let response = app.get("/metrics").await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("http_requests_total"));
}
