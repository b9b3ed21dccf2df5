mod helpers;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use finsight::domain::JobId;
use finsight::infrastructure::observability::REQUEST_ID_HEADER;
use finsight::infrastructure::report::MockReportGenerator;

use helpers::{GatedReportGenerator, TEST_MAX_JOBS};

async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

fn analyze_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn given_running_server_when_health_check_then_returns_healthy() {
    let (app, _) = helpers::create_test_app(
        Arc::new(MockReportGenerator::new(Duration::ZERO)),
        TEST_MAX_JOBS,
    );

    let (status, body) = send(&app, get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["active_jobs"], 0);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn given_valid_company_when_analyzing_then_running_then_completed() {
    let (generator, gate) = GatedReportGenerator::new();
    let (app, store) = helpers::create_test_app(Arc::new(generator), TEST_MAX_JOBS);

    let (status, body) = send(
        &app,
        analyze_request(json!({"company_input": "Apple", "sector": "Technology"})),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["status"], "started");
    let job_id = body["job_id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, get(&format!("/api/status/{}", job_id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert_eq!(body["company_input"], "Apple");
    assert_eq!(body["sector"], "Technology");
    assert!(body.get("result").is_none());
    assert!(body.get("error").is_none());

    let (_, health) = send(&app, get("/api/health")).await;
    assert_eq!(health["active_jobs"], 1);

    gate.send(true).unwrap();
    helpers::wait_for_terminal(&store, job_id.parse::<JobId>().unwrap()).await;

    let (status, body) = send(&app, get(&format!("/api/status/{}", job_id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "completed");
    assert!(!body["result"].as_str().unwrap().is_empty());
    assert!(body.get("error").is_none());
    assert!(body["finished_at"].is_string());
}

#[tokio::test]
async fn given_failing_generator_when_polling_then_reports_error() {
    let (app, store) = helpers::create_test_app(
        Arc::new(MockReportGenerator::failing(Duration::ZERO, "upstream timeout")),
        TEST_MAX_JOBS,
    );

    let (_, body) = send(&app, analyze_request(json!({"company_input": "TSLA"}))).await;
    let job_id = body["job_id"].as_str().unwrap().to_string();
    helpers::wait_for_terminal(&store, job_id.parse::<JobId>().unwrap()).await;

    let (status, body) = send(&app, get(&format!("/api/status/{}", job_id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "failed");
    assert!(body["error"].as_str().unwrap().contains("upstream timeout"));
    assert!(body.get("result").is_none());
    assert_eq!(body["sector"], Value::Null);
}

#[tokio::test]
async fn given_blank_company_when_analyzing_then_bad_request_and_no_job() {
    let (app, store) = helpers::create_test_app(
        Arc::new(MockReportGenerator::new(Duration::ZERO)),
        TEST_MAX_JOBS,
    );

    let (status, body) = send(&app, analyze_request(json!({"company_input": "   "}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Company input is required");
    assert!(body.get("job_id").is_none());
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn given_missing_or_malformed_body_when_analyzing_then_bad_request() {
    let (app, store) = helpers::create_test_app(
        Arc::new(MockReportGenerator::new(Duration::ZERO)),
        TEST_MAX_JOBS,
    );

    let (status, _) = send(&app, analyze_request(json!({"sector": "Retail"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let malformed = Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, malformed).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn given_unknown_job_when_polling_then_not_found() {
    let (app, _) = helpers::create_test_app(
        Arc::new(MockReportGenerator::new(Duration::ZERO)),
        TEST_MAX_JOBS,
    );
    send(&app, analyze_request(json!({"company_input": "Apple"}))).await;

    let (status, body) = send(&app, get("/api/status/does-not-exist")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (status, _) = send(&app, get(&format!("/api/status/{}", JobId::new()))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_full_store_when_analyzing_then_service_unavailable() {
    let (generator, _gate) = GatedReportGenerator::new();
    let (app, store) = helpers::create_test_app(Arc::new(generator), 1);

    let (status, _) = send(&app, analyze_request(json!({"company_input": "Apple"}))).await;
    assert_eq!(status, StatusCode::ACCEPTED);

    let (status, body) = send(&app, analyze_request(json!({"company_input": "Tesla"}))).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].is_string());
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn given_two_submissions_when_listing_jobs_then_both_listed_with_distinct_ids() {
    let (generator, _gate) = GatedReportGenerator::new();
    let (app, _) = helpers::create_test_app(Arc::new(generator), TEST_MAX_JOBS);

    let (_, first) = send(&app, analyze_request(json!({"company_input": "Apple"}))).await;
    let (_, second) = send(
        &app,
        analyze_request(json!({"company_input": "Tesla", "sector": "Automotive"})),
    )
    .await;
    assert_ne!(first["job_id"], second["job_id"]);

    let (status, body) = send(&app, get("/api/jobs")).await;
    assert_eq!(status, StatusCode::OK);
    let jobs = body["jobs"].as_array().unwrap();
    assert_eq!(jobs.len(), 2);
    assert!(jobs.iter().all(|job| job["status"] == "running"));
    assert!(jobs.iter().any(|job| job["sector"] == "Automotive"));
}

#[tokio::test]
async fn given_request_id_header_when_calling_api_then_echoes_it() {
    let (app, _) = helpers::create_test_app(
        Arc::new(MockReportGenerator::new(Duration::ZERO)),
        TEST_MAX_JOBS,
    );

    let request = Request::builder()
        .uri("/api/health")
        .header(REQUEST_ID_HEADER, "req-123")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-123");

    let response = app.oneshot(get("/api/health")).await.unwrap();
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
}
