//! Integration tests for the health endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get};
use student_records::MemoryStudentStore;

#[tokio::test]
async fn health_returns_ok() {
    let response = get(build_test_app(MemoryStudentStore::new()), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}

#[tokio::test]
async fn ready_reports_database_ok() {
    let response = get(build_test_app(MemoryStudentStore::new()), "/ready").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["database"], "ok");
}

#[tokio::test]
async fn version_reports_crate_name() {
    let response = get(build_test_app(MemoryStudentStore::new()), "/version").await;
    let json = body_json(response).await;
    assert_eq!(json["name"], "student-records");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn unknown_route_returns_404_envelope() {
    let response = get(build_test_app(MemoryStudentStore::new()), "/courses").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["status"], false);
    assert_eq!(json["message"], "Resource not found");
    assert!(json.get("data").is_none());
}
