#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use student_records::{app, AppState, MemoryStudentStore, Student};
use tower::ServiceExt;

pub const TEST_BODY_LIMIT: usize = 64 * 1024;

/// Build the application router over an in-memory store, with the same layers `main` uses.
pub fn build_test_app(store: MemoryStudentStore) -> Router {
    app(AppState::new(Arc::new(store)), TEST_BODY_LIMIT)
}

pub fn student(id: i64, name: &str, balance: Option<Decimal>) -> Student {
    Student {
        id,
        name: Some(name.to_string()),
        major: Some("Informatics".to_string()),
        gpa: Some(3.5),
        birth_date: chrono::NaiveDate::from_ymd_opt(2002, 8, 17),
        balance,
    }
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body.to_string())).await
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<String>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
