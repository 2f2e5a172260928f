//! Routers for health checks and student records, plus the assembled application.

mod common;
mod student;

pub use common::common_routes;
pub use student::student_routes;

use crate::response::{failure, Envelope};
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::Router;
use tower_http::trace::TraceLayer;

async fn route_not_found() -> Envelope<()> {
    failure(StatusCode::NOT_FOUND, "Resource not found".into())
}

async fn method_not_allowed() -> Envelope<()> {
    failure(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".into())
}

/// Full application: health checks and student routes, request tracing, body size limit.
/// Unmatched paths and methods answer with the failure envelope.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(student_routes(state))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}
