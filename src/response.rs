//! Standard response envelope: `{ "status", "message", "data"? }` on every body.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            status: true,
            message: message.into(),
            data: None,
        }
    }

    /// A failed envelope never carries data.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: message.into(),
            data: None,
        }
    }
}

pub type Envelope<T> = (StatusCode, Json<ApiResponse<T>>);

pub fn ok<T: Serialize>(message: &str, data: T) -> Envelope<T> {
    (StatusCode::OK, Json(ApiResponse::success(message, data)))
}

pub fn ok_empty(message: &str) -> Envelope<()> {
    (StatusCode::OK, Json(ApiResponse::success_empty(message)))
}

pub fn created<T: Serialize>(message: &str, data: T) -> Envelope<T> {
    (StatusCode::CREATED, Json(ApiResponse::success(message, data)))
}

pub fn created_empty(message: &str) -> Envelope<()> {
    (StatusCode::CREATED, Json(ApiResponse::success_empty(message)))
}

pub fn failure(status: StatusCode, message: String) -> Envelope<()> {
    (status, Json(ApiResponse::failure(message)))
}
