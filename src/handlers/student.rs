//! Student handlers: one service call each, status chosen from the service outcome.

use crate::error::AppError;
use crate::response::{created, created_empty, failure, ok, ok_empty};
use crate::state::AppState;
use crate::student::{balance_or_zero, StudentRecord};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

fn not_found(id: i64) -> Response {
    failure(StatusCode::NOT_FOUND, format!("Student with ID {} not found", id)).into_response()
}

/// GET /students and /students/all
pub async fn list_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let students = state.students.list_students().await?;
    Ok(ok("Student list fetched successfully", students))
}

/// GET /students/:id
pub async fn get_student(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    Ok(match state.students.get_student(id).await? {
        Some(student) => ok("Student fetched successfully", student).into_response(),
        None => not_found(id),
    })
}

/// POST /students/procedure
pub async fn create_with_procedure(
    State(state): State<AppState>,
    payload: Result<Json<StudentRecord>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = payload?;
    if input.id.is_some() {
        tracing::debug!("ignoring client-supplied id on create");
    }
    state.students.create_via_procedure(&input).await?;
    Ok(created_empty("Student created with procedure"))
}

/// POST /students/function
pub async fn create_with_function(
    State(state): State<AppState>,
    payload: Result<Json<StudentRecord>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(input) = payload?;
    let new_id = state.students.create_via_function(&input).await?;
    // The routine signals refusal with -1; any negative id is treated the same way.
    if new_id < 0 {
        return Ok(failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create student".into()).into_response());
    }
    tracing::info!(id = new_id, "student created via function");
    // The routine only receives id, name and balance; report exactly what it stored.
    let prepared = input.for_create();
    let student = StudentRecord {
        id: Some(new_id),
        name: prepared.name,
        balance: prepared.balance,
        ..StudentRecord::default()
    };
    Ok(created("Student created successfully", student).into_response())
}

/// DELETE /students/:id
pub async fn delete_student(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    if state.students.delete_student(id).await? {
        tracing::info!(id, "student deleted");
        Ok(ok_empty("Student deleted successfully").into_response())
    } else {
        Ok(not_found(id))
    }
}

/// PUT /students/:id. Echoes the request body with the path id and a non-absent balance.
pub async fn update_student(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<StudentRecord>, JsonRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    if !state.students.update_student(id, &input).await? {
        return Ok(not_found(id));
    }
    let echoed = StudentRecord {
        id: Some(id),
        balance: Some(balance_or_zero(input.balance)),
        ..input
    };
    Ok(ok("Student updated successfully", echoed).into_response())
}
