//! Student record routes.

use crate::handlers::student::{
    create_with_function, create_with_procedure, delete_student, get_student, list_students, update_student,
};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn student_routes(state: AppState) -> Router {
    Router::new()
        .route("/students", get(list_students))
        .route("/students/all", get(list_students))
        .route("/students/procedure", post(create_with_procedure))
        .route("/students/function", post(create_with_function))
        .route(
            "/students/:id",
            get(get_student).put(update_student).delete(delete_student),
        )
        .with_state(state)
}
