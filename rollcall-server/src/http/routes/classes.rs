//! Class endpoints, including enrollment

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use super::MessageResponse;
use crate::db::repos::{ClassRepo, EnrollmentRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ClassId, JsonBody, StudentId};
use crate::http::server::AppState;
use crate::models::{ClassCreate, ClassResponse, StudentResponse};

/// POST /classes - create a class
async fn create_class(
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<ClassCreate>,
) -> Result<(StatusCode, Json<ClassResponse>), ApiError> {
    let class = ClassRepo::new(&state.pool).create(&input).await?;
    tracing::info!(class_id = class.id, "class created");

    Ok((StatusCode::CREATED, Json(class.into())))
}

/// GET /classes - list all classes
async fn list_classes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ClassResponse>>, ApiError> {
    let classes = ClassRepo::new(&state.pool).list().await?;
    Ok(Json(classes.into_iter().map(ClassResponse::from).collect()))
}

/// GET /classes/{class_id}
async fn get_class(
    State(state): State<Arc<AppState>>,
    ClassId(id): ClassId,
) -> Result<Json<ClassResponse>, ApiError> {
    let class = ClassRepo::new(&state.pool).get(id).await?;
    Ok(Json(class.into()))
}

/// DELETE /classes/{class_id} - enrollments go with it
async fn delete_class(
    State(state): State<Arc<AppState>>,
    ClassId(id): ClassId,
) -> Result<Json<MessageResponse>, ApiError> {
    ClassRepo::new(&state.pool).delete(id).await?;
    tracing::info!(class_id = id, "class deleted");

    Ok(Json(MessageResponse::new("Class deleted successfully")))
}

/// POST /classes/{class_id}/students/{student_id} - register a student
async fn register_student(
    State(state): State<Arc<AppState>>,
    ClassId(class_id): ClassId,
    StudentId(student_id): StudentId,
) -> Result<Json<MessageResponse>, ApiError> {
    EnrollmentRepo::new(&state.pool)
        .enroll(class_id, student_id)
        .await?;
    tracing::info!(class_id, student_id, "student registered");

    Ok(Json(MessageResponse::new(format!(
        "Student {} registered to Class {}",
        student_id, class_id
    ))))
}

/// GET /classes/{class_id}/students - students enrolled in a class
async fn list_class_students(
    State(state): State<Arc<AppState>>,
    ClassId(class_id): ClassId,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let students = EnrollmentRepo::new(&state.pool)
        .students_in_class(class_id)
        .await?;
    Ok(Json(students.into_iter().map(StudentResponse::from).collect()))
}

/// Class routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/classes", get(list_classes).post(create_class))
        .route("/classes/{class_id}", get(get_class).delete(delete_class))
        .route("/classes/{class_id}/students", get(list_class_students))
        .route(
            "/classes/{class_id}/students/{student_id}",
            post(register_student),
        )
}
