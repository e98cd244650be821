//! Student endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use super::MessageResponse;
use crate::db::repos::{EnrollmentRepo, StudentRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, StudentId};
use crate::http::server::AppState;
use crate::models::{ClassResponse, StudentCreate, StudentResponse};

/// POST /students - create a student
async fn create_student(
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<StudentCreate>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    let student = StudentRepo::new(&state.pool).create(&input).await?;
    tracing::info!(student_id = student.id, "student created");

    Ok((StatusCode::CREATED, Json(student.into())))
}

/// GET /students - list all students
async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let students = StudentRepo::new(&state.pool).list().await?;
    Ok(Json(students.into_iter().map(StudentResponse::from).collect()))
}

/// GET /students/{student_id}
async fn get_student(
    State(state): State<Arc<AppState>>,
    StudentId(id): StudentId,
) -> Result<Json<StudentResponse>, ApiError> {
    let student = StudentRepo::new(&state.pool).get(id).await?;
    Ok(Json(student.into()))
}

/// PUT /students/{student_id} - replace every field
async fn update_student(
    State(state): State<Arc<AppState>>,
    StudentId(id): StudentId,
    JsonBody(input): JsonBody<StudentCreate>,
) -> Result<Json<StudentResponse>, ApiError> {
    let student = StudentRepo::new(&state.pool).update(id, &input).await?;
    tracing::info!(student_id = id, "student updated");

    Ok(Json(student.into()))
}

/// DELETE /students/{student_id}
async fn delete_student(
    State(state): State<Arc<AppState>>,
    StudentId(id): StudentId,
) -> Result<Json<MessageResponse>, ApiError> {
    StudentRepo::new(&state.pool).delete(id).await?;
    tracing::info!(student_id = id, "student deleted");

    Ok(Json(MessageResponse::new("Student deleted successfully")))
}

/// GET /students/{student_id}/classes - classes the student is enrolled in
async fn list_student_classes(
    State(state): State<Arc<AppState>>,
    StudentId(id): StudentId,
) -> Result<Json<Vec<ClassResponse>>, ApiError> {
    let classes = EnrollmentRepo::new(&state.pool)
        .classes_for_student(id)
        .await?;
    Ok(Json(classes.into_iter().map(ClassResponse::from).collect()))
}

/// Student routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/{student_id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/students/{student_id}/classes", get(list_student_classes))
}
