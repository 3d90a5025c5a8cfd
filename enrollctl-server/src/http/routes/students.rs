//! Student endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use super::{CreatedResponse, MessageResponse};
use crate::db::{finish, Student};
use crate::http::error::ApiError;
use crate::http::extractors::{EntityId, Resource};
use crate::http::server::AppState;
use crate::models::StudentPayload;

const NO_STUDENTS: &str = "No students found";
const STUDENT_NOT_FOUND: &str = "Student not found";
const STUDENT_ENROLLED: &str = "Student is still enrolled in one or more courses";

struct Students;

impl Resource for Students {
    const NOT_FOUND: &'static str = STUDENT_NOT_FOUND;
}

/// Student response
#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub id: i32,
    pub name: String,
}

impl From<Student> for StudentResponse {
    fn from(s: Student) -> Self {
        Self {
            id: s.id,
            name: s.name,
        }
    }
}

/// GET /students - list all students, 404 when there are none
async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let mut uow = state.store.begin().await?;
    let result = uow.list_students().await;
    let students = finish(uow, result).await?;

    if students.is_empty() {
        return Err(ApiError::not_found(NO_STUDENTS));
    }

    Ok(Json(students.into_iter().map(StudentResponse::from).collect()))
}

/// GET /students/{id} - get a single student
async fn get_student(
    State(state): State<Arc<AppState>>,
    EntityId(id, _): EntityId<Students>,
) -> Result<Json<StudentResponse>, ApiError> {
    let mut uow = state.store.begin().await?;
    let result = uow.get_student(id).await;
    let student = finish(uow, result)
        .await?
        .ok_or_else(|| ApiError::not_found(STUDENT_NOT_FOUND))?;

    Ok(Json(StudentResponse::from(student)))
}

/// POST /students - create a student
async fn create_student(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(value) = body?;
    let payload = StudentPayload::from_json(value)?;
    let name = payload.into_name()?;

    let mut uow = state.store.begin().await?;
    let result = uow.insert_student(&name).await;
    let student = finish(uow, result).await?;

    tracing::info!(id = student.id, "student created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Student created successfully",
            id: student.id,
        }),
    ))
}

/// PUT /students/{id} - rename a student
async fn update_student(
    State(state): State<Arc<AppState>>,
    EntityId(id, _): EntityId<Students>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut uow = state.store.begin().await?;

    let result: Result<(), ApiError> = async {
        let mut student = uow
            .get_student(id)
            .await?
            .ok_or_else(|| ApiError::not_found(STUDENT_NOT_FOUND))?;

        let Json(value) = body?;
        let payload = StudentPayload::from_json(value)?;
        if let Some(name) = payload.into_patch()? {
            student.name = name.into_string();
            uow.update_student(&student).await?;
        }
        Ok(())
    }
    .await;
    finish(uow, result).await?;

    Ok(Json(MessageResponse::new("Student updated successfully")))
}

/// DELETE /students/{id} - delete a student with no enrollments
async fn delete_student(
    State(state): State<Arc<AppState>>,
    EntityId(id, _): EntityId<Students>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut uow = state.store.begin().await?;
    let result = match uow.delete_student(id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(ApiError::not_found(STUDENT_NOT_FOUND)),
        Err(e) if e.is_foreign_key_violation() => Err(ApiError::conflict(STUDENT_ENROLLED)),
        Err(e) => Err(ApiError::from(e)),
    };
    finish(uow, result).await?;

    tracing::info!(id, "student deleted");
    Ok(Json(MessageResponse::new("Student deleted successfully")))
}

/// Student routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
}
