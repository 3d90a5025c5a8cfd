//! Enrollment endpoints
//!
//! Each handler runs in its own unit of work and closes it through
//! [`finish`]. A foreign key violation on create or update is reported as
//! 404 "Student or Course not found".

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use super::{CreatedResponse, MessageResponse};
use crate::db::{finish, DbError, EnrollmentDetail};
use crate::http::error::ApiError;
use crate::http::extractors::{EntityId, Resource};
use crate::http::server::AppState;
use crate::models::EnrollmentPayload;

const NO_ENROLLMENTS: &str = "No enrollments found";
const ENROLLMENT_NOT_FOUND: &str = "Enrollment not found";
const REFERENCE_NOT_FOUND: &str = "Student or Course not found";

struct Enrollments;

impl Resource for Enrollments {
    const NOT_FOUND: &'static str = ENROLLMENT_NOT_FOUND;
}

/// Enrollment list item with denormalized names
#[derive(Debug, Serialize)]
pub struct EnrollmentResponse {
    pub id: i32,
    pub student_name: String,
    pub course_name: String,
    pub course_id: i32,
    pub student_id: i32,
}

impl From<EnrollmentDetail> for EnrollmentResponse {
    fn from(e: EnrollmentDetail) -> Self {
        Self {
            id: e.id,
            student_name: e.student_name,
            course_name: e.course_name,
            course_id: e.course_id,
            student_id: e.student_id,
        }
    }
}

fn missing_reference(e: DbError) -> ApiError {
    if e.is_foreign_key_violation() {
        tracing::debug!(error = %e, "enrollment references a missing student or course");
        ApiError::not_found(REFERENCE_NOT_FOUND)
    } else {
        ApiError::from(e)
    }
}

/// GET /enrollments - list all enrollments, 404 when there are none
async fn list_enrollments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EnrollmentResponse>>, ApiError> {
    let mut uow = state.store.begin().await?;
    let result = uow.list_enrollments().await;
    let rows = finish(uow, result).await?;

    if rows.is_empty() {
        return Err(ApiError::not_found(NO_ENROLLMENTS));
    }

    Ok(Json(rows.into_iter().map(EnrollmentResponse::from).collect()))
}

/// POST /enrollments - enroll a student in a course
async fn create_enrollment(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(value) = body?;
    let payload = EnrollmentPayload::from_json(value)?;
    let new = payload.into_new()?;

    let mut uow = state.store.begin().await?;
    let result = uow.insert_enrollment(new).await;
    let enrollment = finish(uow, result).await.map_err(missing_reference)?;

    tracing::info!(
        id = enrollment.id,
        student_id = enrollment.student_id,
        course_id = enrollment.course_id,
        "enrollment created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Enrollment created successfully",
            id: enrollment.id,
        }),
    ))
}

/// PUT /enrollments/{id} - change student and/or course of an enrollment
async fn update_enrollment(
    State(state): State<Arc<AppState>>,
    EntityId(id, _): EntityId<Enrollments>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut uow = state.store.begin().await?;

    // Existence is checked before the body is looked at.
    let result: Result<(), ApiError> = async {
        let mut enrollment = uow
            .get_enrollment(id)
            .await?
            .ok_or_else(|| ApiError::not_found(ENROLLMENT_NOT_FOUND))?;

        let Json(value) = body?;
        let payload = EnrollmentPayload::from_json(value)?;
        let patch = payload.into_patch()?;
        if patch.is_empty() {
            return Ok(());
        }

        enrollment.apply(patch);
        uow.update_enrollment(&enrollment)
            .await
            .map_err(missing_reference)
    }
    .await;
    finish(uow, result).await?;

    tracing::info!(id, "enrollment updated");
    Ok(Json(MessageResponse::new("Enrollment updated successfully")))
}

/// DELETE /enrollments/{id} - remove an enrollment
async fn delete_enrollment(
    State(state): State<Arc<AppState>>,
    EntityId(id, _): EntityId<Enrollments>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut uow = state.store.begin().await?;
    let result = match uow.delete_enrollment(id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(ApiError::not_found(ENROLLMENT_NOT_FOUND)),
        Err(e) => Err(ApiError::from(e)),
    };
    finish(uow, result).await?;

    tracing::info!(id, "enrollment deleted");
    Ok(Json(MessageResponse::new("Enrollment deleted successfully")))
}

/// Enrollment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/enrollments", get(list_enrollments).post(create_enrollment))
        .route(
            "/enrollments/{id}",
            put(update_enrollment).delete(delete_enrollment),
        )
}
