//! Course endpoints

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
use crate::db::{finish, Course};
use crate::http::error::ApiError;
use crate::http::extractors::{EntityId, Resource};
use crate::http::server::AppState;
use crate::models::CoursePayload;

const NO_COURSES: &str = "No courses found";
const COURSE_NOT_FOUND: &str = "Course not found";
const COURSE_IN_USE: &str = "Course still has enrolled students";

struct Courses;

impl Resource for Courses {
    const NOT_FOUND: &'static str = COURSE_NOT_FOUND;
}

/// Course response
#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: i32,
    pub mata_kuliah: String,
}

impl From<Course> for CourseResponse {
    fn from(c: Course) -> Self {
        Self {
            id: c.id,
            mata_kuliah: c.mata_kuliah,
        }
    }
}

/// GET /courses - list all courses, 404 when there are none
async fn list_courses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CourseResponse>>, ApiError> {
    let mut uow = state.store.begin().await?;
    let result = uow.list_courses().await;
    let courses = finish(uow, result).await?;

    if courses.is_empty() {
        return Err(ApiError::not_found(NO_COURSES));
    }

    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// GET /courses/{id}
async fn get_course(
    State(state): State<Arc<AppState>>,
    EntityId(id, _): EntityId<Courses>,
) -> Result<Json<CourseResponse>, ApiError> {
    let mut uow = state.store.begin().await?;
    let result = uow.get_course(id).await;
    let course = finish(uow, result)
        .await?
        .ok_or_else(|| ApiError::not_found(COURSE_NOT_FOUND))?;

    Ok(Json(CourseResponse::from(course)))
}

/// POST /courses
async fn create_course(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(value) = body?;
    let payload = CoursePayload::from_json(value)?;
    let title = payload.into_title()?;

    let mut uow = state.store.begin().await?;
    let result = uow.insert_course(&title).await;
    let course = finish(uow, result).await?;

    tracing::info!(id = course.id, "course created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Course created successfully",
            id: course.id,
        }),
    ))
}

/// PUT /courses/{id}
async fn update_course(
    State(state): State<Arc<AppState>>,
    EntityId(id, _): EntityId<Courses>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut uow = state.store.begin().await?;

    let result: Result<(), ApiError> = async {
        let mut course = uow
            .get_course(id)
            .await?
            .ok_or_else(|| ApiError::not_found(COURSE_NOT_FOUND))?;

        let Json(value) = body?;
        let payload = CoursePayload::from_json(value)?;
        if let Some(title) = payload.into_patch()? {
            course.mata_kuliah = title.into_string();
            uow.update_course(&course).await?;
        }
        Ok(())
    }
    .await;
    finish(uow, result).await?;

    Ok(Json(MessageResponse::new("Course updated successfully")))
}

/// DELETE /courses/{id}
async fn delete_course(
    State(state): State<Arc<AppState>>,
    EntityId(id, _): EntityId<Courses>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut uow = state.store.begin().await?;
    let result = match uow.delete_course(id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(ApiError::not_found(COURSE_NOT_FOUND)),
        Err(e) if e.is_foreign_key_violation() => Err(ApiError::conflict(COURSE_IN_USE)),
        Err(e) => Err(ApiError::from(e)),
    };
    finish(uow, result).await?;

    tracing::info!(id, "course deleted");
    Ok(Json(MessageResponse::new("Course deleted successfully")))
}

/// Course routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/courses", get(list_courses).post(create_course))
        .route(
            "/courses/{id}",
            get(get_course).put(update_course).delete(delete_course),
        )
}
