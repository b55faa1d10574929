//! Course handlers - CRUD over the course collection.

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderName, StatusCode, header};
use axum::response::IntoResponse;

use crate::dto::{CourseListQuery, CoursePatchRequest, CourseWriteRequest};
use crate::error::HttpError;
use crate::extract::JsonOrForm;
use crate::routes::COURSES_PATH;
use crate::state::AppState;
use courses_core::Course;

/// Header carrying the number of matches before pagination.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// List courses in creation order, optionally filtered and paginated.
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<CourseListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let Query(query) = query?;
    let filter = query.filter();

    let courses = state.core.courses().list(&filter, &query.page()).await?;
    let total = state.core.courses().count(&filter).await?;

    Ok((
        [(HeaderName::from_static(TOTAL_COUNT_HEADER), total.to_string())],
        Json(courses),
    ))
}

/// Create a course.
pub async fn create(
    State(state): State<AppState>,
    JsonOrForm(req): JsonOrForm<CourseWriteRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let course = state.core.courses().create(req.into()).await?;
    let location = format!("{COURSES_PATH}/{}/", course.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(course),
    ))
}

/// Get a single course by ID.
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Course>, HttpError> {
    let Path(id) = id?;
    Ok(Json(state.core.courses().get(id).await?))
}

/// Partially update a course.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    JsonOrForm(req): JsonOrForm<CoursePatchRequest>,
) -> Result<Json<Course>, HttpError> {
    let Path(id) = id?;
    Ok(Json(state.core.courses().update(id, req.into()).await?))
}

/// Replace every writable field of a course.
pub async fn replace(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    JsonOrForm(req): JsonOrForm<CourseWriteRequest>,
) -> Result<Json<Course>, HttpError> {
    let Path(id) = id?;
    Ok(Json(state.core.courses().replace(id, req.into()).await?))
}

/// Delete a course.
pub async fn remove(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, HttpError> {
    let Path(id) = id?;
    state.core.courses().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
