//! Handlers for the `/courses` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use lingo_core::error::CoreError;
use lingo_core::types::DbId;
use lingo_db::models::course::{Course, CreateCourse, UpdateCourse};
use lingo_db::repositories::{CountsRepo, CourseRepo};
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::ListParams;
use crate::response::{DataResponse, PageResponse, Pagination};
use crate::state::AppState;

/// A course plus the number of units directly under it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseWithCount {
    #[serde(flatten)]
    pub course: Course,
    pub unit_count: i64,
}

/// POST /api/v1/courses
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateCourse>,
) -> AppResult<(StatusCode, Json<DataResponse<Course>>)> {
    input.validate()?;
    let course = CourseRepo::create(&state.pool, &input, user.user_id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: course })))
}

/// GET /api/v1/courses
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<PageResponse<CourseWithCount>>> {
    let courses = CourseRepo::list(
        &state.pool,
        params.search(),
        params.is_active,
        params.limit(),
        params.offset(),
    )
    .await?;
    let total = CourseRepo::count(&state.pool, params.search(), params.is_active).await?;

    let ids: Vec<DbId> = courses.iter().map(|c| c.id).collect();
    let counts = CountsRepo::units_per_course(&state.pool, &ids).await?;

    let data = courses
        .into_iter()
        .map(|course| CourseWithCount {
            unit_count: counts.get(&course.id).copied().unwrap_or(0),
            course,
        })
        .collect();

    Ok(Json(PageResponse {
        data,
        pagination: Pagination::new(total, params.page(), params.limit()),
    }))
}

/// GET /api/v1/courses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Course>>> {
    let course = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    Ok(Json(DataResponse { data: course }))
}

/// PUT /api/v1/courses/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCourse>,
) -> AppResult<Json<DataResponse<Course>>> {
    input.validate()?;
    let course = CourseRepo::update(&state.pool, id, &input, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    Ok(Json(DataResponse { data: course }))
}

/// DELETE /api/v1/courses/{id}
///
/// Removes the course and its entire subtree (units, topics, groups,
/// sessions) via the cascading foreign keys.
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CourseRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))
    }
}
