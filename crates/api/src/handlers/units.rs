//! Handlers for the `/units` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use lingo_core::error::CoreError;
use lingo_core::types::DbId;
use lingo_db::models::unit::{CreateUnit, Unit, UpdateUnit};
use lingo_db::repositories::{CountsRepo, UnitRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::{ReorderRequest, ReorderResult};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, PageResponse, Pagination};
use crate::state::AppState;

/// Query parameters for `GET /units`.
///
/// Declared field-by-field rather than flattening `ListParams`: axum's
/// `Query` deserializer cannot route typed fields through `#[serde(flatten)]`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitListParams {
    pub course_id: Option<DbId>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub is_active: Option<bool>,
}

impl UnitListParams {
    fn base(&self) -> crate::query::ListParams {
        crate::query::ListParams {
            page: self.page,
            limit: self.limit,
            search: self.search.clone(),
            is_active: self.is_active,
        }
    }
}

/// A unit plus the number of topics directly under it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitWithCount {
    #[serde(flatten)]
    pub unit: Unit,
    pub topic_count: i64,
}

/// POST /api/v1/units
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateUnit>,
) -> AppResult<(StatusCode, Json<DataResponse<Unit>>)> {
    input.validate()?;
    let unit = UnitRepo::create(&state.pool, &input, user.user_id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: unit })))
}

/// GET /api/v1/units
///
/// With `?courseId=` the response is that course's units in sequence order
/// (no pagination); without it, a paginated global listing newest-first.
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<UnitListParams>,
) -> AppResult<axum::response::Response> {
    use axum::response::IntoResponse;

    if let Some(course_id) = params.course_id {
        let units = UnitRepo::list_by_course(&state.pool, course_id, params.is_active).await?;
        let data = with_counts(&state, units).await?;
        return Ok(Json(DataResponse { data }).into_response());
    }

    let base = params.base();
    let units = UnitRepo::list(
        &state.pool,
        base.search(),
        base.is_active,
        base.limit(),
        base.offset(),
    )
    .await?;
    let total = UnitRepo::count(&state.pool, base.search(), base.is_active).await?;
    let data = with_counts(&state, units).await?;

    Ok(Json(PageResponse {
        data,
        pagination: Pagination::new(total, base.page(), base.limit()),
    })
    .into_response())
}

async fn with_counts(state: &AppState, units: Vec<Unit>) -> AppResult<Vec<UnitWithCount>> {
    let ids: Vec<DbId> = units.iter().map(|u| u.id).collect();
    let counts = CountsRepo::topics_per_unit(&state.pool, &ids).await?;
    Ok(units
        .into_iter()
        .map(|unit| UnitWithCount {
            topic_count: counts.get(&unit.id).copied().unwrap_or(0),
            unit,
        })
        .collect())
}

/// GET /api/v1/units/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Unit>>> {
    let unit = UnitRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Unit", id }))?;
    Ok(Json(DataResponse { data: unit }))
}

/// PUT /api/v1/units/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUnit>,
) -> AppResult<Json<DataResponse<Unit>>> {
    input.validate()?;
    let unit = UnitRepo::update(&state.pool, id, &input, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Unit", id }))?;
    Ok(Json(DataResponse { data: unit }))
}

/// DELETE /api/v1/units/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = UnitRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Unit", id }))
    }
}

/// POST /api/v1/units/reorder
pub async fn reorder(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<ReorderRequest>,
) -> AppResult<Json<DataResponse<ReorderResult>>> {
    let updated = UnitRepo::reorder(
        &state.pool,
        input.parent_id,
        &input.child_ids,
        user.user_id,
    )
    .await?;
    if updated != input.child_ids.len() as u64 {
        tracing::warn!(
            course_id = input.parent_id,
            requested = input.child_ids.len(),
            updated,
            "reorder skipped ids not belonging to the course"
        );
    }
    Ok(Json(DataResponse {
        data: ReorderResult { updated },
    }))
}
