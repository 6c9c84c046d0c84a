//! Handlers for the `/sessions` resource (session details).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use lingo_core::error::CoreError;
use lingo_core::types::DbId;
use lingo_db::models::session_detail::{
    CreateSessionDetail, SessionDetail, UpdateSessionDetail,
};
use lingo_db::repositories::SessionDetailRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::{ReorderRequest, ReorderResult};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, PageResponse, Pagination};
use crate::state::AppState;

/// Query parameters for `GET /sessions`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionListParams {
    pub session_group_id: Option<DbId>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub is_active: Option<bool>,
}

impl SessionListParams {
    fn base(&self) -> crate::query::ListParams {
        crate::query::ListParams {
            page: self.page,
            limit: self.limit,
            search: self.search.clone(),
            is_active: self.is_active,
        }
    }
}

/// POST /api/v1/sessions
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateSessionDetail>,
) -> AppResult<(StatusCode, Json<DataResponse<SessionDetail>>)> {
    input.validate()?;
    let session = SessionDetailRepo::create(&state.pool, &input, user.user_id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: session })))
}

/// GET /api/v1/sessions
///
/// With `?sessionGroupId=` the response is that group's sessions in
/// sequence order; without it, a paginated global listing newest-first.
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<SessionListParams>,
) -> AppResult<axum::response::Response> {
    use axum::response::IntoResponse;

    if let Some(group_id) = params.session_group_id {
        let sessions =
            SessionDetailRepo::list_by_group(&state.pool, group_id, params.is_active).await?;
        return Ok(Json(DataResponse { data: sessions }).into_response());
    }

    let base = params.base();
    let sessions = SessionDetailRepo::list(
        &state.pool,
        base.search(),
        base.is_active,
        base.limit(),
        base.offset(),
    )
    .await?;
    let total = SessionDetailRepo::count(&state.pool, base.search(), base.is_active).await?;

    Ok(Json(PageResponse {
        data: sessions,
        pagination: Pagination::new(total, base.page(), base.limit()),
    })
    .into_response())
}

/// GET /api/v1/sessions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<SessionDetail>>> {
    let session = SessionDetailRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Session",
            id,
        }))?;
    Ok(Json(DataResponse { data: session }))
}

/// PUT /api/v1/sessions/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSessionDetail>,
) -> AppResult<Json<DataResponse<SessionDetail>>> {
    input.validate()?;
    let session = SessionDetailRepo::update(&state.pool, id, &input, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Session",
            id,
        }))?;
    Ok(Json(DataResponse { data: session }))
}

/// DELETE /api/v1/sessions/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SessionDetailRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Session",
            id,
        }))
    }
}

/// POST /api/v1/sessions/reorder
pub async fn reorder(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<ReorderRequest>,
) -> AppResult<Json<DataResponse<ReorderResult>>> {
    let updated = SessionDetailRepo::reorder(
        &state.pool,
        input.parent_id,
        &input.child_ids,
        user.user_id,
    )
    .await?;
    if updated != input.child_ids.len() as u64 {
        tracing::warn!(
            session_group_id = input.parent_id,
            requested = input.child_ids.len(),
            updated,
            "reorder skipped ids not belonging to the session group"
        );
    }
    Ok(Json(DataResponse {
        data: ReorderResult { updated },
    }))
}
