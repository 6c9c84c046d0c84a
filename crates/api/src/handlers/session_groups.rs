//! Handlers for the `/session-groups` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use lingo_core::error::CoreError;
use lingo_core::types::DbId;
use lingo_db::models::session_group::{CreateSessionGroup, SessionGroup, UpdateSessionGroup};
use lingo_db::repositories::{CountsRepo, SessionGroupRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::{ReorderRequest, ReorderResult};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, PageResponse, Pagination};
use crate::state::AppState;

/// Query parameters for `GET /session-groups`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionGroupListParams {
    pub topic_id: Option<DbId>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub is_active: Option<bool>,
}

impl SessionGroupListParams {
    fn base(&self) -> crate::query::ListParams {
        crate::query::ListParams {
            page: self.page,
            limit: self.limit,
            search: self.search.clone(),
            is_active: self.is_active,
        }
    }
}

/// A session group plus the number of sessions directly under it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionGroupWithCount {
    #[serde(flatten)]
    pub session_group: SessionGroup,
    pub session_count: i64,
}

/// POST /api/v1/session-groups
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateSessionGroup>,
) -> AppResult<(StatusCode, Json<DataResponse<SessionGroup>>)> {
    input.validate()?;
    let group = SessionGroupRepo::create(&state.pool, &input, user.user_id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: group })))
}

/// GET /api/v1/session-groups
///
/// With `?topicId=` the response is that topic's groups in sequence order;
/// without it, a paginated global listing newest-first.
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<SessionGroupListParams>,
) -> AppResult<axum::response::Response> {
    use axum::response::IntoResponse;

    if let Some(topic_id) = params.topic_id {
        let groups =
            SessionGroupRepo::list_by_topic(&state.pool, topic_id, params.is_active).await?;
        let data = with_counts(&state, groups).await?;
        return Ok(Json(DataResponse { data }).into_response());
    }

    let base = params.base();
    let groups = SessionGroupRepo::list(
        &state.pool,
        base.search(),
        base.is_active,
        base.limit(),
        base.offset(),
    )
    .await?;
    let total = SessionGroupRepo::count(&state.pool, base.search(), base.is_active).await?;
    let data = with_counts(&state, groups).await?;

    Ok(Json(PageResponse {
        data,
        pagination: Pagination::new(total, base.page(), base.limit()),
    })
    .into_response())
}

async fn with_counts(
    state: &AppState,
    groups: Vec<SessionGroup>,
) -> AppResult<Vec<SessionGroupWithCount>> {
    let ids: Vec<DbId> = groups.iter().map(|g| g.id).collect();
    let counts = CountsRepo::session_details_per_group(&state.pool, &ids).await?;
    Ok(groups
        .into_iter()
        .map(|session_group| SessionGroupWithCount {
            session_count: counts.get(&session_group.id).copied().unwrap_or(0),
            session_group,
        })
        .collect())
}

/// GET /api/v1/session-groups/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<SessionGroup>>> {
    let group = SessionGroupRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SessionGroup",
            id,
        }))?;
    Ok(Json(DataResponse { data: group }))
}

/// PUT /api/v1/session-groups/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSessionGroup>,
) -> AppResult<Json<DataResponse<SessionGroup>>> {
    input.validate()?;
    let group = SessionGroupRepo::update(&state.pool, id, &input, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SessionGroup",
            id,
        }))?;
    Ok(Json(DataResponse { data: group }))
}

/// DELETE /api/v1/session-groups/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SessionGroupRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "SessionGroup",
            id,
        }))
    }
}

/// POST /api/v1/session-groups/reorder
pub async fn reorder(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<ReorderRequest>,
) -> AppResult<Json<DataResponse<ReorderResult>>> {
    let updated = SessionGroupRepo::reorder(
        &state.pool,
        input.parent_id,
        &input.child_ids,
        user.user_id,
    )
    .await?;
    if updated != input.child_ids.len() as u64 {
        tracing::warn!(
            topic_id = input.parent_id,
            requested = input.child_ids.len(),
            updated,
            "reorder skipped ids not belonging to the topic"
        );
    }
    Ok(Json(DataResponse {
        data: ReorderResult { updated },
    }))
}
