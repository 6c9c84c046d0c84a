//! Handlers for the `/topics` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use lingo_core::error::CoreError;
use lingo_core::types::DbId;
use lingo_db::models::topic::{CreateTopic, Topic, UpdateTopic};
use lingo_db::repositories::{CountsRepo, TopicRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::{ReorderRequest, ReorderResult};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, PageResponse, Pagination};
use crate::state::AppState;

/// Query parameters for `GET /topics`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicListParams {
    pub unit_id: Option<DbId>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub is_active: Option<bool>,
}

impl TopicListParams {
    fn base(&self) -> crate::query::ListParams {
        crate::query::ListParams {
            page: self.page,
            limit: self.limit,
            search: self.search.clone(),
            is_active: self.is_active,
        }
    }
}

/// A topic plus the number of session groups directly under it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicWithCount {
    #[serde(flatten)]
    pub topic: Topic,
    pub session_group_count: i64,
}

/// POST /api/v1/topics
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateTopic>,
) -> AppResult<(StatusCode, Json<DataResponse<Topic>>)> {
    input.validate()?;
    let topic = TopicRepo::create(&state.pool, &input, user.user_id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: topic })))
}

/// GET /api/v1/topics
///
/// With `?unitId=` the response is that unit's topics in sequence order;
/// without it, a paginated global listing newest-first.
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<TopicListParams>,
) -> AppResult<axum::response::Response> {
    use axum::response::IntoResponse;

    if let Some(unit_id) = params.unit_id {
        let topics = TopicRepo::list_by_unit(&state.pool, unit_id, params.is_active).await?;
        let data = with_counts(&state, topics).await?;
        return Ok(Json(DataResponse { data }).into_response());
    }

    let base = params.base();
    let topics = TopicRepo::list(
        &state.pool,
        base.search(),
        base.is_active,
        base.limit(),
        base.offset(),
    )
    .await?;
    let total = TopicRepo::count(&state.pool, base.search(), base.is_active).await?;
    let data = with_counts(&state, topics).await?;

    Ok(Json(PageResponse {
        data,
        pagination: Pagination::new(total, base.page(), base.limit()),
    })
    .into_response())
}

async fn with_counts(state: &AppState, topics: Vec<Topic>) -> AppResult<Vec<TopicWithCount>> {
    let ids: Vec<DbId> = topics.iter().map(|t| t.id).collect();
    let counts = CountsRepo::session_groups_per_topic(&state.pool, &ids).await?;
    Ok(topics
        .into_iter()
        .map(|topic| TopicWithCount {
            session_group_count: counts.get(&topic.id).copied().unwrap_or(0),
            topic,
        })
        .collect())
}

/// GET /api/v1/topics/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Topic>>> {
    let topic = TopicRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Topic", id }))?;
    Ok(Json(DataResponse { data: topic }))
}

/// PUT /api/v1/topics/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTopic>,
) -> AppResult<Json<DataResponse<Topic>>> {
    input.validate()?;
    let topic = TopicRepo::update(&state.pool, id, &input, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Topic", id }))?;
    Ok(Json(DataResponse { data: topic }))
}

/// DELETE /api/v1/topics/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TopicRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Topic", id }))
    }
}

/// POST /api/v1/topics/reorder
pub async fn reorder(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<ReorderRequest>,
) -> AppResult<Json<DataResponse<ReorderResult>>> {
    let updated = TopicRepo::reorder(
        &state.pool,
        input.parent_id,
        &input.child_ids,
        user.user_id,
    )
    .await?;
    if updated != input.child_ids.len() as u64 {
        tracing::warn!(
            unit_id = input.parent_id,
            requested = input.child_ids.len(),
            updated,
            "reorder skipped ids not belonging to the unit"
        );
    }
    Ok(Json(DataResponse {
        data: ReorderResult { updated },
    }))
}
