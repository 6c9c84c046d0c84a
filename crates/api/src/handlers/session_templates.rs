//! Handlers for the `/session-templates` resource.
//!
//! Templates are a flat library; they carry no sequence and no reorder
//! endpoint.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use lingo_core::error::CoreError;
use lingo_core::types::DbId;
use lingo_db::models::session_template::{
    CreateSessionTemplate, SessionTemplate, UpdateSessionTemplate,
};
use lingo_db::repositories::SessionTemplateRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::ListParams;
use crate::response::{DataResponse, PageResponse, Pagination};
use crate::state::AppState;

/// POST /api/v1/session-templates
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateSessionTemplate>,
) -> AppResult<(StatusCode, Json<DataResponse<SessionTemplate>>)> {
    input.validate()?;
    let template = SessionTemplateRepo::create(&state.pool, &input, user.user_id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: template })))
}

/// GET /api/v1/session-templates
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<PageResponse<SessionTemplate>>> {
    let templates = SessionTemplateRepo::list(
        &state.pool,
        params.search(),
        params.is_active,
        params.limit(),
        params.offset(),
    )
    .await?;
    let total = SessionTemplateRepo::count(&state.pool, params.search(), params.is_active).await?;

    Ok(Json(PageResponse {
        data: templates,
        pagination: Pagination::new(total, params.page(), params.limit()),
    }))
}

/// GET /api/v1/session-templates/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<SessionTemplate>>> {
    let template = SessionTemplateRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SessionTemplate",
            id,
        }))?;
    Ok(Json(DataResponse { data: template }))
}

/// PUT /api/v1/session-templates/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSessionTemplate>,
) -> AppResult<Json<DataResponse<SessionTemplate>>> {
    input.validate()?;
    let template = SessionTemplateRepo::update(&state.pool, id, &input, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SessionTemplate",
            id,
        }))?;
    Ok(Json(DataResponse { data: template }))
}

/// DELETE /api/v1/session-templates/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SessionTemplateRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "SessionTemplate",
            id,
        }))
    }
}
