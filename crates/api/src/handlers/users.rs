//! Handlers for the `/admin/users` resource.
//!
//! Every endpoint here requires the superadmin role. Passwords arrive as
//! plaintext in the DTOs and are hashed before they reach the repository.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lingo_core::error::CoreError;
use lingo_core::types::DbId;
use lingo_db::models::user::{CreateUser, UpdateUser, User};
use lingo_db::repositories::{AuthSessionRepo, UserRepo};
use validator::Validate;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/admin/users
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<DataResponse<User>>)> {
    user.require_superadmin()?;
    input.validate()?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;
    let created = UserRepo::create(
        &state.pool,
        &input.email,
        &password_hash,
        &input.name,
        input.role,
    )
    .await?;

    tracing::info!(user_id = created.id, actor = user.user_id, "user created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/admin/users
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<User>>>> {
    user.require_superadmin()?;
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: users }))
}

/// GET /api/v1/admin/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<User>>> {
    user.require_superadmin()?;
    let found = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(DataResponse { data: found }))
}

/// PUT /api/v1/admin/users/{id}
///
/// Deactivating a user also revokes all of their refresh sessions, so
/// their access dies with the current access token.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<DataResponse<User>>> {
    user.require_superadmin()?;
    input.validate()?;

    let password_hash = match &input.password {
        Some(password) => Some(
            hash_password(password)
                .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?,
        ),
        None => None,
    };

    let updated = UserRepo::update(
        &state.pool,
        id,
        input.email.as_deref(),
        password_hash.as_deref(),
        input.name.as_deref(),
        input.role,
        input.is_active,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    if input.is_active == Some(false) {
        let revoked = AuthSessionRepo::revoke_all_for_user(&state.pool, id).await?;
        tracing::info!(user_id = id, revoked, "deactivated user, sessions revoked");
    }

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/admin/users/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    user.require_superadmin()?;
    if user.user_id == id {
        return Err(AppError::BadRequest(
            "Cannot delete your own account".into(),
        ));
    }

    let deleted = UserRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }
}
