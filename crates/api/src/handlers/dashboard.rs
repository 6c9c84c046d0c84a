//! Handler for the `/dashboard` summary endpoint.

use axum::extract::State;
use axum::Json;
use lingo_db::models::dashboard::DashboardSummary;
use lingo_db::repositories::CountsRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard
///
/// System-wide counts of active content entities plus total users.
/// Computed fresh on every request; nothing here is cached.
pub async fn summary(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<DataResponse<DashboardSummary>>> {
    let summary = CountsRepo::dashboard_summary(&state.pool).await?;
    Ok(Json(DataResponse { data: summary }))
}
