//! Route definitions for the `/sessions` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::session_details;
use crate::state::AppState;

/// Routes mounted at `/sessions`.
///
/// ```text
/// GET    /         -> list (?sessionGroupId= for sequence order)
/// POST   /         -> create
/// POST   /reorder  -> reorder
/// GET    /{id}     -> get_by_id
/// PUT    /{id}     -> update
/// DELETE /{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(session_details::list).post(session_details::create),
        )
        .route("/reorder", post(session_details::reorder))
        .route(
            "/{id}",
            get(session_details::get_by_id)
                .put(session_details::update)
                .delete(session_details::delete),
        )
}
