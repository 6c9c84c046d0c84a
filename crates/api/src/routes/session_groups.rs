//! Route definitions for the `/session-groups` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::session_groups;
use crate::state::AppState;

/// Routes mounted at `/session-groups`.
///
/// ```text
/// GET    /         -> list (?topicId= for sequence order)
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
            get(session_groups::list).post(session_groups::create),
        )
        .route("/reorder", post(session_groups::reorder))
        .route(
            "/{id}",
            get(session_groups::get_by_id)
                .put(session_groups::update)
                .delete(session_groups::delete),
        )
}
