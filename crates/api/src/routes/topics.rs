//! Route definitions for the `/topics` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::topics;
use crate::state::AppState;

/// Routes mounted at `/topics`.
///
/// ```text
/// GET    /         -> list (?unitId= for sequence order)
/// POST   /         -> create
/// POST   /reorder  -> reorder
/// GET    /{id}     -> get_by_id
/// PUT    /{id}     -> update
/// DELETE /{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(topics::list).post(topics::create))
        .route("/reorder", post(topics::reorder))
        .route(
            "/{id}",
            get(topics::get_by_id)
                .put(topics::update)
                .delete(topics::delete),
        )
}
