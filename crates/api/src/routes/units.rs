//! Route definitions for the `/units` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::units;
use crate::state::AppState;

/// Routes mounted at `/units`.
///
/// ```text
/// GET    /         -> list (?courseId= for sequence order)
/// POST   /         -> create
/// POST   /reorder  -> reorder
/// GET    /{id}     -> get_by_id
/// PUT    /{id}     -> update
/// DELETE /{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(units::list).post(units::create))
        .route("/reorder", post(units::reorder))
        .route(
            "/{id}",
            get(units::get_by_id)
                .put(units::update)
                .delete(units::delete),
        )
}
