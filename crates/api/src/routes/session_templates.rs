//! Route definitions for the `/session-templates` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::session_templates;
use crate::state::AppState;

/// Routes mounted at `/session-templates`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(session_templates::list).post(session_templates::create),
        )
        .route(
            "/{id}",
            get(session_templates::get_by_id)
                .put(session_templates::update)
                .delete(session_templates::delete),
        )
}
