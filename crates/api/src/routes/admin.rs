//! Route definitions for superadmin user management.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /users       -> list
/// POST   /users       -> create
/// GET    /users/{id}  -> get_by_id
/// PUT    /users/{id}  -> update
/// DELETE /users/{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list).post(users::create))
        .route(
            "/users/{id}",
            get(users::get_by_id)
                .put(users::update)
                .delete(users::delete),
        )
}
