pub mod admin;
pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod health;
pub mod session_details;
pub mod session_groups;
pub mod session_templates;
pub mod topics;
pub mod units;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                 login (public)
/// /auth/refresh               refresh (public)
/// /auth/logout                logout (requires auth)
///
/// /admin/users                list, create (superadmin only)
/// /admin/users/{id}           get, update, delete
///
/// /courses                    list (paginated, ?search=&isActive=), create
/// /courses/{id}               get, update, delete
///
/// /units                      list (?courseId= | paginated), create
/// /units/{id}                 get, update, delete
/// /units/reorder              reorder within a course (POST)
///
/// /topics                     list (?unitId= | paginated), create
/// /topics/{id}                get, update, delete
/// /topics/reorder             reorder within a unit (POST)
///
/// /session-groups             list (?topicId= | paginated), create
/// /session-groups/{id}        get, update, delete
/// /session-groups/reorder     reorder within a topic (POST)
///
/// /sessions                   list (?sessionGroupId= | paginated), create
/// /sessions/{id}              get, update, delete
/// /sessions/reorder           reorder within a session group (POST)
///
/// /session-templates          list (paginated), create
/// /session-templates/{id}     get, update, delete
///
/// /dashboard                  summary counts (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
        .nest("/courses", courses::router())
        .nest("/units", units::router())
        .nest("/topics", topics::router())
        .nest("/session-groups", session_groups::router())
        .nest("/sessions", session_details::router())
        .nest("/session-templates", session_templates::router())
        .nest("/dashboard", dashboard::router())
}
