use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable: the pool is internally reference-counted and the
/// config sits behind an `Arc`. The pool is built once at startup and
/// injected here; no ambient global connection exists.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: lingo_db::DbPool,
    /// Server configuration (JWT secrets, timeouts).
    pub config: Arc<ServerConfig>,
}
