use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is already `Clone` and the config sits
/// behind an `Arc`. The pool is the only shared mutable resource in the
/// process; all coordination is delegated to PostgreSQL.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: workhive_db::DbPool,
    /// Server configuration (JWT secrets, CORS, timeouts).
    pub config: Arc<ServerConfig>,
}
