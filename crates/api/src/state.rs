use std::sync::Arc;

use pagewatch_db::store::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Persistence for projects, pages and memberships.
    pub store: Arc<dyn Store>,
    /// Server configuration (read by the auth extractor).
    pub config: Arc<ServerConfig>,
}
