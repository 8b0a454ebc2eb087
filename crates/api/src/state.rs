use std::sync::Arc;

use stockroom_storage::AssetStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Configuration stays out of here: the router builder consumes it once and
/// handlers never need it at request time.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: stockroom_db::DbPool,
    /// Asset store rooted at the configured upload directory.
    pub assets: Arc<AssetStore>,
}
