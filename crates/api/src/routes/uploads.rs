//! Route definitions for stored-asset serving.

use axum::routing::get;
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Mount asset serving at root level (`/uploads/{name}`, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/uploads/{name}", get(uploads::serve))
}
