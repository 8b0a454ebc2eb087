pub mod categories;
pub mod health;
pub mod products;
pub mod uploads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /categories                      list/search, create
/// /categories/{id}                 get, update, delete
/// /categories/{id}/products        products owned by a category
///
/// /products                        list/search, create
/// /products/{id}                   get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/products", products::router())
}
