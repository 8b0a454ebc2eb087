//! Route definitions for the `/categories` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET    /                -> list (keyword/page/size/sort)
/// POST   /                -> create (multipart, optional icon)
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update (multipart, optional icon)
/// DELETE /{id}            -> delete (cascades to products)
/// GET    /{id}/products   -> list_products
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(category::list).post(category::create))
        .route(
            "/{id}",
            get(category::get_by_id)
                .put(category::update)
                .delete(category::delete),
        )
        .route("/{id}/products", get(category::list_products))
}
