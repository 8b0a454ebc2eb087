//! Handlers for the `/categories` resource.
//!
//! Create and update accept multipart forms so an icon file can ride along
//! with the text fields (`name`, `description`, `user_id`, `icon`).

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use stockroom_core::pagination::Page;
use stockroom_core::types::DbId;
use stockroom_db::models::category::{Category, CreateCategory, UpdateCategory};
use stockroom_db::models::product::Product;

use crate::error::AppResult;
use crate::handlers::{parse_field, read_multipart_form, require_field};
use crate::query::ListParams;
use crate::services;
use crate::state::AppState;

/// Fallback owner for requests that do not carry a `user_id` field.
const DEFAULT_USER_ID: DbId = 1;

/// GET /api/v1/categories
///
/// Paginated listing; `?keyword=` switches to substring search over name
/// and description.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<Category>>> {
    let page = services::category::list_or_search(&state.pool, &params).await?;
    Ok(Json(page))
}

/// GET /api/v1/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Category>> {
    let category = services::category::get(&state.pool, id).await?;
    Ok(Json(category))
}

/// POST /api/v1/categories
///
/// Multipart form: `name` (required), `description`, `user_id`, `icon` (file).
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Category>)> {
    let (fields, icon) = read_multipart_form(multipart, "icon").await?;

    let input = CreateCategory {
        name: require_field(&fields, "name")?,
        description: fields.get("description").cloned(),
        user_id: parse_field(&fields, "user_id")?.unwrap_or(DEFAULT_USER_ID),
        icon: None,
    };

    let category = services::category::create(&state.pool, &state.assets, input, icon).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/v1/categories/{id}
///
/// Multipart form; all fields optional. A new `icon` file replaces the
/// stored reference (the old asset stays on disk).
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<Category>> {
    let (fields, icon) = read_multipart_form(multipart, "icon").await?;

    let input = UpdateCategory {
        name: fields.get("name").cloned(),
        description: fields.get("description").cloned(),
        user_id: parse_field(&fields, "user_id")?,
        icon: None,
    };

    let category =
        services::category::update(&state.pool, &state.assets, id, input, icon).await?;
    Ok(Json(category))
}

/// DELETE /api/v1/categories/{id}
///
/// Hard delete; owned products go with it.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    services::category::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/categories/{id}/products
pub async fn list_products(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Product>>> {
    let products = services::product::list_by_category(&state.pool, id).await?;
    Ok(Json(products))
}
