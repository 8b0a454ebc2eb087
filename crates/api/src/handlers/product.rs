//! Handlers for the `/products` resource.
//!
//! Create and update accept multipart forms so an image file can ride along
//! with the text fields (`name`, `unit_price`, `discount`, `description`,
//! `category_id`, `quantity`, `status`, `image`).

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use stockroom_core::pagination::Page;
use stockroom_core::types::DbId;
use stockroom_db::models::product::{CreateProduct, Product, UpdateProduct};

use crate::error::{AppError, AppResult};
use crate::handlers::{parse_field, read_multipart_form, require_field};
use crate::query::ListParams;
use crate::services;
use crate::state::AppState;

/// GET /api/v1/products
///
/// Paginated listing; `?keyword=` switches to substring search over the
/// product name.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<Product>>> {
    let page = services::product::list_or_search(&state.pool, &params).await?;
    Ok(Json(page))
}

/// GET /api/v1/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Product>> {
    let product = services::product::get(&state.pool, id).await?;
    Ok(Json(product))
}

/// POST /api/v1/products
///
/// Multipart form: `name` and `unit_price` required, everything else
/// optional, `image` is the file field.
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Product>)> {
    let (fields, image) = read_multipart_form(multipart, "image").await?;

    let input = CreateProduct {
        name: require_field(&fields, "name")?,
        unit_price: parse_field(&fields, "unit_price")?
            .ok_or_else(|| AppError::BadRequest("Missing required 'unit_price' field".into()))?,
        discount: parse_field(&fields, "discount")?.unwrap_or(0.0),
        description: fields.get("description").cloned(),
        category_id: parse_field(&fields, "category_id")?,
        quantity: parse_field(&fields, "quantity")?.unwrap_or(0),
        status: parse_field(&fields, "status")?.unwrap_or(1),
        images: None,
    };

    let product = services::product::create(&state.pool, &state.assets, input, image).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/v1/products/{id}
///
/// Multipart form; all fields optional. A new `image` file replaces the
/// stored reference (the old asset stays on disk).
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<Product>> {
    let (fields, image) = read_multipart_form(multipart, "image").await?;

    let input = UpdateProduct {
        name: fields.get("name").cloned(),
        unit_price: parse_field(&fields, "unit_price")?,
        discount: parse_field(&fields, "discount")?,
        description: fields.get("description").cloned(),
        category_id: parse_field(&fields, "category_id")?,
        quantity: parse_field(&fields, "quantity")?,
        status: parse_field(&fields, "status")?,
        images: None,
    };

    let product = services::product::update(&state.pool, &state.assets, id, input, image).await?;
    Ok(Json(product))
}

/// DELETE /api/v1/products/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    services::product::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
