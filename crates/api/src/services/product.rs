//! Product service: uniqueness pre-check, category resolution, asset
//! persistence, record CRUD.

use sqlx::PgPool;
use stockroom_core::error::CoreError;
use stockroom_core::pagination::{
    clamp_page, clamp_page_size, Page, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
use stockroom_core::types::DbId;
use stockroom_core::validation::{
    validate_discount, validate_product_name, validate_quantity, validate_unit_price,
};
use stockroom_db::models::product::{CreateProduct, Product, UpdateProduct};
use stockroom_db::repositories::{CategoryRepo, ProductRepo};
use stockroom_storage::AssetStore;

use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::services::{store_upload, Upload};

/// Create a product, storing the optional image upload first.
///
/// A duplicate name is rejected before anything touches storage. A
/// `category_id` that does not resolve to an existing category is dropped
/// rather than rejected: the product is created without an owner.
pub async fn create(
    pool: &PgPool,
    assets: &AssetStore,
    mut input: CreateProduct,
    image: Option<Upload>,
) -> AppResult<Product> {
    validate_product_name(&input.name)?;
    validate_unit_price(input.unit_price)?;
    validate_discount(input.discount)?;
    validate_quantity(input.quantity)?;

    if ProductRepo::find_by_name(pool, &input.name).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Product '{}' already exists",
            input.name
        ))));
    }

    if let Some(category_id) = input.category_id {
        if CategoryRepo::find_by_id(pool, category_id).await?.is_none() {
            tracing::warn!(category_id, "Category not found, creating product without owner");
            input.category_id = None;
        }
    }

    if let Some(upload) = &image {
        input.images = Some(store_upload(assets, upload).await?);
    }

    let product = ProductRepo::create(pool, &input).await?;
    tracing::info!(id = product.id, name = %product.name, "Created product");
    Ok(product)
}

/// Update a product, replacing the image reference when a new upload is
/// supplied. The previous asset is left in storage.
pub async fn update(
    pool: &PgPool,
    assets: &AssetStore,
    id: DbId,
    mut input: UpdateProduct,
    image: Option<Upload>,
) -> AppResult<Product> {
    if let Some(name) = &input.name {
        validate_product_name(name)?;
    }
    if let Some(price) = input.unit_price {
        validate_unit_price(price)?;
    }
    if let Some(discount) = input.discount {
        validate_discount(discount)?;
    }
    if let Some(quantity) = input.quantity {
        validate_quantity(quantity)?;
    }

    if ProductRepo::find_by_id(pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }));
    }

    if let Some(upload) = &image {
        input.images = Some(store_upload(assets, upload).await?);
    }

    ProductRepo::update(pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))
}

/// Fetch a product or fail with `NotFound`.
pub async fn get(pool: &PgPool, id: DbId) -> AppResult<Product> {
    ProductRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))
}

/// Delete a product. Its stored asset is left in place.
pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
    if ProductRepo::delete(pool, id).await? {
        tracing::info!(id, "Deleted product");
        Ok(())
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))
    }
}

/// Paginated listing, with keyword search when a non-blank keyword is given.
pub async fn list_or_search(pool: &PgPool, params: &ListParams) -> AppResult<Page<Product>> {
    let page = clamp_page(params.page);
    let size = clamp_page_size(params.size, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);

    let result = match params.keyword.as_deref().map(str::trim) {
        Some(keyword) if !keyword.is_empty() => {
            ProductRepo::search(pool, keyword, page, size, params.sort).await?
        }
        _ => ProductRepo::list(pool, page, size, params.sort).await?,
    };
    Ok(result)
}

/// List all products owned by a category, failing if the category is absent.
pub async fn list_by_category(pool: &PgPool, category_id: DbId) -> AppResult<Vec<Product>> {
    if CategoryRepo::find_by_id(pool, category_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        }));
    }
    Ok(ProductRepo::list_by_category(pool, category_id).await?)
}
