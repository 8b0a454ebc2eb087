//! Category service: uniqueness pre-check, asset persistence, record CRUD.

use sqlx::PgPool;
use stockroom_core::error::CoreError;
use stockroom_core::pagination::{
    clamp_page, clamp_page_size, Page, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
use stockroom_core::types::DbId;
use stockroom_core::validation::{validate_category_name, validate_description};
use stockroom_db::models::category::{Category, CreateCategory, UpdateCategory};
use stockroom_db::repositories::CategoryRepo;
use stockroom_storage::AssetStore;

use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::services::{store_upload, Upload};

/// Create a category, storing the optional icon upload first.
///
/// A duplicate name is rejected before anything touches storage.
pub async fn create(
    pool: &PgPool,
    assets: &AssetStore,
    mut input: CreateCategory,
    icon: Option<Upload>,
) -> AppResult<Category> {
    validate_category_name(&input.name)?;
    validate_description(input.description.as_deref())?;

    if CategoryRepo::find_by_name(pool, &input.name).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Category '{}' already exists",
            input.name
        ))));
    }

    if let Some(upload) = &icon {
        input.icon = Some(store_upload(assets, upload).await?);
    }

    let category = CategoryRepo::create(pool, &input).await?;
    tracing::info!(id = category.id, name = %category.name, "Created category");
    Ok(category)
}

/// Update a category, replacing the icon reference when a new upload is
/// supplied. The previous asset is left in storage.
pub async fn update(
    pool: &PgPool,
    assets: &AssetStore,
    id: DbId,
    mut input: UpdateCategory,
    icon: Option<Upload>,
) -> AppResult<Category> {
    if let Some(name) = &input.name {
        validate_category_name(name)?;
    }
    validate_description(input.description.as_deref())?;

    if CategoryRepo::find_by_id(pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }));
    }

    if let Some(upload) = &icon {
        input.icon = Some(store_upload(assets, upload).await?);
    }

    CategoryRepo::update(pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))
}

/// Fetch a category or fail with `NotFound`.
pub async fn get(pool: &PgPool, id: DbId) -> AppResult<Category> {
    CategoryRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))
}

/// Delete a category. Owned products are removed by the FK cascade;
/// stored assets are left in place.
pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
    if CategoryRepo::delete(pool, id).await? {
        tracing::info!(id, "Deleted category");
        Ok(())
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))
    }
}

/// Paginated listing, with keyword search when a non-blank keyword is given.
///
/// A missing or blank keyword is an unfiltered listing, not a
/// match-everything search.
pub async fn list_or_search(pool: &PgPool, params: &ListParams) -> AppResult<Page<Category>> {
    let page = clamp_page(params.page);
    let size = clamp_page_size(params.size, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);

    let result = match params.keyword.as_deref().map(str::trim) {
        Some(keyword) if !keyword.is_empty() => {
            CategoryRepo::search(pool, keyword, page, size, params.sort).await?
        }
        _ => CategoryRepo::list(pool, page, size, params.sort).await?,
    };
    Ok(result)
}
