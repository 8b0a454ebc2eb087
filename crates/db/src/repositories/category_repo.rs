//! Repository for the `categories` table.

use sqlx::PgPool;
use stockroom_core::pagination::{page_offset, Page};
use stockroom_core::types::DbId;

use crate::models::category::{Category, CreateCategory, UpdateCategory};
use crate::models::sort::SortOrder;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, user_id, icon, created_at, updated_at";

/// Provides CRUD and paginated search operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    ///
    /// The generated id and both timestamps come back from the insert
    /// itself; callers never need to re-query by a derived value.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, description, user_id, icon)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.user_id)
            .bind(&input.icon)
            .fetch_one(pool)
            .await
    }

    /// Find a category by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a category by exact name (case-sensitive).
    ///
    /// Used for the natural-key uniqueness pre-check before create.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE name = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List categories as a page, ordered by `sort`.
    ///
    /// `page` and `page_size` must already be clamped by the caller.
    pub async fn list(
        pool: &PgPool,
        page: i64,
        page_size: i64,
        sort: SortOrder,
    ) -> Result<Page<Category>, sqlx::Error> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
            .fetch_one(pool)
            .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM categories ORDER BY {} LIMIT $1 OFFSET $2",
            sort.sql()
        );
        let items = sqlx::query_as::<_, Category>(&query)
            .bind(page_size)
            .bind(page_offset(page, page_size))
            .fetch_all(pool)
            .await?;

        Ok(Page::new(items, total, page, page_size))
    }

    /// Search categories whose name or description contains `keyword`,
    /// case-insensitively, as a page ordered by `sort`.
    ///
    /// The total count reflects the full match set, not the page slice.
    pub async fn search(
        pool: &PgPool,
        keyword: &str,
        page: i64,
        page_size: i64,
        sort: SortOrder,
    ) -> Result<Page<Category>, sqlx::Error> {
        let pattern = format!("%{keyword}%");

        let (total,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM categories WHERE name ILIKE $1 OR description ILIKE $1",
        )
        .bind(&pattern)
        .fetch_one(pool)
        .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM categories
             WHERE name ILIKE $1 OR description ILIKE $1
             ORDER BY {} LIMIT $2 OFFSET $3",
            sort.sql()
        );
        let items = sqlx::query_as::<_, Category>(&query)
            .bind(&pattern)
            .bind(page_size)
            .bind(page_offset(page, page_size))
            .fetch_all(pool)
            .await?;

        Ok(Page::new(items, total, page, page_size))
    }

    /// Update a category. Only non-`None` fields in `input` are applied;
    /// `updated_at` is refreshed on every call.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                user_id = COALESCE($4, user_id),
                icon = COALESCE($5, icon),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.user_id)
            .bind(&input.icon)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a category by ID. Products owned by the category are
    /// removed by the `ON DELETE CASCADE` foreign key.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of categories.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
