//! Repository for the `products` table.

use sqlx::PgPool;
use stockroom_core::pagination::{page_offset, Page};
use stockroom_core::types::{DbId, Timestamp};

use crate::models::product::{CreateProduct, Product, UpdateProduct};
use crate::models::sort::SortOrder;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, unit_price, discount, description, category_id, \
                       quantity, status, images, created_at";

/// Provides CRUD and paginated search operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    ///
    /// The generated id and `created_at` come back from the insert itself,
    /// so callers never depend on re-querying by timestamp.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products
                (name, unit_price, discount, description, category_id, quantity, status, images)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(input.unit_price)
            .bind(input.discount)
            .bind(&input.description)
            .bind(input.category_id)
            .bind(input.quantity)
            .bind(input.status)
            .bind(&input.images)
            .fetch_one(pool)
            .await
    }

    /// Find a product by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a product by exact name (case-sensitive).
    ///
    /// Used for the natural-key uniqueness pre-check before create.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE name = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Find a product by its exact creation timestamp.
    ///
    /// Best-effort secondary lookup only: it depends on the stored and
    /// queried timestamps being bit-identical, which precision truncation
    /// can break. [`ProductRepo::create`] returns the persisted row, so
    /// normal flows never need this.
    pub async fn find_by_created_at(
        pool: &PgPool,
        created_at: Timestamp,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE created_at = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(created_at)
            .fetch_optional(pool)
            .await
    }

    /// List products as a page, ordered by `sort`.
    ///
    /// `page` and `page_size` must already be clamped by the caller.
    pub async fn list(
        pool: &PgPool,
        page: i64,
        page_size: i64,
        sort: SortOrder,
    ) -> Result<Page<Product>, sqlx::Error> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(pool)
            .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM products ORDER BY {} LIMIT $1 OFFSET $2",
            sort.sql()
        );
        let items = sqlx::query_as::<_, Product>(&query)
            .bind(page_size)
            .bind(page_offset(page, page_size))
            .fetch_all(pool)
            .await?;

        Ok(Page::new(items, total, page, page_size))
    }

    /// Search products whose name contains `keyword`, case-insensitively,
    /// as a page ordered by `sort`. Description is not searched; that field
    /// only participates in category search.
    ///
    /// The total count reflects the full match set, not the page slice.
    pub async fn search(
        pool: &PgPool,
        keyword: &str,
        page: i64,
        page_size: i64,
        sort: SortOrder,
    ) -> Result<Page<Product>, sqlx::Error> {
        let pattern = format!("%{keyword}%");

        let (total,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM products WHERE name ILIKE $1")
                .bind(&pattern)
                .fetch_one(pool)
                .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE name ILIKE $1
             ORDER BY {} LIMIT $2 OFFSET $3",
            sort.sql()
        );
        let items = sqlx::query_as::<_, Product>(&query)
            .bind(&pattern)
            .bind(page_size)
            .bind(page_offset(page, page_size))
            .fetch_all(pool)
            .await?;

        Ok(Page::new(items, total, page, page_size))
    }

    /// List all products owned by a category, newest first.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM products WHERE category_id = $1 ORDER BY id DESC");
        sqlx::query_as::<_, Product>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Update a product. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                name = COALESCE($2, name),
                unit_price = COALESCE($3, unit_price),
                discount = COALESCE($4, discount),
                description = COALESCE($5, description),
                category_id = COALESCE($6, category_id),
                quantity = COALESCE($7, quantity),
                status = COALESCE($8, status),
                images = COALESCE($9, images)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.unit_price)
            .bind(input.discount)
            .bind(&input.description)
            .bind(input.category_id)
            .bind(input.quantity)
            .bind(input.status)
            .bind(&input.images)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a product by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of products.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
