//! Product entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stockroom_core::types::{DbId, Timestamp};

/// A product row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub unit_price: f64,
    /// Fraction of the unit price in `0.0..=1.0` (0.1 = 10% off).
    pub discount: f64,
    pub description: Option<String>,
    /// Owning category. Nullable: kept when the category lookup fails at
    /// create time, and nulled by the FK when detached.
    pub category_id: Option<DbId>,
    pub quantity: i32,
    pub status: i16,
    /// Stored asset name of the product image, if one was uploaded.
    pub images: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub unit_price: f64,
    #[serde(default)]
    pub discount: f64,
    pub description: Option<String>,
    pub category_id: Option<DbId>,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default = "default_status")]
    pub status: i16,
    /// Set by the service layer after the image asset is stored.
    #[serde(skip)]
    pub images: Option<String>,
}

fn default_status() -> i16 {
    1
}

/// DTO for updating an existing product. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub unit_price: Option<f64>,
    pub discount: Option<f64>,
    pub description: Option<String>,
    pub category_id: Option<DbId>,
    pub quantity: Option<i32>,
    pub status: Option<i16>,
    /// Set by the service layer when a replacement image is stored.
    #[serde(skip)]
    pub images: Option<String>,
}
