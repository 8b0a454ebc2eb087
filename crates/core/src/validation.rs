//! Field-level validation for catalog payloads.
//!
//! The database enforces uniqueness and column limits; these checks run
//! first so callers get a precise message instead of a driver error.

use crate::error::CoreError;

/// Maximum length of a category name.
pub const MAX_CATEGORY_NAME_LEN: usize = 100;

/// Maximum length of a category description.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Validate a category name: non-empty after trimming, at most 100 chars.
pub fn validate_category_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Category name must not be empty".into()));
    }
    if name.chars().count() > MAX_CATEGORY_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Category name must be at most {MAX_CATEGORY_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate an optional description: at most 500 chars.
pub fn validate_description(description: Option<&str>) -> Result<(), CoreError> {
    if let Some(desc) = description {
        if desc.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(CoreError::Validation(format!(
                "Description must be at most {MAX_DESCRIPTION_LEN} characters"
            )));
        }
    }
    Ok(())
}

/// Validate a product name: non-empty after trimming.
pub fn validate_product_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Product name must not be empty".into()));
    }
    Ok(())
}

/// Validate a unit price: must be finite and non-negative.
pub fn validate_unit_price(price: f64) -> Result<(), CoreError> {
    if !price.is_finite() || price < 0.0 {
        return Err(CoreError::Validation(
            "Unit price must be a non-negative number".into(),
        ));
    }
    Ok(())
}

/// Validate a discount. Discounts are a fraction of the unit price in
/// `0.0..=1.0` (0.1 = 10% off).
pub fn validate_discount(discount: f64) -> Result<(), CoreError> {
    if !discount.is_finite() || !(0.0..=1.0).contains(&discount) {
        return Err(CoreError::Validation(
            "Discount must be a fraction between 0.0 and 1.0".into(),
        ));
    }
    Ok(())
}

/// Validate a quantity: non-negative.
pub fn validate_quantity(quantity: i32) -> Result<(), CoreError> {
    if quantity < 0 {
        return Err(CoreError::Validation("Quantity must not be negative".into()));
    }
    Ok(())
}
