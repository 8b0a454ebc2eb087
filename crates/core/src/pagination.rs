//! Pagination constants, clamping helpers, and the page envelope.
//!
//! This module lives in `core` (zero internal deps) so the repository layer
//! and the API layer share one set of page semantics.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Default number of catalog entries per page.
pub const DEFAULT_PAGE_SIZE: i64 = 5;

/// Maximum number of catalog entries per page.
pub const MAX_PAGE_SIZE: i64 = 100;

// ---------------------------------------------------------------------------
// Page envelope
// ---------------------------------------------------------------------------

/// A bounded slice of a larger ordered result set.
///
/// `total_elements` always reflects the full (unpaged) predicate, and
/// `total_pages` is `ceil(total_elements / page_size)`.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
    pub page: i64,
    pub page_size: i64,
}

impl<T> Page<T> {
    /// Assemble a page from a fetched slice plus the unpaged total.
    pub fn new(items: Vec<T>, total_elements: i64, page: i64, page_size: i64) -> Self {
        Self {
            items,
            total_elements,
            total_pages: total_pages(total_elements, page_size),
            page,
            page_size,
        }
    }
}

/// Number of pages needed to hold `total_elements` at `page_size` per page.
pub fn total_pages(total_elements: i64, page_size: i64) -> i64 {
    if page_size <= 0 {
        return 0;
    }
    (total_elements + page_size - 1) / page_size
}

// ---------------------------------------------------------------------------
// Clamping
// ---------------------------------------------------------------------------
//
// Policy: out-of-range values are clamped, never rejected. Applied uniformly
// by every paginated repository method.

/// Clamp a user-provided page index to non-negative. Defaults to 0.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(0).max(0)
}

/// Clamp a user-provided page size to `1..=max`. Defaults to `default`.
pub fn clamp_page_size(size: Option<i64>, default: i64, max: i64) -> i64 {
    size.unwrap_or(default).max(1).min(max)
}

/// Row offset for `page` at `page_size` entries per page.
///
/// Saturates instead of overflowing, so an absurdly large page index yields
/// an offset past the end of any result set rather than a panic or a
/// negative offset.
pub fn page_offset(page: i64, page_size: i64) -> i64 {
    page.saturating_mul(page_size)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
