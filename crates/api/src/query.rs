//! Shared query parameter types for API handlers.

use serde::Deserialize;
use stockroom_db::models::sort::SortOrder;

/// Query parameters for paginated listing/search endpoints
/// (`?keyword=&page=&size=&sort=`).
///
/// A missing or blank `keyword` means an unfiltered listing. `page` and
/// `size` are clamped in the service layer; `sort` defaults to newest
/// identity first.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub keyword: Option<String>,
    pub page: Option<i64>,
    pub size: Option<i64>,
    #[serde(default)]
    pub sort: SortOrder,
}
