//! Sort specification for paginated catalog queries.

use serde::Deserialize;

/// Fixed sort orders for listing and search.
///
/// Rendered to constant SQL fragments, never interpolated from user input.
/// The default is newest-identity-first, matching the listing pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    IdDesc,
    IdAsc,
    NameAsc,
    NameDesc,
    CreatedAtDesc,
}

impl SortOrder {
    /// The `ORDER BY` fragment for this sort order.
    pub fn sql(self) -> &'static str {
        match self {
            SortOrder::IdDesc => "id DESC",
            SortOrder::IdAsc => "id ASC",
            SortOrder::NameAsc => "name ASC",
            SortOrder::NameDesc => "name DESC",
            SortOrder::CreatedAtDesc => "created_at DESC",
        }
    }
}
