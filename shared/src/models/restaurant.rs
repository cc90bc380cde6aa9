//! Restaurant listing record

use serde::{Deserialize, Serialize};

/// Separator used by the dataset for the `categories` column
pub const CATEGORY_SEPARATOR: char = ';';

/// Restaurant snapshot returned by the listing endpoints
///
/// Immutable once fetched; a refetch replaces the whole set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    /// Opaque unique business key
    pub business_id: String,
    pub name: String,
    pub city: String,
    pub cuisine: String,
    /// Average rating, 0.0 – 5.0
    pub stars: f64,
    pub review_count: u32,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Computed server-side from the weekly hours table
    #[serde(rename = "isOpen", default)]
    pub is_open: bool,
}

/// `{ business_id, name }` pair for name lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BusinessName {
    pub business_id: String,
    pub name: String,
}

/// Split the raw `;`-separated categories column, dropping blanks.
pub fn split_categories(raw: &str) -> Vec<String> {
    raw.split(CATEGORY_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
