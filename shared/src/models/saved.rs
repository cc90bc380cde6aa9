//! Saved restaurant status (favorite / want to visit)
//!
//! The server keeps one `status` per `(user_id, business_id)` row, so a
//! restaurant is either a favorite, on the want-to-visit list, or neither.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status token stored on a saved row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaveStatus {
    /// Favorited restaurant
    #[serde(rename = "favorite")]
    Favorite,
    /// Bookmarked restaurant ("want to visit")
    #[serde(rename = "want to visit")]
    WantToVisit,
}

impl SaveStatus {
    pub const FAVORITE_TOKEN: &'static str = "favorite";
    pub const WANT_TO_VISIT_TOKEN: &'static str = "want to visit";

    /// Wire / database token
    pub const fn as_token(&self) -> &'static str {
        match self {
            SaveStatus::Favorite => Self::FAVORITE_TOKEN,
            SaveStatus::WantToVisit => Self::WANT_TO_VISIT_TOKEN,
        }
    }
}

impl fmt::Display for SaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Error for a status token other than the two known ones
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown save status: {0}")]
pub struct UnknownSaveStatus(pub String);

impl FromStr for SaveStatus {
    type Err = UnknownSaveStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::FAVORITE_TOKEN => Ok(SaveStatus::Favorite),
            Self::WANT_TO_VISIT_TOKEN => Ok(SaveStatus::WantToVisit),
            other => Err(UnknownSaveStatus(other.to_string())),
        }
    }
}

/// Body of `POST /add-userfav-bookmarks`
///
/// `status: None` serializes as `null` and deletes the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRequest {
    pub user_id: String,
    pub business_id: String,
    pub status: Option<SaveStatus>,
}
