//! Restaurant reviews

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult, ErrorCode};

/// Review as listed on a restaurant page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Review {
    pub review_id: String,
    pub user_name: String,
    pub review_star: i32,
    pub review_date: DateTime<Utc>,
    pub review_text: String,
    pub useful: i32,
    pub funny: i32,
    pub cool: i32,
}

/// Body of `POST /postReview`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReview {
    pub user_id: String,
    pub business_id: String,
    pub stars: i32,
    pub review_text: String,
    #[serde(default)]
    pub useful: i32,
    #[serde(default)]
    pub funny: i32,
    #[serde(default)]
    pub cool: i32,
}

impl NewReview {
    pub const MIN_STARS: i32 = 1;
    pub const MAX_STARS: i32 = 5;

    /// Check field values before the review is stored.
    pub fn validate(&self) -> AppResult<()> {
        if self.user_id.trim().is_empty() {
            return Err(AppError::required("user_id"));
        }
        if self.business_id.trim().is_empty() {
            return Err(AppError::required("business_id"));
        }
        if !(Self::MIN_STARS..=Self::MAX_STARS).contains(&self.stars) {
            return Err(AppError::new(ErrorCode::ReviewRatingOutOfRange)
                .with_detail("stars", self.stars));
        }
        if self.review_text.trim().is_empty() {
            return Err(AppError::new(ErrorCode::ReviewTextEmpty));
        }
        if self.useful < 0 || self.funny < 0 || self.cool < 0 {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                "Vote counts must not be negative",
            ));
        }
        Ok(())
    }
}

/// Response of `POST /postReview`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostedReview {
    pub message: String,
    pub review_id: String,
    pub review_date: DateTime<Utc>,
}
