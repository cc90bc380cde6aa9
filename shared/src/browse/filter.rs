//! Multi-criteria restaurant filter

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::RestaurantRecord;

/// Upper end of the review-count slider. A range ending here has no upper bound.
pub const REVIEW_COUNT_SLIDER_MAX: u32 = 2000;

/// Inclusive review-count range, always `min <= max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewCountRange {
    min: u32,
    max: u32,
}

impl ReviewCountRange {
    /// Build a range; bounds given out of order are swapped.
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// `max` exactly at the slider maximum means "and above".
    pub fn is_open_ended(&self) -> bool {
        self.max == REVIEW_COUNT_SLIDER_MAX
    }

    pub fn contains(&self, review_count: u32) -> bool {
        review_count >= self.min && (self.is_open_ended() || review_count <= self.max)
    }
}

impl Default for ReviewCountRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: REVIEW_COUNT_SLIDER_MAX,
        }
    }
}

/// Active filter selections of the listing page
///
/// Empty sets place no constraint. Created with defaults, mutated by the
/// user, reset to defaults explicitly; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub cities: BTreeSet<String>,
    pub cuisines: BTreeSet<String>,
    pub min_stars: f64,
    pub review_count_range: ReviewCountRange,
}

impl FilterCriteria {
    pub const MAX_STARS: f64 = 5.0;

    pub fn with_cities<I, S>(mut self, cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cities = cities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_cuisines<I, S>(mut self, cuisines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cuisines = cuisines.into_iter().map(Into::into).collect();
        self
    }

    /// Star threshold, clamped to `0.0..=5.0` (NaN becomes 0).
    pub fn with_min_stars(mut self, min_stars: f64) -> Self {
        self.min_stars = if min_stars.is_nan() {
            0.0
        } else {
            min_stars.clamp(0.0, Self::MAX_STARS)
        };
        self
    }

    pub fn with_review_count_range(mut self, min: u32, max: u32) -> Self {
        self.review_count_range = ReviewCountRange::new(min, max);
        self
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// All four clauses must hold.
    pub fn matches(&self, restaurant: &RestaurantRecord) -> bool {
        (self.cities.is_empty() || self.cities.contains(&restaurant.city))
            && (self.cuisines.is_empty() || self.cuisines.contains(&restaurant.cuisine))
            && restaurant.stars >= self.min_stars
            && self.review_count_range.contains(restaurant.review_count)
    }
}

/// Stable filter: matching records keep their input order.
pub fn apply_filters(
    all_restaurants: &[RestaurantRecord],
    criteria: &FilterCriteria,
) -> Vec<RestaurantRecord> {
    all_restaurants
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect()
}

/// Criteria with every field at its default.
pub fn reset_filters() -> FilterCriteria {
    FilterCriteria::default()
}
