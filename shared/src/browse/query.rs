//! `GET /getRestaurants` query parameters

use serde::{Deserialize, Serialize};

use super::filter::{FilterCriteria, REVIEW_COUNT_SLIDER_MAX};
use crate::error::{AppError, AppResult, ErrorCode};

const LIST_SEPARATOR: char = ',';

/// Filter and page parameters as carried in the query string
///
/// Set-valued fields are comma-separated. Absent fields place no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestaurantQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cities: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisines: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_stars: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_reviews: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_reviews: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl RestaurantQuery {
    /// Query expressing `criteria`; default fields are left out.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let join = |set: &std::collections::BTreeSet<String>| {
            (!set.is_empty()).then(|| {
                set.iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(",")
            })
        };
        let range = criteria.review_count_range;
        Self {
            cities: join(&criteria.cities),
            cuisines: join(&criteria.cuisines),
            min_stars: (criteria.min_stars > 0.0).then_some(criteria.min_stars),
            min_reviews: (range.min() > 0).then_some(range.min()),
            max_reviews: (!range.is_open_ended()).then_some(range.max()),
            page: None,
            limit: None,
        }
    }

    pub fn with_page(mut self, page: i64, limit: u32) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }

    /// Validated criteria. `min_stars` outside `0..=5` is rejected; review
    /// bounds given out of order are swapped.
    pub fn criteria(&self) -> AppResult<FilterCriteria> {
        let mut criteria = FilterCriteria::default();

        if let Some(min_stars) = self.min_stars {
            if !(0.0..=FilterCriteria::MAX_STARS).contains(&min_stars) {
                return Err(AppError::with_message(
                    ErrorCode::InvalidFilter,
                    "min_stars must be between 0 and 5",
                )
                .with_detail("min_stars", min_stars));
            }
            criteria = criteria.with_min_stars(min_stars);
        }

        if let Some(cities) = &self.cities {
            criteria = criteria.with_cities(split_list(cities));
        }
        if let Some(cuisines) = &self.cuisines {
            criteria = criteria.with_cuisines(split_list(cuisines));
        }

        let min = self.min_reviews.unwrap_or(0);
        let max = self.max_reviews.unwrap_or(REVIEW_COUNT_SLIDER_MAX);
        Ok(criteria.with_review_count_range(min, max))
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_default() {
        let criteria = RestaurantQuery::default().criteria().unwrap();
        assert!(criteria.is_default());
    }

    #[test]
    fn test_lists_are_split_and_trimmed() {
        let query = RestaurantQuery {
            cities: Some("New York, Philadelphia,,".into()),
            cuisines: Some("Thai".into()),
            ..Default::default()
        };
        let criteria = query.criteria().unwrap();
        assert_eq!(criteria.cities.len(), 2);
        assert!(criteria.cities.contains("Philadelphia"));
        assert!(criteria.cuisines.contains("Thai"));
    }

    #[test]
    fn test_min_stars_out_of_range_rejected() {
        let query = RestaurantQuery {
            min_stars: Some(5.5),
            ..Default::default()
        };
        assert_eq!(query.criteria().unwrap_err().code, ErrorCode::InvalidFilter);
    }

    #[test]
    fn test_review_bounds_swapped() {
        let query = RestaurantQuery {
            min_reviews: Some(200),
            max_reviews: Some(100),
            ..Default::default()
        };
        let range = query.criteria().unwrap().review_count_range;
        assert_eq!((range.min(), range.max()), (100, 200));
    }

    #[test]
    fn test_from_criteria_roundtrips_through_validation() {
        let criteria = FilterCriteria::default()
            .with_cities(["Austin", "Boston"])
            .with_min_stars(3.5)
            .with_review_count_range(10, 500);
        let query = RestaurantQuery::from_criteria(&criteria);
        assert_eq!(query.cities.as_deref(), Some("Austin,Boston"));
        assert_eq!(query.cuisines, None);
        assert_eq!(query.criteria().unwrap(), criteria);
    }

    #[test]
    fn test_max_reviews_above_slider_is_sent() {
        let criteria = FilterCriteria::default().with_review_count_range(0, 2500);
        let query = RestaurantQuery::from_criteria(&criteria);
        assert_eq!(query.max_reviews, Some(2500));
        assert!(!query.criteria().unwrap().review_count_range.is_open_ended());
    }

    #[test]
    fn test_default_criteria_serializes_no_params() {
        let query = RestaurantQuery::from_criteria(&FilterCriteria::default());
        assert_eq!(serde_json::to_value(&query).unwrap(), serde_json::json!({}));
    }
}
