//! Response bodies of the listing endpoints

use serde::{Deserialize, Serialize};

use crate::browse::PageWindow;
use crate::models::RestaurantRecord;

/// One page of `GET /getRestaurants`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantPage {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub restaurants: Vec<RestaurantRecord>,
}

impl RestaurantPage {
    pub fn new(restaurants: Vec<RestaurantRecord>, window: &PageWindow) -> Self {
        Self {
            page: window.current_page(),
            limit: window.page_size(),
            total: window.total_items() as u64,
            total_pages: window.total_pages(),
            restaurants,
        }
    }

    /// Whole result set as a single page.
    pub fn unpaged(restaurants: Vec<RestaurantRecord>) -> Self {
        let len = restaurants.len();
        let limit = u32::try_from(len).unwrap_or(u32::MAX).max(1);
        Self::new(restaurants, &PageWindow::new(limit, len))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityList {
    pub cities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuisineList {
    pub cuisines: Vec<String>,
}

/// Plain `{ "message": ... }` acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpaged_empty() {
        let page = RestaurantPage::unpaged(Vec::new());
        assert_eq!(page.page, 1);
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_page_metadata() {
        let window = PageWindow::at(2, 9, 10);
        let page = RestaurantPage::new(Vec::new(), &window);
        assert_eq!((page.page, page.limit, page.total, page.total_pages), (2, 9, 10, 2));
    }
}
