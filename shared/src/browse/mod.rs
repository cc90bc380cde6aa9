//! Filter/pagination engine for the restaurant listing
//!
//! Pure, in-memory, no I/O. The client holds one [`BrowseState`] per listing
//! view and re-pages locally; the server reuses [`PageWindow`] for its
//! `LIMIT/OFFSET` arithmetic.

mod filter;
mod page;
mod query;

pub use filter::{
    FilterCriteria, REVIEW_COUNT_SLIDER_MAX, ReviewCountRange, apply_filters, reset_filters,
};
pub use page::{
    DEFAULT_PAGE_SIZE, MAX_PAGE_BUTTONS, PageControls, PageWindow, change_page, page,
    page_controls,
};
pub use query::RestaurantQuery;

use crate::models::RestaurantRecord;

/// Listing state: full result set, criteria, filtered list and window
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseState {
    all: Vec<RestaurantRecord>,
    criteria: FilterCriteria,
    filtered: Vec<RestaurantRecord>,
    window: PageWindow,
}

impl BrowseState {
    pub fn new(page_size: u32) -> Self {
        Self {
            all: Vec::new(),
            criteria: FilterCriteria::default(),
            filtered: Vec::new(),
            window: PageWindow::new(page_size, 0),
        }
    }

    /// Replace the result set wholesale and re-filter from page 1.
    pub fn replace_results(&mut self, records: Vec<RestaurantRecord>) {
        self.all = records;
        self.apply_filters();
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Edit criteria in place. Takes effect on the next [`apply_filters`](Self::apply_filters).
    pub fn criteria_mut(&mut self) -> &mut FilterCriteria {
        &mut self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.apply_filters();
    }

    /// Re-filter with the current criteria; the window moves back to page 1.
    pub fn apply_filters(&mut self) {
        self.filtered = apply_filters(&self.all, &self.criteria);
        self.window = self.window.reset(self.filtered.len());
    }

    pub fn reset_filters(&mut self) {
        self.criteria = reset_filters();
        self.apply_filters();
    }

    /// Clamp and move to `requested`, returning the page actually shown.
    pub fn change_page(&mut self, requested: i64) -> u32 {
        self.window = self.window.change_page(requested);
        self.window.current_page()
    }

    pub fn current_page_items(&self) -> &[RestaurantRecord] {
        self.window.slice(&self.filtered)
    }

    pub fn all(&self) -> &[RestaurantRecord] {
        &self.all
    }

    pub fn filtered(&self) -> &[RestaurantRecord] {
        &self.filtered
    }

    pub fn window(&self) -> PageWindow {
        self.window
    }

    pub fn controls(&self) -> PageControls {
        self.window.controls()
    }
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: usize, city: &str) -> RestaurantRecord {
        RestaurantRecord {
            business_id: format!("b{id}"),
            name: format!("Restaurant {id:02}"),
            city: city.into(),
            cuisine: "American".into(),
            stars: 4.0,
            review_count: 120,
            categories: vec!["Restaurants".into()],
            is_open: true,
        }
    }

    fn thirteen() -> Vec<RestaurantRecord> {
        (0..13)
            .map(|i| record(i, if i < 10 { "New York" } else { "Los Angeles" }))
            .collect()
    }

    #[test]
    fn test_city_filter_pages_nine_then_one() {
        let mut state = BrowseState::new(9);
        state.replace_results(thirteen());
        assert_eq!(state.filtered().len(), 13);

        state.criteria_mut().cities.insert("New York".into());
        state.apply_filters();

        assert_eq!(state.filtered().len(), 10);
        assert_eq!(state.window().total_pages(), 2);
        assert_eq!(state.current_page_items().len(), 9);
        assert_eq!(state.change_page(2), 2);
        assert_eq!(state.current_page_items().len(), 1);
        assert!(state.filtered().iter().all(|r| r.city == "New York"));
    }

    #[test]
    fn test_apply_filters_returns_to_first_page() {
        let mut state = BrowseState::new(2);
        state.replace_results(thirteen());
        assert_eq!(state.change_page(5), 5);

        state.set_criteria(FilterCriteria::default().with_min_stars(3.0));
        assert_eq!(state.window().current_page(), 1);
    }

    #[test]
    fn test_reset_filters() {
        let mut state = BrowseState::new(9);
        state.replace_results(thirteen());
        state.set_criteria(FilterCriteria::default().with_cities(["Los Angeles"]));
        assert_eq!(state.filtered().len(), 3);

        state.reset_filters();
        assert!(state.criteria().is_default());
        assert_eq!(state.filtered().len(), 13);
        assert_eq!(state.window().current_page(), 1);
    }

    #[test]
    fn test_change_page_clamps_on_state() {
        let mut state = BrowseState::new(9);
        state.replace_results(thirteen());
        assert_eq!(state.change_page(0), 1);
        assert_eq!(state.change_page(-5), 1);
        assert_eq!(state.change_page(9999), 2);
    }

    #[test]
    fn test_empty_results() {
        let mut state = BrowseState::default();
        state.replace_results(Vec::new());
        assert!(state.current_page_items().is_empty());
        assert_eq!(state.change_page(3), 1);
        assert!(state.controls().pages.is_empty());
    }
}
