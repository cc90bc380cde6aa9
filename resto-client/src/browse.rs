//! Listing view: one fetch per refresh, local filtering and paging

use std::sync::Arc;

use shared::browse::{BrowseState, FilterCriteria, PageControls, PageWindow, RestaurantQuery};
use shared::models::RestaurantRecord;
use tokio::sync::Mutex;

use crate::{ClientConfig, ClientResult, FetchOutcome, RequestGeneration, RestoApi, SectionState};

/// Filter option lists shown next to the listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub cities: SectionState<Vec<String>>,
    pub cuisines: SectionState<Vec<String>>,
}

/// Client-side restaurant listing
///
/// [`refresh`](Self::refresh) fetches the full result set; every filter and
/// page change afterwards runs locally without a round-trip.
pub struct BrowseView<A> {
    api: Arc<A>,
    generation: RequestGeneration,
    inner: Mutex<Inner>,
}

struct Inner {
    browse: BrowseState,
    listing: SectionState<usize>,
}

impl<A: RestoApi> BrowseView<A> {
    pub fn new(api: Arc<A>, config: &ClientConfig) -> Self {
        Self {
            api,
            generation: RequestGeneration::new(),
            inner: Mutex::new(Inner {
                browse: BrowseState::new(config.page_size),
                listing: SectionState::Loading,
            }),
        }
    }

    /// Fetch all restaurants and replace the local result set.
    ///
    /// A response overtaken by a later refresh is dropped as [`FetchOutcome::Stale`].
    pub async fn refresh(&self) -> ClientResult<FetchOutcome<usize>> {
        let ticket = self.generation.next();
        self.inner.lock().await.listing = SectionState::Loading;

        let result = self.api.restaurants(&RestaurantQuery::default()).await;

        let mut inner = self.inner.lock().await;
        if !self.generation.is_current(ticket) {
            tracing::debug!(ticket = ticket.value(), "Dropping stale restaurant listing");
            return Ok(FetchOutcome::Stale);
        }
        match result {
            Ok(page) => {
                let count = page.restaurants.len();
                inner.browse.replace_results(page.restaurants);
                inner.listing = if count == 0 {
                    SectionState::Empty
                } else {
                    SectionState::Ready(count)
                };
                Ok(FetchOutcome::Applied(count))
            }
            Err(e) => {
                inner.listing = SectionState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Load the city and cuisine lists; each fails on its own.
    pub async fn load_filter_options(&self) -> FilterOptions {
        let (cities, cuisines) =
            tokio::join!(self.api.unique_cities(), self.api.unique_cuisines());
        FilterOptions {
            cities: SectionState::from_list(cities),
            cuisines: SectionState::from_list(cuisines),
        }
    }

    pub async fn listing_state(&self) -> SectionState<usize> {
        self.inner.lock().await.listing.clone()
    }

    pub async fn criteria(&self) -> FilterCriteria {
        self.inner.lock().await.browse.criteria().clone()
    }

    /// Replace the criteria and re-filter from page 1.
    pub async fn apply_filters(&self, criteria: FilterCriteria) -> usize {
        let mut inner = self.inner.lock().await;
        inner.browse.set_criteria(criteria);
        inner.browse.filtered().len()
    }

    pub async fn reset_filters(&self) -> usize {
        let mut inner = self.inner.lock().await;
        inner.browse.reset_filters();
        inner.browse.filtered().len()
    }

    /// Move to `requested` (clamped); returns the page now shown.
    pub async fn change_page(&self, requested: i64) -> u32 {
        self.inner.lock().await.browse.change_page(requested)
    }

    pub async fn current_page(&self) -> Vec<RestaurantRecord> {
        self.inner.lock().await.browse.current_page_items().to_vec()
    }

    pub async fn window(&self) -> PageWindow {
        self.inner.lock().await.browse.window()
    }

    pub async fn controls(&self) -> PageControls {
        self.inner.lock().await.browse.controls()
    }
}
