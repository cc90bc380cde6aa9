//! Restaurant detail page loading

use shared::models::{RestaurantDetails, Review};

use crate::{RestoApi, SectionState};

/// Independently loaded sections of the detail page
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPage {
    pub summary: SectionState<RestaurantDetails>,
    pub reviews: SectionState<Vec<Review>>,
}

/// Fetch summary and reviews concurrently; a failure in one leaves the other intact.
pub async fn load_detail_page<A: RestoApi + ?Sized>(api: &A, business_id: &str) -> DetailPage {
    let (summary, reviews) = tokio::join!(
        api.restaurant_summary(business_id),
        api.reviews(business_id)
    );
    if let Err(e) = &summary {
        tracing::warn!(%business_id, "Restaurant summary failed: {e}");
    }
    DetailPage {
        summary: SectionState::from_result(summary),
        reviews: SectionState::from_list(reviews),
    }
}
