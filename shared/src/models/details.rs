//! Restaurant detail page model

use serde::{Deserialize, Serialize};

use super::hours::BusinessHours;
use super::review::Review;

/// Attribute flags of a business; absent values are unknown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Amenities {
    pub wifi: Option<bool>,
    pub outdoor_seating: Option<bool>,
    pub parking_garage: Option<bool>,
    pub parking_street: Option<bool>,
    pub parking_validated: Option<bool>,
    pub parking_lot: Option<bool>,
    pub parking_valet: Option<bool>,
    pub good_for_groups: Option<bool>,
    pub alcohol: Option<String>,
    pub price_range: Option<i32>,
    pub noise_level: Option<String>,
    pub wheelchair_accessible: Option<bool>,
    pub has_tv: Option<bool>,
}

/// Single restaurant with amenities, hours and (optionally) reviews
///
/// `reviews` is omitted by the summary endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantDetails {
    pub business_id: String,
    pub restaurant_name: String,
    pub address: String,
    pub cuisine: String,
    pub stars: f64,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub amenities: Amenities,
    #[serde(default)]
    pub business_hours: Vec<BusinessHours>,
    #[serde(rename = "isOpen", default)]
    pub is_open: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
}
