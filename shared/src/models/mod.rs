//! Domain models
//!
//! Read models returned by the restaurant API and consumed by the client.

pub mod details;
pub mod hours;
pub mod restaurant;
pub mod review;
pub mod saved;

pub use details::{Amenities, RestaurantDetails};
pub use hours::BusinessHours;
pub use restaurant::{BusinessName, RestaurantRecord};
pub use review::{NewReview, PostedReview, Review};
pub use saved::{SaveRequest, SaveStatus};
