//! Shared types for the restaurant discovery services
//!
//! Common types used by both the API server and the client, including
//! the restaurant models, the browse (filter/pagination) engine, error
//! types and response structures.

pub mod browse;
pub mod error;
pub mod models;
pub mod response;

pub use browse::{BrowseState, FilterCriteria, PageControls, PageWindow, ReviewCountRange};
pub use models::{RestaurantRecord, SaveStatus};
