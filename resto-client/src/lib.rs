//! resto-client - client for the restaurant discovery API
//!
//! HTTP access to the REST API plus the client-side state the listing,
//! detail and saved pages need: local browse/paging, the optimistic
//! favorite/bookmark protocol and per-section load state.

pub mod api;
pub mod browse;
pub mod config;
pub mod detail;
pub mod error;
pub mod generation;
pub mod http;
pub mod saved;
pub mod section;
pub mod session;

pub use api::RestoApi;
pub use browse::BrowseView;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use generation::{FetchOutcome, GenerationTicket, RequestGeneration};
pub use http::HttpClient;
pub use saved::{SavedService, SavedState, ToggleOutcome, TogglePhase};
pub use section::SectionState;
pub use session::{Session, SessionStorage, SignedInUser};

// Re-export shared types for convenience
pub use shared::models::{RestaurantRecord, SaveRequest, SaveStatus};
