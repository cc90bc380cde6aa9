//! resto-server: restaurant query provider
//!
//! REST API over PostgreSQL:
//! - Restaurant listing with filters and optional server-side paging
//! - Restaurant details, summaries and reviews
//! - Per-user saved status (favorite / want to visit)

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod state;

pub use config::Config;
pub use state::AppState;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
