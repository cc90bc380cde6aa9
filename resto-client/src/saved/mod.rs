//! Favorite / bookmark protocol

mod service;
mod state;

pub use service::{SavedService, ToggleOutcome};
pub use state::{PendingToggle, SavedState, TogglePhase};
