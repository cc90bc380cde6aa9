//! Database access layer

pub mod restaurants;
pub mod reviews;
pub mod saved;
