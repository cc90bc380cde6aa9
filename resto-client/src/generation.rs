//! Request-generation tagging
//!
//! Each fetch site owns a [`RequestGeneration`]. Issuing a request takes a
//! ticket; when the response arrives it is applied only if no newer ticket
//! has been issued since.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counter shared by all requests of one fetch site
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    latest: Arc<AtomicU64>,
}

/// Generation stamped on one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GenerationTicket(u64);

impl GenerationTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket; every earlier ticket becomes stale.
    pub fn next(&self) -> GenerationTicket {
        GenerationTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_current(&self, ticket: GenerationTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }
}

/// Result of a generation-tagged fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    /// Response belonged to the latest request and was applied
    Applied(T),
    /// A newer request was issued; the response was dropped
    Stale,
}

impl<T> FetchOutcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, FetchOutcome::Applied(_))
    }
}
