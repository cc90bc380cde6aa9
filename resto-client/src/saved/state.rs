//! Local saved-status map and its two-phase toggle state machine

use std::collections::HashMap;

use shared::models::{RestaurantRecord, SaveStatus};

/// Phase of a restaurant's most recent toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TogglePhase {
    /// No toggle in flight; local state matches the last server answer
    Confirmed,
    /// Optimistic value shown, server answer outstanding
    Pending,
    /// Last toggle failed and was reverted
    RolledBack,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    /// Status shown, possibly optimistic
    status: Option<SaveStatus>,
    generation: u64,
    phase: TogglePhase,
    /// Last status the server acknowledged
    confirmed: Option<SaveStatus>,
    /// Generation that produced `confirmed`
    confirmed_generation: u64,
}

impl Entry {
    fn settled(status: Option<SaveStatus>, generation: u64) -> Self {
        Self {
            status,
            generation,
            phase: TogglePhase::Confirmed,
            confirmed: status,
            confirmed_generation: generation,
        }
    }

    /// Record a server acknowledgement unless a newer one is already known.
    fn acknowledge(&mut self, generation: u64, status: Option<SaveStatus>) {
        if generation > self.confirmed_generation {
            self.confirmed = status;
            self.confirmed_generation = generation;
        }
    }

    /// With nothing newer in flight, show what the server holds.
    fn resync(&mut self) {
        if self.phase != TogglePhase::Pending {
            self.status = self.confirmed;
        }
    }
}

/// One optimistic toggle, returned by [`SavedState::begin_toggle`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingToggle {
    pub business_id: String,
    pub generation: u64,
    /// Status before the toggle
    pub previous: Option<SaveStatus>,
    /// Status optimistically applied (and sent to the server)
    pub next: Option<SaveStatus>,
}

/// `business_id -> SaveStatus` map; absent means neither saved nor favorited
///
/// Favorite and bookmark are projections of the single status, so a
/// restaurant is never both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedState {
    entries: HashMap<String, Entry>,
}

impl SavedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the two server lists. Favorites are applied after
    /// bookmarks, so a restaurant listed in both resolves to favorite.
    pub fn from_lists(favorites: &[RestaurantRecord], bookmarks: &[RestaurantRecord]) -> Self {
        let mut state = Self::new();
        let lists = [
            (bookmarks, SaveStatus::WantToVisit),
            (favorites, SaveStatus::Favorite),
        ];
        for (records, status) in lists {
            for record in records {
                state
                    .entries
                    .insert(record.business_id.clone(), Entry::settled(Some(status), 0));
            }
        }
        state
    }

    /// Replace statuses with a fresh server snapshot.
    ///
    /// Generations keep counting, so toggles still in flight resolve as superseded.
    pub fn replace_with(&mut self, snapshot: SavedState) {
        let mut entries = snapshot.entries;
        for (business_id, old) in &self.entries {
            let generation = old.generation + 1;
            entries
                .entry(business_id.clone())
                .and_modify(|e| *e = Entry::settled(e.status, generation))
                .or_insert(Entry::settled(None, generation));
        }
        self.entries = entries;
    }

    pub fn status(&self, business_id: &str) -> Option<SaveStatus> {
        self.entries.get(business_id).and_then(|e| e.status)
    }

    pub fn is_favorite(&self, business_id: &str) -> bool {
        self.status(business_id) == Some(SaveStatus::Favorite)
    }

    pub fn is_bookmarked(&self, business_id: &str) -> bool {
        self.status(business_id) == Some(SaveStatus::WantToVisit)
    }

    pub fn phase(&self, business_id: &str) -> TogglePhase {
        self.entries
            .get(business_id)
            .map_or(TogglePhase::Confirmed, |e| e.phase)
    }

    /// Ids currently shown with `status`, sorted
    pub fn ids_with(&self, status: SaveStatus) -> Vec<String> {
        let mut ids: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, e)| e.status == Some(status))
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// Flip `flag` for `business_id` and apply it locally.
    ///
    /// Turning a flag on replaces whichever status was set; turning it off
    /// clears the row.
    pub fn begin_toggle(&mut self, business_id: &str, flag: SaveStatus) -> PendingToggle {
        let entry = self
            .entries
            .entry(business_id.to_string())
            .or_insert(Entry::settled(None, 0));

        let previous = entry.status;
        let next = if previous == Some(flag) { None } else { Some(flag) };
        entry.status = next;
        entry.generation += 1;
        entry.phase = TogglePhase::Pending;

        PendingToggle {
            business_id: business_id.to_string(),
            generation: entry.generation,
            previous,
            next,
        }
    }

    /// Server accepted the toggle. `false` when a newer toggle superseded it.
    ///
    /// A superseded acknowledgement still updates the server-side status,
    /// and is shown if no newer toggle is in flight.
    pub fn confirm(&mut self, toggle: &PendingToggle) -> bool {
        let Some(entry) = self.entries.get_mut(&toggle.business_id) else {
            return false;
        };
        entry.acknowledge(toggle.generation, toggle.next);
        if entry.generation == toggle.generation {
            entry.phase = TogglePhase::Confirmed;
            true
        } else {
            entry.resync();
            false
        }
    }

    /// Server rejected the toggle: restore the last acknowledged status.
    /// `false` when a newer toggle superseded it.
    pub fn roll_back(&mut self, toggle: &PendingToggle) -> bool {
        let Some(entry) = self.entries.get_mut(&toggle.business_id) else {
            return false;
        };
        if entry.generation == toggle.generation {
            entry.phase = TogglePhase::RolledBack;
            entry.status = entry.confirmed;
            true
        } else {
            entry.resync();
            false
        }
    }
}
