//! Optimistic favorite / bookmark toggling against the API

use std::sync::Arc;

use shared::models::{SaveRequest, SaveStatus};
use tokio::sync::Mutex;

use super::state::{PendingToggle, SavedState};
use crate::{ClientError, ClientResult, RestoApi, Session};

/// How a toggle ended
#[derive(Debug)]
pub enum ToggleOutcome {
    /// Server accepted; `status` is what is now shown
    Confirmed { status: Option<SaveStatus> },
    /// Server or network failed; local state was reverted
    RolledBack { error: ClientError },
    /// A newer toggle of the same restaurant took over before this one resolved
    Superseded,
}

impl ToggleOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, ToggleOutcome::Confirmed { .. })
    }
}

/// Saved-status state for one signed-in session
///
/// The lock is only held for local bookkeeping, never across a request, so
/// toggles for different (or the same) restaurants may overlap.
pub struct SavedService<A> {
    api: Arc<A>,
    session: Session,
    state: Mutex<SavedState>,
}

impl<A: RestoApi> SavedService<A> {
    pub fn new(api: Arc<A>, session: Session) -> Self {
        Self {
            api,
            session,
            state: Mutex::new(SavedState::new()),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Fetch favorites and bookmarks and replace the local map.
    ///
    /// On failure the local map is left as it was.
    pub async fn load_initial_state(&self) -> ClientResult<()> {
        let user_id = self.session.require_user_id()?;

        let (favorites, bookmarks) =
            tokio::try_join!(self.api.favorites(user_id), self.api.bookmarks(user_id))?;
        let snapshot = SavedState::from_lists(&favorites, &bookmarks);

        self.state.lock().await.replace_with(snapshot);
        tracing::debug!(
            favorites = favorites.len(),
            bookmarks = bookmarks.len(),
            "Saved state loaded"
        );
        Ok(())
    }

    pub async fn toggle_favorite(&self, business_id: &str) -> ClientResult<ToggleOutcome> {
        self.toggle(business_id, SaveStatus::Favorite).await
    }

    pub async fn toggle_bookmark(&self, business_id: &str) -> ClientResult<ToggleOutcome> {
        self.toggle(business_id, SaveStatus::WantToVisit).await
    }

    /// Apply locally, send, then confirm or roll back.
    ///
    /// A guest session fails with [`ClientError::Unauthorized`] before any
    /// state changes. Request failures are reported as
    /// [`ToggleOutcome::RolledBack`], not as `Err`.
    async fn toggle(&self, business_id: &str, flag: SaveStatus) -> ClientResult<ToggleOutcome> {
        let user_id = self.session.require_user_id()?.to_string();

        let pending = self.state.lock().await.begin_toggle(business_id, flag);
        let request = SaveRequest {
            user_id,
            business_id: business_id.to_string(),
            status: pending.next,
        };

        let result = self.api.set_saved_status(&request).await;
        Ok(self.resolve(&pending, result.map(|_| ())).await)
    }

    async fn resolve(&self, pending: &PendingToggle, result: ClientResult<()>) -> ToggleOutcome {
        let mut state = self.state.lock().await;
        match result {
            Ok(()) => {
                if state.confirm(pending) {
                    ToggleOutcome::Confirmed {
                        status: pending.next,
                    }
                } else {
                    ToggleOutcome::Superseded
                }
            }
            Err(error) => {
                if state.roll_back(pending) {
                    tracing::warn!(
                        business_id = %pending.business_id,
                        error = %error,
                        "Saved status update failed, reverted"
                    );
                    ToggleOutcome::RolledBack { error }
                } else {
                    ToggleOutcome::Superseded
                }
            }
        }
    }

    pub async fn status(&self, business_id: &str) -> Option<SaveStatus> {
        self.state.lock().await.status(business_id)
    }

    pub async fn is_favorite(&self, business_id: &str) -> bool {
        self.state.lock().await.is_favorite(business_id)
    }

    pub async fn is_bookmarked(&self, business_id: &str) -> bool {
        self.state.lock().await.is_bookmarked(business_id)
    }

    /// Copy of the current local map
    pub async fn snapshot(&self) -> SavedState {
        self.state.lock().await.clone()
    }
}
