//! Signed-in user context
//!
//! A [`Session`] is built once (e.g. after login, or from [`SessionStorage`])
//! and handed to every component that needs the user identity.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{ClientError, ClientResult};

/// Identity of a signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedInUser {
    pub user_id: String,
    pub username: String,
}

/// Current user context; guests have no identity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<SignedInUser>,
}

impl Session {
    pub fn guest() -> Self {
        Self { user: None }
    }

    pub fn signed_in(user_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            user: Some(SignedInUser {
                user_id: user_id.into(),
                username: username.into(),
            }),
        }
    }

    pub fn user(&self) -> Option<&SignedInUser> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// User id, or [`ClientError::Unauthorized`] for a guest.
    pub fn require_user_id(&self) -> ClientResult<&str> {
        self.user
            .as_ref()
            .map(|u| u.user_id.as_str())
            .ok_or(ClientError::Unauthorized)
    }
}

impl From<SignedInUser> for Session {
    fn from(user: SignedInUser) -> Self {
        Self { user: Some(user) }
    }
}

/// JSON file holding the signed-in user between runs
#[derive(Debug, Clone)]
pub struct SessionStorage {
    path: PathBuf,
}

impl SessionStorage {
    pub fn new(base_path: impl Into<PathBuf>, filename: &str) -> Self {
        Self {
            path: base_path.into().join(filename),
        }
    }

    pub fn save(&self, session: &Session) -> ClientResult<()> {
        let Some(user) = session.user() else {
            return self.delete();
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(user)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Stored session; a missing or unreadable file yields a guest.
    pub fn load(&self) -> Session {
        let Ok(json) = fs::read_to_string(&self.path) else {
            return Session::guest();
        };
        match serde_json::from_str::<SignedInUser>(&json) {
            Ok(user) => user.into(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Ignoring corrupt session file: {e}");
                Session::guest()
            }
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn delete(&self) -> ClientResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
