//! File-backed session store.
//!
//! The session (identity plus bearer token) is persisted as JSON so it
//! survives restarts. Every view gate reads it through [`SessionStore::load`];
//! the only writers are login, registration and logout. An HTTP 401 anywhere
//! downstream clears the store and forces re-authentication.

use std::fs;
use std::path::{Path, PathBuf};

use domain::models::Session;
use thiserror::Error;
use tracing::warn;

/// File name used under the platform data directory.
const SESSION_FILE: &str = "session.json";

/// Errors that can occur while persisting the session.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Could not determine a data directory for the session file")]
    NoDataDir,

    #[error("Failed to access session file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode session: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Stores at most one session in a JSON file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store at the default platform location
    /// (`<data_dir>/pettrack/session.json`).
    pub fn new() -> Result<Self, SessionStoreError> {
        let dir = dirs::data_dir()
            .ok_or(SessionStoreError::NoDataDir)?
            .join("pettrack");
        Ok(Self::at_path(dir.join(SESSION_FILE)))
    }

    /// Creates a store backed by an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the persisted session, or `None` when absent.
    ///
    /// A corrupt or unreadable file is treated as absent (logged, not
    /// fatal) so a damaged session never wedges the login gate.
    pub fn load(&self) -> Option<Session> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Failed to read session file");
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(session) => Some(session),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Discarding corrupt session file");
                None
            }
        }
    }

    /// Persists the session, replacing any existing one.
    ///
    /// Writes to a temporary file and renames it over the target so a
    /// crash mid-write never leaves a truncated session on disk.
    pub fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(session)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Removes the persisted session. Clearing an absent session is a no-op.
    pub fn clear(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
