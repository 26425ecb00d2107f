//! Durable persistence for the session token.
//!
//! The token survives client restarts as a single JSON file under the
//! platform config directory. This storage is deliberately dumb: it knows
//! nothing about how tokens are obtained or when they expire.

use crate::paths::CasecyclePaths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk shape of the persisted session.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    token: String,
    saved_at: String,
}

/// Manages persistence of the session token to the filesystem.
///
/// `TokenStorage` handles reading and writing the single durable entry the
/// session store owns. Loading is infallible by contract: a missing or
/// unreadable file simply means no persisted session.
pub struct TokenStorage {
    path: PathBuf,
}

impl TokenStorage {
    /// Creates a `TokenStorage` at the default location
    /// (`~/.config/casecycle/session.json`).
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn default_location() -> Result<Self> {
        let path = CasecyclePaths::session_file()
            .context("Failed to resolve session file path")?;
        Ok(Self { path })
    }

    /// Creates a `TokenStorage` with a custom path (for testing).
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Loads the persisted token, if any.
    ///
    /// Never fails: a missing file means no session, and a corrupt or
    /// unreadable file is logged and treated the same way.
    pub fn load(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read session file {:?}: {}", self.path, e);
                return None;
            }
        };

        match serde_json::from_str::<PersistedSession>(&content) {
            Ok(session) => Some(session.token),
            Err(e) => {
                tracing::warn!("Ignoring corrupt session file {:?}: {}", self.path, e);
                None
            }
        }
    }

    /// Persists a token, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// file cannot be written.
    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let session = PersistedSession {
            token: token.to_string(),
            saved_at: chrono::Utc::now().to_rfc3339(),
        };
        let json = serde_json::to_string_pretty(&session)
            .context("Failed to serialize session data")?;

        fs::write(&self.path, json)
            .context(format!("Failed to write session file: {:?}", self.path))?;

        tracing::debug!("Persisted session token to {:?}", self.path);
        Ok(())
    }

    /// Deletes the persisted entry. Idempotent: deleting an absent entry
    /// succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error only if an existing file cannot be removed.
    pub fn delete(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }

        fs::remove_file(&self.path)
            .context(format!("Failed to delete session file: {:?}", self.path))?;

        tracing::debug!("Deleted persisted session at {:?}", self.path);
        Ok(())
    }

    /// Returns the path to the session file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
