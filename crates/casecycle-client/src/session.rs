//! Session store: owns the bearer credential's lifecycle.

use crate::remote::RemoteService;
use casecycle_core::Result;
use casecycle_infrastructure::TokenStorage;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Holds the current session token and keeps it durable across restarts.
///
/// `SessionStore` is the only component that mutates the token; every other
/// component reads it through [`current`](Self::current) at the moment it
/// issues a request. At most one live token exists per store. There is no
/// retry logic: a failed [`establish`](Self::establish) must be retried
/// explicitly by the caller.
pub struct SessionStore {
    token: RwLock<Option<String>>,
    storage: TokenStorage,
    remote: Arc<dyn RemoteService>,
}

impl SessionStore {
    /// Creates a session store over the given remote and persistence backend.
    pub fn new(remote: Arc<dyn RemoteService>, storage: TokenStorage) -> Self {
        Self {
            token: RwLock::new(None),
            storage,
            remote,
        }
    }

    /// Restores any previously persisted token into memory.
    ///
    /// Called on startup. Makes no network call and cannot fail: a missing
    /// or corrupt persisted entry simply leaves the token absent.
    pub async fn restore(&self) {
        if let Some(token) = self.storage.load() {
            tracing::debug!("Restored persisted session token");
            *self.token.write().await = Some(token);
        }
    }

    /// Exchanges a username for a token and holds it.
    ///
    /// On success the token is persisted and becomes the live credential.
    /// On failure the store ends up with no token at all, in memory or on
    /// disk; callers must not assume a token exists after a failed call.
    ///
    /// # Errors
    ///
    /// Returns `Authentication` if the service rejects the exchange, or
    /// `Fetch` if it is unreachable.
    pub async fn establish(&self, username: &str) -> Result<()> {
        match self.remote.login(username).await {
            Ok(token) => {
                if let Err(e) = self.storage.save(&token) {
                    // Session stays usable for this run even if persistence
                    // is unavailable.
                    tracing::warn!("Failed to persist session token: {}", e);
                }
                *self.token.write().await = Some(token);
                tracing::info!("Session established for '{}'", username);
                Ok(())
            }
            Err(e) => {
                self.clear().await;
                Err(e)
            }
        }
    }

    /// Returns the held token, or `None` when no session is live.
    ///
    /// Requesters use this to decide whether to attach an `Authorization`
    /// header.
    pub async fn current(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// Removes the token from memory and from persisted storage. Idempotent.
    pub async fn clear(&self) {
        *self.token.write().await = None;
        if let Err(e) = self.storage.delete() {
            tracing::warn!("Failed to delete persisted session token: {}", e);
        }
    }
}
