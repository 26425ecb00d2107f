//! Collection fetchers: paginated opportunity window and user directory.

use crate::remote::RemoteService;
use crate::session::SessionStore;
use casecycle_core::{LoadPhase, PageWindow, UserRecord, PAGE_SIZE};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{watch, RwLock};

/// Maintains the currently displayed window of the opportunity collection.
///
/// The window is recreated wholesale on each completed fetch; a failed fetch
/// keeps the last successful items and only sets the error message. Every
/// fetch is stamped with an issue sequence, and a response is dropped unless
/// its stamp is still the latest issued, so a slow stale response can never
/// overwrite the result of a newer one.
pub struct OpportunityFetcher {
    remote: Arc<dyn RemoteService>,
    session: Arc<SessionStore>,
    window: RwLock<PageWindow>,
    issued: AtomicU64,
}

impl OpportunityFetcher {
    pub fn new(remote: Arc<dyn RemoteService>, session: Arc<SessionStore>) -> Self {
        Self {
            remote,
            session,
            window: RwLock::new(PageWindow::new()),
            issued: AtomicU64::new(0),
        }
    }

    /// Returns a snapshot of the current page window.
    pub async fn window(&self) -> PageWindow {
        self.window.read().await.clone()
    }

    /// Performs the initial load for page 0.
    pub async fn mount(&self) {
        self.load_current().await;
    }

    /// Moves to the given page, clamping negatives to page 0.
    ///
    /// Reloads only when the clamped page differs from the current one.
    pub async fn set_page(&self, requested: i64) {
        let page = requested.max(0) as usize;
        let changed = {
            let mut window = self.window.write().await;
            if window.page_index == page {
                false
            } else {
                window.page_index = page;
                true
            }
        };

        if changed {
            self.load_current().await;
        }
    }

    /// Advances one page.
    ///
    /// Permitted unconditionally; views should consult
    /// [`PageWindow::is_last_page`] to disable the affordance when the
    /// current page came back short.
    pub async fn next_page(&self) {
        let current = self.window.read().await.page_index;
        self.set_page(current as i64 + 1).await;
    }

    /// Moves back one page. No-op at page 0.
    pub async fn previous_page(&self) {
        let current = self.window.read().await.page_index;
        if current > 0 {
            self.set_page(current as i64 - 1).await;
        }
    }

    /// Re-fetches the current page without changing the page position.
    pub async fn reload(&self) {
        self.load_current().await;
    }

    /// Reloads the current page each time the opportunities collection is
    /// invalidated. Runs until the signal's sender is dropped.
    pub async fn watch_invalidations(&self, mut signal: watch::Receiver<u64>) {
        while signal.changed().await.is_ok() {
            tracing::debug!("Opportunities invalidated, reloading current page");
            self.reload().await;
        }
    }

    async fn load_current(&self) {
        let sequence = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        let offset = {
            let mut window = self.window.write().await;
            window.phase = LoadPhase::Loading;
            window.offset()
        };

        let token = self.session.current().await;
        let result = self
            .remote
            .list_opportunities(token.as_deref(), offset, PAGE_SIZE)
            .await;

        let mut window = self.window.write().await;
        // Last *issued* wins: a response that was overtaken while in flight
        // is dropped, whatever order the responses arrived in.
        if sequence != self.issued.load(Ordering::SeqCst) {
            tracing::debug!("Dropping stale fetch response (sequence {})", sequence);
            return;
        }

        match result {
            Ok(items) => {
                window.items = items;
                window.error_message = None;
                window.phase = LoadPhase::Loaded;
            }
            Err(e) => {
                tracing::warn!("Opportunity page fetch failed: {}", e);
                // Stale-but-valid items stay on display.
                window.error_message = Some("Failed to load opportunities".to_string());
                window.phase = LoadPhase::Failed;
            }
        }
    }
}

/// Cached read-only view of the user list.
#[derive(Debug, Clone, Default)]
pub struct DirectoryState {
    pub users: Vec<UserRecord>,
    pub error_message: Option<String>,
}

/// Keeps a local copy of the registered users, refreshed wholesale whenever
/// the users collection's refresh signal ticks.
pub struct UserDirectory {
    remote: Arc<dyn RemoteService>,
    session: Arc<SessionStore>,
    state: RwLock<DirectoryState>,
}

impl UserDirectory {
    pub fn new(remote: Arc<dyn RemoteService>, session: Arc<SessionStore>) -> Self {
        Self {
            remote,
            session,
            state: RwLock::new(DirectoryState::default()),
        }
    }

    /// Returns a snapshot of the cached user list.
    pub async fn state(&self) -> DirectoryState {
        self.state.read().await.clone()
    }

    /// Re-fetches the full user list.
    pub async fn refresh(&self) {
        let token = self.session.current().await;
        let result = self.remote.list_users(token.as_deref()).await;

        let mut state = self.state.write().await;
        match result {
            Ok(users) => {
                state.users = users;
                state.error_message = None;
            }
            Err(e) => {
                tracing::warn!("User list fetch failed: {}", e);
                state.error_message = Some("Failed to load users".to_string());
            }
        }
    }

    /// Refreshes the list each time the users collection is invalidated.
    /// Runs until the signal's sender is dropped.
    pub async fn watch_invalidations(&self, mut signal: watch::Receiver<u64>) {
        while signal.changed().await.is_ok() {
            tracing::debug!("Users invalidated, refreshing directory");
            self.refresh().await;
        }
    }
}
