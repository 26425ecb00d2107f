//! Invalidation signals between mutation submitters and fetchers.

use tokio::sync::watch;

/// Server-side collections the client caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Opportunities,
    Users,
}

/// Broadcasts per-collection invalidation signals.
///
/// Each collection carries a strictly increasing generation counter (the
/// refresh signal). A successful mutation bumps the counter once; fetchers
/// subscribed to the collection reload whenever they observe a change. The
/// signal is a level, not a queue: a late subscriber only sees the latest
/// generation, which is all a wholesale reload needs.
pub struct InvalidationBus {
    opportunities: watch::Sender<u64>,
    users: watch::Sender<u64>,
}

impl InvalidationBus {
    pub fn new() -> Self {
        let (opportunities, _) = watch::channel(0);
        let (users, _) = watch::channel(0);
        Self {
            opportunities,
            users,
        }
    }

    fn channel(&self, collection: Collection) -> &watch::Sender<u64> {
        match collection {
            Collection::Opportunities => &self.opportunities,
            Collection::Users => &self.users,
        }
    }

    /// Signals that a collection's server-side state may have changed.
    pub fn notify(&self, collection: Collection) {
        let channel = self.channel(collection);
        channel.send_modify(|generation| *generation += 1);
        tracing::debug!(
            "Invalidated {:?} (generation {})",
            collection,
            *channel.borrow()
        );
    }

    /// Subscribes to a collection's invalidation signal.
    pub fn subscribe(&self, collection: Collection) -> watch::Receiver<u64> {
        self.channel(collection).subscribe()
    }

    /// Returns the current generation of a collection's signal.
    pub fn generation(&self, collection: Collection) -> u64 {
        *self.channel(collection).borrow()
    }
}

impl Default for InvalidationBus {
    fn default() -> Self {
        Self::new()
    }
}
