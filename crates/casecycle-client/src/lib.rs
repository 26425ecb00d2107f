//! Client-side data synchronization layer for the CaseCycle service.
//!
//! Four components, composed leaves-first: [`SessionStore`] owns the bearer
//! credential, the validation gateway (in `casecycle-core`) shapes candidate
//! records, [`MutationSubmitter`] performs single creates and emits
//! invalidation signals, and [`OpportunityFetcher`] / [`UserDirectory`] keep
//! cached collection views in sync with page position and those signals.

pub mod config;
pub mod fetcher;
pub mod mutation;
pub mod remote;
pub mod session;
pub mod signal;

#[cfg(test)]
mod test_support;

pub use crate::config::ClientConfig;
pub use crate::fetcher::{DirectoryState, OpportunityFetcher, UserDirectory};
pub use crate::mutation::MutationSubmitter;
pub use crate::remote::{HttpRemote, RemoteService};
pub use crate::session::SessionStore;
pub use crate::signal::{Collection, InvalidationBus};
