//! Mutation submitter: single create operations with invalidation signaling.

use crate::remote::RemoteService;
use crate::session::SessionStore;
use crate::signal::{Collection, InvalidationBus};
use casecycle_core::{
    validate_opportunity, CasecycleError, OpportunityRecord, Result, UserRecord,
    ValidationOutcome,
};
use std::sync::Arc;

/// Performs single create operations against the service.
///
/// Every successful create emits an invalidation signal scoped to the
/// affected collection so dependent fetchers reload; a rejected create emits
/// nothing and is never retried. The session token is attached when held and
/// simply omitted otherwise, since the service permits anonymous creation
/// for some resources.
pub struct MutationSubmitter {
    remote: Arc<dyn RemoteService>,
    session: Arc<SessionStore>,
    bus: Arc<InvalidationBus>,
}

impl MutationSubmitter {
    pub fn new(
        remote: Arc<dyn RemoteService>,
        session: Arc<SessionStore>,
        bus: Arc<InvalidationBus>,
    ) -> Self {
        Self {
            remote,
            session,
            bus,
        }
    }

    /// Validates raw text input and creates an opportunity from it.
    ///
    /// The candidate passes through the validation gateway first; an invalid
    /// candidate fails with `Validation` before any network traffic.
    ///
    /// # Errors
    ///
    /// `Validation` with the gateway's reasons, `Mutation` with the server's
    /// diagnostic body if the write is rejected, or `Fetch` if the service is
    /// unreachable.
    pub async fn submit_opportunity(&self, raw_json: &str) -> Result<OpportunityRecord> {
        let record = match validate_opportunity(raw_json) {
            ValidationOutcome::Valid(record) => record,
            ValidationOutcome::Invalid(reasons) => {
                return Err(CasecycleError::validation(reasons));
            }
        };

        let token = self.session.current().await;
        let created = self
            .remote
            .create_opportunity(token.as_deref(), &record)
            .await?;

        tracing::info!("Created opportunity {} ('{}')", created.id, created.title);
        self.bus.notify(Collection::Opportunities);
        Ok(created)
    }

    /// Registers a user record.
    ///
    /// Creation only: no session is established for the new name. Use
    /// [`register_user`](Self::register_user) when sign-in should follow.
    pub async fn create_user(&self, name: &str) -> Result<UserRecord> {
        let token = self.session.current().await;
        let created = self.remote.create_user(token.as_deref(), name).await?;

        tracing::info!("Created user {} ('{}')", created.id, created.name);
        self.bus.notify(Collection::Users);
        Ok(created)
    }

    /// Registers a user and then establishes a session for the new name.
    ///
    /// The two steps are deliberately separate operations composed here: the
    /// create succeeds (and invalidates the users collection) even if the
    /// follow-up sign-in fails.
    pub async fn register_user(&self, name: &str) -> Result<UserRecord> {
        let created = self.create_user(name).await?;
        self.session.establish(&created.name).await?;
        Ok(created)
    }
}
