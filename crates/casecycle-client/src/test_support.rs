//! In-memory fake of the remote service for tests.

use crate::remote::RemoteService;
use async_trait::async_trait;
use casecycle_core::{CasecycleError, NewOpportunity, OpportunityRecord, Result, UserRecord};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// A complete, valid candidate opportunity as raw input.
pub(crate) fn sample_input() -> serde_json::Value {
    serde_json::json!({
        "title": "X",
        "market_description": "Y",
        "tam_estimate": 1000,
        "growth_rate": 5,
        "user_id": 1,
        "consumer_insight": "Z",
        "hypothesis": "W",
    })
}

pub(crate) fn opportunity(id: i64) -> OpportunityRecord {
    OpportunityRecord {
        id,
        title: format!("opp-{id}"),
        market_description: "market".to_string(),
        tam_estimate: 1000.0,
        growth_rate: 5.0,
        consumer_insight: "insight".to_string(),
        hypothesis: "hypothesis".to_string(),
        user_id: 1,
    }
}

/// Scriptable in-memory [`RemoteService`].
///
/// Holds full datasets and slices them per skip/limit like the service does.
/// Failure toggles flip every subsequent call of that kind into an error;
/// queued delays let a test force one in-flight read to resolve after a
/// later one.
pub(crate) struct MockRemote {
    opportunities: Mutex<Vec<OpportunityRecord>>,
    users: Mutex<Vec<UserRecord>>,
    next_id: AtomicI64,
    fail_login: AtomicBool,
    fail_reads: AtomicBool,
    fail_mutations: AtomicBool,
    list_delays: Mutex<VecDeque<Duration>>,
    seen_tokens: Mutex<Vec<Option<String>>>,
    list_opportunity_calls: AtomicUsize,
    create_opportunity_calls: AtomicUsize,
}

impl MockRemote {
    pub(crate) fn new() -> Self {
        Self {
            opportunities: Mutex::new(Vec::new()),
            users: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            fail_login: AtomicBool::new(false),
            fail_reads: AtomicBool::new(false),
            fail_mutations: AtomicBool::new(false),
            list_delays: Mutex::new(VecDeque::new()),
            seen_tokens: Mutex::new(Vec::new()),
            list_opportunity_calls: AtomicUsize::new(0),
            create_opportunity_calls: AtomicUsize::new(0),
        }
    }

    /// Fills the opportunity dataset with `count` records, ids starting at 1.
    pub(crate) fn seed_opportunities(&self, count: i64) {
        let mut dataset = self.opportunities.lock().unwrap();
        *dataset = (1..=count).map(opportunity).collect();
        self.next_id.store(count + 1, Ordering::SeqCst);
    }

    /// Appends one record to the dataset without going through a create call.
    pub(crate) fn push_opportunity(&self) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.opportunities.lock().unwrap().push(opportunity(id));
        id
    }

    pub(crate) fn fail_login(&self) {
        self.fail_login.store(true, Ordering::SeqCst);
    }

    pub(crate) fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    pub(crate) fn fail_mutations(&self) {
        self.fail_mutations.store(true, Ordering::SeqCst);
    }

    /// Queues a delay applied to the next opportunity-list call, in call
    /// order.
    pub(crate) fn delay_next_list(&self, delay: Duration) {
        self.list_delays.lock().unwrap().push_back(delay);
    }

    /// Token recorded for the most recent request, flattened.
    pub(crate) fn last_seen_token(&self) -> Option<String> {
        self.seen_tokens.lock().unwrap().last().cloned().flatten()
    }

    pub(crate) fn list_opportunity_calls(&self) -> usize {
        self.list_opportunity_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn create_opportunity_calls(&self) -> usize {
        self.create_opportunity_calls.load(Ordering::SeqCst)
    }

    fn record_token(&self, token: Option<&str>) {
        self.seen_tokens
            .lock()
            .unwrap()
            .push(token.map(str::to_string));
    }
}

#[async_trait]
impl RemoteService for MockRemote {
    async fn login(&self, username: &str) -> Result<String> {
        if self.fail_login.load(Ordering::SeqCst) {
            return Err(CasecycleError::authentication("Login failed (401)"));
        }
        Ok(format!("token-for-{username}"))
    }

    async fn list_opportunities(
        &self,
        token: Option<&str>,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<OpportunityRecord>> {
        self.record_token(token);
        self.list_opportunity_calls.fetch_add(1, Ordering::SeqCst);

        let delay = self.list_delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(CasecycleError::fetch(
                "Service returned 500 for /opportunities/",
            ));
        }

        let dataset = self.opportunities.lock().unwrap();
        Ok(dataset.iter().skip(skip).take(limit).cloned().collect())
    }

    async fn create_opportunity(
        &self,
        token: Option<&str>,
        record: &NewOpportunity,
    ) -> Result<OpportunityRecord> {
        self.record_token(token);
        self.create_opportunity_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(CasecycleError::mutation(422, "rejected by service"));
        }

        let created = OpportunityRecord {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: record.title.clone(),
            market_description: record.market_description.clone(),
            tam_estimate: record.tam_estimate,
            growth_rate: record.growth_rate,
            consumer_insight: record.consumer_insight.clone(),
            hypothesis: record.hypothesis.clone(),
            user_id: record.user_id,
        };
        self.opportunities.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn list_users(&self, token: Option<&str>) -> Result<Vec<UserRecord>> {
        self.record_token(token);

        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(CasecycleError::fetch("Service returned 500 for /users/"));
        }

        Ok(self.users.lock().unwrap().clone())
    }

    async fn create_user(&self, token: Option<&str>, name: &str) -> Result<UserRecord> {
        self.record_token(token);

        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(CasecycleError::mutation(422, "rejected by service"));
        }

        let created = UserRecord {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: name.to_string(),
        };
        self.users.lock().unwrap().push(created.clone());
        Ok(created)
    }
}
