//! Opportunity domain models.
//!
//! An opportunity is a business-opportunity record owned by the remote
//! service; the client only ever holds read-only cached copies.

use serde::{Deserialize, Serialize};

/// A business-opportunity record as the service returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityRecord {
    pub id: i64,
    pub title: String,
    pub market_description: String,
    pub tam_estimate: f64,
    pub growth_rate: f64,
    pub consumer_insight: String,
    pub hypothesis: String,
    pub user_id: i64,
}

/// A candidate opportunity to be created, before the service assigns an id.
///
/// Produced only by the validation gateway; constructing one by hand skips
/// the schema checks and should be confined to tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOpportunity {
    pub title: String,
    pub market_description: String,
    pub tam_estimate: f64,
    pub growth_rate: f64,
    pub consumer_insight: String,
    pub hypothesis: String,
    pub user_id: i64,
}
