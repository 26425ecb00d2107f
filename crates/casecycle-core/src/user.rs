//! User domain model.

use serde::{Deserialize, Serialize};

/// A registered user of the service.
///
/// The client's local user list is a cached read-only view, refreshed when
/// the users collection is invalidated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
}
