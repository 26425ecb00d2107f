pub mod error;
pub mod opportunity;
pub mod page;
pub mod user;
pub mod validation;

// Re-export common error type
pub use error::{CasecycleError, Result};

pub use opportunity::{NewOpportunity, OpportunityRecord};
pub use page::{LoadPhase, PageWindow, PAGE_SIZE};
pub use user::UserRecord;
pub use validation::{validate_opportunity, ValidationOutcome};
