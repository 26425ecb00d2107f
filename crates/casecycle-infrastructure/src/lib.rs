pub mod paths;
pub mod token_storage;

pub use crate::paths::CasecyclePaths;
pub use crate::token_storage::TokenStorage;
