//! Client configuration.
//!
//! The only configurable value is the base URL of the remote service, read
//! from the `CASECYCLE_API_BASE_URL` environment variable.

use std::env;

/// Default service URL when no environment override is present.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable holding the service base URL.
pub const BASE_URL_ENV: &str = "CASECYCLE_API_BASE_URL";

/// Connection settings for the remote service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Creates a config for the given base URL.
    ///
    /// Trailing slashes are trimmed so endpoint paths can always be joined
    /// with a leading `/`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Loads configuration from the environment, falling back to
    /// [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Returns the normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins an endpoint path (starting with `/`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
