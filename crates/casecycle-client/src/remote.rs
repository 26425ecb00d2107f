//! Remote service access.
//!
//! [`RemoteService`] is the seam between the synchronization logic and the
//! network: session store, mutation submitter, and fetchers all talk to the
//! service through this trait, so tests can substitute an in-memory fake.
//! [`HttpRemote`] is the production implementation over the REST API.

use crate::config::ClientConfig;
use async_trait::async_trait;
use casecycle_core::{CasecycleError, NewOpportunity, OpportunityRecord, Result, UserRecord};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;

/// Placeholder password sent with every credential exchange; the service
/// ignores it.
const PLACEHOLDER_PASSWORD: &str = "unused";

/// Operations the remote service exposes to this client.
///
/// A `token` of `None` means the request is attempted anonymously; the
/// service permits anonymous creation for some resources, so absence of a
/// token must never prevent the attempt.
#[async_trait]
pub trait RemoteService: Send + Sync {
    /// Exchanges a username for a bearer token.
    async fn login(&self, username: &str) -> Result<String>;

    /// Lists one page of the opportunity collection.
    async fn list_opportunities(
        &self,
        token: Option<&str>,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<OpportunityRecord>>;

    /// Creates an opportunity and returns the service's representation.
    async fn create_opportunity(
        &self,
        token: Option<&str>,
        record: &NewOpportunity,
    ) -> Result<OpportunityRecord>;

    /// Lists all registered users.
    async fn list_users(&self, token: Option<&str>) -> Result<Vec<UserRecord>>;

    /// Registers a user and returns the service's representation.
    async fn create_user(&self, token: Option<&str>, name: &str) -> Result<UserRecord>;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Reqwest-backed implementation of [`RemoteService`].
pub struct HttpRemote {
    client: Client,
    config: ClientConfig,
}

impl HttpRemote {
    /// Creates a remote backed by the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Creates a remote configured from the environment.
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    fn with_bearer(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }
}

#[async_trait]
impl RemoteService for HttpRemote {
    async fn login(&self, username: &str) -> Result<String> {
        let url = self.config.endpoint("/token");
        let response = self
            .client
            .post(&url)
            .form(&[("username", username), ("password", PLACEHOLDER_PASSWORD)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CasecycleError::authentication(format!(
                "Login failed ({})",
                status
            )));
        }

        let body = response.json::<TokenResponse>().await?;
        Ok(body.access_token)
    }

    async fn list_opportunities(
        &self,
        token: Option<&str>,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<OpportunityRecord>> {
        let url = self.config.endpoint("/opportunities/");
        let request = self
            .client
            .get(&url)
            .query(&[("skip", skip), ("limit", limit)]);

        let response = Self::with_bearer(request, token).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CasecycleError::fetch(format!(
                "Service returned {} for /opportunities/",
                status
            )));
        }

        Ok(response.json::<Vec<OpportunityRecord>>().await?)
    }

    async fn create_opportunity(
        &self,
        token: Option<&str>,
        record: &NewOpportunity,
    ) -> Result<OpportunityRecord> {
        let url = self.config.endpoint("/opportunities/");
        let request = self.client.post(&url).json(record);

        let response = Self::with_bearer(request, token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CasecycleError::mutation(status.as_u16(), body));
        }

        Ok(response.json::<OpportunityRecord>().await?)
    }

    async fn list_users(&self, token: Option<&str>) -> Result<Vec<UserRecord>> {
        let url = self.config.endpoint("/users/");
        let response = Self::with_bearer(self.client.get(&url), token).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CasecycleError::fetch(format!(
                "Service returned {} for /users/",
                status
            )));
        }

        Ok(response.json::<Vec<UserRecord>>().await?)
    }

    async fn create_user(&self, token: Option<&str>, name: &str) -> Result<UserRecord> {
        let url = self.config.endpoint("/users/");
        let request = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "name": name }));

        let response = Self::with_bearer(request, token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CasecycleError::mutation(status.as_u16(), body));
        }

        Ok(response.json::<UserRecord>().await?)
    }
}
