//! Typed client for the backend REST API.
//!
//! One [`ApiClient`] instance is shared by every view. It owns the
//! reqwest client, the retry policy and the session store; endpoint
//! wrappers live in the submodules, one per resource.

mod auth;
mod locations;
mod notifications;
mod pets;
mod profile;
mod scan;

use persistence::SessionStore;
use reqwest::{Client, RequestBuilder, Response};
use tracing::{error, warn};

use crate::config::Config;
use crate::error::ApiError;
use crate::http::{self, RetryPolicy};

/// Client for the pet-tracking backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    retry: RetryPolicy,
    sessions: SessionStore,
}

impl ApiClient {
    pub fn new(config: &Config, sessions: SessionStore) -> Result<Self, ApiError> {
        Ok(Self {
            client: http::build_client(config)?,
            base_url: config.backend.base_url.trim_end_matches('/').to_string(),
            retry: RetryPolicy::from_config(config),
            sessions,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub(crate) fn retry(&self) -> &RetryPolicy {
        &self.retry
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(self.url(path))
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.client.put(self.url(path))
    }

    /// Attaches the session's bearer token, or fails with Unauthorized
    /// when no session is persisted.
    pub(crate) fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let session = self.sessions.load().ok_or_else(|| {
            ApiError::Unauthorized("Session not found. Please log in again.".to_string())
        })?;
        Ok(builder.bearer_auth(session.token))
    }

    /// Sends a request and maps non-success statuses onto [`ApiError`],
    /// surfacing the backend's error body when it has one.
    pub(crate) async fn check(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status.as_u16(), &body))
    }

    /// Applies the terminal Unauthorized policy: once a call has failed
    /// for good with a 401, the persisted session is cleared so every
    /// gate redirects to login. Transient 401s inside the retry loop do
    /// not reach this point.
    pub(crate) fn finalize<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(ApiError::Unauthorized(message)) = &result {
            warn!(message = %message, "Unauthorized response, clearing session");
            if let Err(err) = self.sessions.clear() {
                error!(error = %err, "Failed to clear session after 401");
            }
        }
        result
    }
}
