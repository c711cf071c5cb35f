//! Resilient HTTP plumbing.
//!
//! Every outbound call goes through [`send_with_retry`]: a bounded
//! retry loop with a fixed inter-attempt delay and no jitter. Only
//! failures classified transient by the [`RetryPolicy`] are retried;
//! anything else, or exhaustion of the budget, propagates the last
//! error to the caller.

use std::future::Future;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use tracing::warn;

use crate::config::Config;
use crate::error::ApiError;

/// Header that tells the ngrok tunnel fronting the backend to skip its
/// interstitial warning page. Infra workaround, not part of the protocol.
const TUNNEL_SKIP_HEADER: &str = "ngrok-skip-browser-warning";

/// Bounded-retry policy for transient backend failures.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempt budget, including the first attempt.
    pub max_attempts: u32,
    /// Fixed delay between attempts.
    pub delay: Duration,
    /// Whether 401 counts as transient. The backend's user record can
    /// lag right after account creation; retrying 401 papers over that
    /// race at the cost of also retrying real auth failures.
    pub retry_unauthorized: bool,
}

impl RetryPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_attempts: config.retry.max_attempts,
            delay: config.retry_delay(),
            retry_unauthorized: config.retry.retry_unauthorized,
        }
    }

    /// Classifies an error as transient (worth another attempt) or final.
    pub fn is_transient(&self, err: &ApiError) -> bool {
        match err {
            ApiError::NotFound(_) => true,
            ApiError::Unauthorized(_) => self.retry_unauthorized,
            _ => false,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(1),
            retry_unauthorized: true,
        }
    }
}

/// Runs `attempt_fn` under the retry policy.
///
/// Invariants: at most `max_attempts` attempts are made, non-transient
/// errors are observed exactly once, and the total added delay never
/// exceeds `(max_attempts - 1) * delay`.
pub async fn send_with_retry<T, F, Fut>(policy: &RetryPolicy, mut attempt_fn: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut attempt = 1u32;
    loop {
        match attempt_fn().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if attempt >= policy.max_attempts || !policy.is_transient(&err) {
                    return Err(err);
                }
                warn!(attempt, error = %err, "Transient failure, retrying");
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
        }
    }
}

/// Builds the shared reqwest client: request timeout from config and
/// the tunnel-skip header on every request.
pub fn build_client(config: &Config) -> Result<Client, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(TUNNEL_SKIP_HEADER, HeaderValue::from_static("true"));

    Client::builder()
        .timeout(config.request_timeout())
        .default_headers(headers)
        .build()
        .map_err(ApiError::from)
}
