use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, error, warn};
use url::Url;

use crate::client::TermiiError;
use crate::domain::ValidationError;

use super::classify::error_from_status;
use super::http::HttpTransport;
use super::request::{Method, Request};
use super::response::Response;

/// Per-attempt timeout used when neither the client nor the request sets one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Retries after the first attempt, so at most `1 + DEFAULT_MAX_RETRIES` attempts.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

const BASE_BACKOFF_MS: u64 = 1_000;
const MAX_BACKOFF: Duration = Duration::from_secs(10);

/// Delay before retry number `attempt + 1`: `min(1s * 2^attempt, 10s)`.
pub fn backoff(attempt: u32) -> Duration {
    2u64.checked_pow(attempt)
        .and_then(|factor| factor.checked_mul(BASE_BACKOFF_MS))
        .map_or(MAX_BACKOFF, |ms| Duration::from_millis(ms).min(MAX_BACKOFF))
}

fn retry_delay(err: &TermiiError, attempt: u32, max_retries: u32) -> Option<Duration> {
    (err.is_retryable() && attempt < max_retries).then(|| backoff(attempt))
}

#[derive(Clone)]
/// Shared HTTP core: base URL resolution, per-attempt timeout, retries with
/// exponential backoff and mapping of failures to [`TermiiError`].
///
/// Cloning is cheap; clones share the transport.
pub struct HttpClient {
    base_url: Url,
    timeout: Duration,
    max_retries: u32,
    transport: Arc<dyn HttpTransport>,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    pub fn new(base_url: Url, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            transport,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Send `request`, retrying network failures and 5xx responses.
    ///
    /// Returns the first response with a status below 400. Authentication (401, 403),
    /// rate limit (429) and other 4xx failures are returned without retrying. Once
    /// `max_retries` retries are used up, the error of the last attempt is returned.
    pub async fn execute(&self, request: &Request) -> Result<Response, TermiiError> {
        let url = self.url_for(request)?;
        let timeout = request.timeout_override().unwrap_or(self.timeout);

        let mut attempt = 0;
        loop {
            let err = match self.attempt(&url, request, timeout).await {
                Ok(response) => return Ok(response),
                Err(err) => err,
            };

            let Some(delay) = retry_delay(&err, attempt, self.max_retries) else {
                return Err(err);
            };
            warn!(
                method = %request.method(),
                path = request.path(),
                attempt = attempt + 1,
                max_retries = self.max_retries,
                delay_ms = delay.as_millis() as u64,
                error = %err,
                "retrying request"
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    pub async fn get(&self, path: impl Into<String>) -> Result<Response, TermiiError> {
        self.execute(&Request::new(Method::Get, path)).await
    }

    pub async fn post(
        &self,
        path: impl Into<String>,
        body: Value,
    ) -> Result<Response, TermiiError> {
        self.execute(&Request::new(Method::Post, path).json(body)).await
    }

    pub async fn put(&self, path: impl Into<String>, body: Value) -> Result<Response, TermiiError> {
        self.execute(&Request::new(Method::Put, path).json(body)).await
    }

    pub async fn patch(
        &self,
        path: impl Into<String>,
        body: Value,
    ) -> Result<Response, TermiiError> {
        self.execute(&Request::new(Method::Patch, path).json(body)).await
    }

    pub async fn delete(&self, path: impl Into<String>) -> Result<Response, TermiiError> {
        self.execute(&Request::new(Method::Delete, path)).await
    }

    async fn attempt(
        &self,
        url: &Url,
        request: &Request,
        timeout: Duration,
    ) -> Result<Response, TermiiError> {
        debug!(method = %request.method(), url = %url, "sending request");

        let sent = tokio::time::timeout(timeout, self.transport.send(url, request, timeout)).await;
        let raw = match sent {
            Ok(Ok(raw)) => raw,
            Ok(Err(source)) => {
                let err = TermiiError::network(source);
                error!(method = %request.method(), url = %url, error = %err, "request failed");
                return Err(err);
            }
            Err(elapsed) => {
                let err = TermiiError::network(Box::new(elapsed));
                error!(
                    method = %request.method(),
                    url = %url,
                    timeout_ms = timeout.as_millis() as u64,
                    "request timed out"
                );
                return Err(err);
            }
        };

        let response = Response::from_raw(raw);
        debug!(
            method = %request.method(),
            url = %url,
            status = response.status(),
            "received response"
        );

        if response.is_error() {
            let err = error_from_status(response.status(), response.payload());
            error!(
                status = response.status(),
                code = %err.code(),
                message = %err.message(),
                "API returned an error"
            );
            return Err(err);
        }
        Ok(response)
    }

    /// Append the request path to the base URL path, keeping any prefix such as
    /// `https://proxy.example.com/termii`.
    fn url_for(&self, request: &Request) -> Result<Url, ValidationError> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| ValidationError::InvalidUrl {
                input: self.base_url.to_string(),
                reason: "base url cannot carry a path".to_owned(),
            })?
            .pop_if_empty()
            .extend(request.path().split('/').filter(|segment| !segment.is_empty()));
        if !request.query_params().is_empty() {
            url.query_pairs_mut().extend_pairs(request.query_params());
        }
        Ok(url)
    }
}
