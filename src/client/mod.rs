//! Client layer: configuration, the error type and per-resource entry points.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use url::Url;

use crate::domain::{ApiKey, ValidationError};
use crate::transport::{
    DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT, HttpClient, HttpTransport, ReqwestTransport,
};

mod campaign;
mod contact;
mod error;
mod messaging;
mod phonebook;
mod sender_id;
mod template;

pub use campaign::Campaigns;
pub use contact::Contacts;
pub use error::{
    AUTHENTICATION_MESSAGE, ErrorCode, NETWORK_MESSAGE, RATE_LIMIT_MESSAGE, SERVER_ERROR_MESSAGE,
    TermiiError,
};
pub use messaging::{Messaging, Numbers};
pub use phonebook::Phonebooks;
pub use sender_id::SenderIds;
pub use template::Templates;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.ng.termii.com";

/// Environment variable holding the API key for [`TermiiClient::from_env`].
pub const API_KEY_ENV: &str = "TERMII_API_KEY";
/// Optional environment variable overriding the base URL for [`TermiiClient::from_env`].
pub const BASE_URL_ENV: &str = "TERMII_BASE_URL";

#[derive(Clone)]
/// Builder for [`TermiiClient`].
///
/// Use this when you need a different base URL, timeout, retry budget or
/// user-agent, or to plug in your own [`HttpTransport`].
pub struct TermiiClientBuilder {
    api_key: ApiKey,
    base_url: String,
    timeout: Duration,
    max_retries: u32,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl TermiiClientBuilder {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            user_agent: None,
            transport: None,
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Timeout of a single attempt. Retries get a fresh timeout each.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retries after the first attempt for network failures and 5xx responses.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Override the HTTP `User-Agent` header. Ignored with a custom transport.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<TermiiClient, TermiiError> {
        let base_url = parse_base_url(&self.base_url)?;
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(
                ReqwestTransport::with_user_agent(self.user_agent.as_deref())
                    .map_err(|err| TermiiError::network(Box::new(err)))?,
            ),
        };

        info!(
            base_url = %base_url,
            timeout_ms = self.timeout.as_millis() as u64,
            max_retries = self.max_retries,
            "termii client initialized"
        );

        Ok(TermiiClient {
            api_key: self.api_key,
            http: HttpClient::new(base_url, transport)
                .with_timeout(self.timeout)
                .with_max_retries(self.max_retries),
        })
    }
}

fn parse_base_url(input: &str) -> Result<Url, ValidationError> {
    let invalid = |reason: String| ValidationError::InvalidUrl {
        input: input.to_owned(),
        reason,
    };
    let url = Url::parse(input.trim()).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    Ok(url)
}

#[derive(Debug, Clone)]
/// Termii API client.
///
/// Holds the API key and the shared HTTP core. Resource handles such as
/// [`TermiiClient::messaging`] borrow both and add the key to every request.
///
/// ```rust,no_run
/// # async fn run() -> Result<(), termii::TermiiError> {
/// use termii::{ApiKey, TermiiClient};
///
/// let client = TermiiClient::new(ApiKey::new("your-api-key")?);
/// let page = client.phonebooks().fetch_all().await?;
/// println!("{} phonebooks", page.total_elements);
/// # Ok(())
/// # }
/// ```
pub struct TermiiClient {
    api_key: ApiKey,
    http: HttpClient,
}

impl TermiiClient {
    /// Client with the default base URL, timeout and retry budget.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            http: HttpClient::new(
                default_base_url(),
                Arc::new(ReqwestTransport::default()),
            ),
        }
    }

    pub fn builder(api_key: ApiKey) -> TermiiClientBuilder {
        TermiiClientBuilder::new(api_key)
    }

    /// Configure from `TERMII_API_KEY` and, if set, `TERMII_BASE_URL`.
    pub fn from_env() -> Result<Self, TermiiError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, TermiiError> {
        let api_key = lookup(API_KEY_ENV)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ValidationError::MissingEnv { name: API_KEY_ENV })?;
        let mut builder = Self::builder(ApiKey::new(api_key)?);
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|value| !value.trim().is_empty()) {
            builder = builder.base_url(base_url);
        }
        builder.build()
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// The HTTP core, for endpoints this crate does not wrap yet.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn messaging(&self) -> Messaging<'_> {
        Messaging::new(&self.http, &self.api_key)
    }

    pub fn sender_ids(&self) -> SenderIds<'_> {
        SenderIds::new(&self.http, &self.api_key)
    }

    pub fn numbers(&self) -> Numbers<'_> {
        Numbers::new(&self.http, &self.api_key)
    }

    pub fn templates(&self) -> Templates<'_> {
        Templates::new(&self.http, &self.api_key)
    }

    pub fn phonebooks(&self) -> Phonebooks<'_> {
        Phonebooks::new(&self.http, &self.api_key)
    }

    pub fn campaigns(&self) -> Campaigns<'_> {
        Campaigns::new(&self.http, &self.api_key)
    }

    pub fn contacts(&self) -> Contacts<'_> {
        Contacts::new(&self.http, &self.api_key)
    }
}

fn default_base_url() -> Url {
    match Url::parse(DEFAULT_BASE_URL) {
        Ok(url) => url,
        Err(err) => unreachable!("default base url is valid: {err}"),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use serde_json::Value;

    use crate::transport::fake::FakeTransport;
    use crate::transport::{Request, RequestBody};

    use super::*;

    pub(crate) fn client_with(fake: &FakeTransport) -> TermiiClient {
        TermiiClient::builder(ApiKey::new("test-key").unwrap())
            .transport(Arc::new(fake.clone()))
            .build()
            .unwrap()
    }

    pub(crate) fn json_body(request: &Request) -> &Value {
        match request.body() {
            Some(RequestBody::Json(value)) => value,
            other => panic!("expected JSON body, got {other:?}"),
        }
    }

    #[test]
    fn new_uses_defaults() {
        let client = TermiiClient::new(ApiKey::new("key").unwrap());
        assert_eq!(client.http().base_url().as_str(), "https://api.ng.termii.com/");
        assert_eq!(client.http().timeout(), Duration::from_secs(30));
        assert_eq!(client.http().max_retries(), 3);
        assert_eq!(client.api_key().as_str(), "key");
    }

    #[test]
    fn builder_overrides_are_applied() {
        let client = TermiiClient::builder(ApiKey::new("key").unwrap())
            .base_url("http://localhost:8080/termii")
            .timeout(Duration::from_secs(5))
            .max_retries(0)
            .user_agent("termii-tests")
            .build()
            .unwrap();
        assert_eq!(client.http().base_url().as_str(), "http://localhost:8080/termii");
        assert_eq!(client.http().timeout(), Duration::from_secs(5));
        assert_eq!(client.http().max_retries(), 0);
    }

    #[tokio::test]
    async fn prefixed_base_url_is_kept_for_resource_calls() {
        let fake = FakeTransport::always(200, r#"{"content": []}"#);
        let client = TermiiClient::builder(ApiKey::new("key").unwrap())
            .base_url("https://proxy.example.com/termii")
            .transport(Arc::new(fake.clone()))
            .build()
            .unwrap();

        client.phonebooks().fetch_all().await.unwrap();
        assert_eq!(
            fake.last_call().url.as_str(),
            "https://proxy.example.com/termii/api/phonebooks?api_key=key"
        );
    }

    #[test]
    fn builder_rejects_invalid_base_urls() {
        for base_url in ["not a url", "ftp://api.ng.termii.com", ""] {
            let err = TermiiClient::builder(ApiKey::new("key").unwrap())
                .base_url(base_url)
                .build()
                .unwrap_err();
            assert!(
                matches!(
                    err,
                    TermiiError::Validation(ValidationError::InvalidUrl { .. })
                ),
                "{base_url:?} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn from_env_requires_api_key() {
        let env = HashMap::<&str, &str>::new();
        let err = TermiiClient::from_lookup(|name| env.get(name).map(|v| v.to_string()))
            .unwrap_err();
        assert!(matches!(
            err,
            TermiiError::Validation(ValidationError::MissingEnv {
                name: API_KEY_ENV
            })
        ));

        let blank = HashMap::from([(API_KEY_ENV, "  ")]);
        assert!(TermiiClient::from_lookup(|name| blank.get(name).map(|v| v.to_string())).is_err());
    }

    #[test]
    fn from_env_reads_key_and_base_url() {
        let env = HashMap::from([
            (API_KEY_ENV, "env-key"),
            (BASE_URL_ENV, "https://api.termii.example"),
        ]);
        let client =
            TermiiClient::from_lookup(|name| env.get(name).map(|v| v.to_string())).unwrap();
        assert_eq!(client.api_key().as_str(), "env-key");
        assert_eq!(
            client.http().base_url().as_str(),
            "https://api.termii.example/"
        );
    }

    #[test]
    fn debug_output_redacts_the_api_key() {
        let client = TermiiClient::new(ApiKey::new("super-secret").unwrap());
        let debug = format!("{client:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("ApiKey(***)"));
    }

    #[tokio::test]
    async fn resources_share_the_configured_core() {
        let fake = FakeTransport::always(200, r#"{"content": []}"#);
        let client = client_with(&fake);
        let clone = client.clone();

        client.phonebooks().fetch_all().await.unwrap();
        clone.campaigns().fetch_all().await.unwrap();

        let calls = fake.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|call| call.timeout == DEFAULT_TIMEOUT));
        assert!(
            calls
                .iter()
                .all(|call| call.url.query() == Some("api_key=test-key"))
        );
    }
}
