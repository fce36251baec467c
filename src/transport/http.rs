use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::multipart::{Form, Part};
use url::Url;

use super::request::{MultipartPart, Request, RequestBody};
use super::response::RawResponse;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Error type produced by transports when no response was received.
pub type TransportError = Box<dyn StdError + Send + Sync>;

const DEFAULT_HEADERS: [(&str, &str); 3] = [
    ("content-type", "application/json"),
    ("accept", "application/json"),
    ("accept-encoding", "gzip, deflate"),
];

/// A single HTTP exchange, without retries or status interpretation.
///
/// The default implementation is backed by `reqwest`. Implement this trait to
/// route requests elsewhere (a proxy, a recorder, a test stub) and pass it to
/// [`TermiiClientBuilder::transport`](crate::TermiiClientBuilder::transport).
///
/// Return `Err` only when no response was received. Any received status,
/// including 4xx and 5xx, must be returned as a [`RawResponse`].
pub trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        url: &'a Url,
        request: &'a Request,
        timeout: Duration,
    ) -> BoxFuture<'a, Result<RawResponse, TransportError>>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub(crate) fn with_user_agent(user_agent: Option<&str>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent);
        }
        Ok(Self::new(builder.build()?))
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        url: &'a Url,
        request: &'a Request,
        timeout: Duration,
    ) -> BoxFuture<'a, Result<RawResponse, TransportError>> {
        Box::pin(async move {
            let mut builder = self
                .client
                .request(request.method().into(), url.clone())
                .timeout(timeout);

            let multipart = matches!(request.body(), Some(RequestBody::Multipart(_)));
            for (name, value) in DEFAULT_HEADERS {
                // reqwest sets the multipart boundary itself.
                if multipart && name == CONTENT_TYPE.as_str() {
                    continue;
                }
                if !request.headers().contains_key(name) {
                    builder = builder.header(name, value);
                }
            }
            for (name, value) in request.headers() {
                builder = builder.header(name.as_str(), value.as_str());
            }

            builder = match request.body() {
                None => builder,
                Some(RequestBody::Json(value)) => builder.json(value),
                Some(RequestBody::Multipart(parts)) => builder.multipart(multipart_form(parts)?),
            };

            let response = builder.send().await?;
            let status = response.status();
            let headers = collect_headers(response.headers());
            let body = response.text().await?;

            Ok(RawResponse {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_owned(),
                headers,
                body,
            })
        })
    }
}

fn multipart_form(parts: &[MultipartPart]) -> Result<Form, reqwest::Error> {
    let mut form = Form::new();
    for part in parts {
        let mut field = Part::bytes(part.bytes().to_vec());
        if let Some(file_name) = part.file_name() {
            field = field.file_name(file_name.to_owned());
        }
        if let Some(mime) = part.mime() {
            field = field.mime_str(mime)?;
        }
        form = form.part(part.name().to_owned(), field);
    }
    Ok(form)
}

fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut collected = BTreeMap::<String, String>::new();
    for (name, value) in headers {
        let Ok(value) = value.to_str() else {
            continue;
        };
        collected
            .entry(name.as_str().to_owned())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_owned());
    }
    collected
}
