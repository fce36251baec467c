use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::TermiiError;

/// Response as received from the wire, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
/// Successful (non-error status) response of one attempt.
pub struct Response {
    payload: Value,
    status: u16,
    status_text: String,
    headers: BTreeMap<String, String>,
    body: String,
}

impl Response {
    pub(crate) fn from_raw(raw: RawResponse) -> Self {
        Self {
            payload: decode_payload(&raw.body),
            status: raw.status,
            status_text: raw.status_text,
            headers: raw.headers,
            body: raw.body,
        }
    }

    /// Decoded body: JSON when the body parses as JSON, a string otherwise,
    /// `null` for an empty body.
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Body text exactly as received.
    pub fn text(&self) -> &str {
        &self.body
    }

    pub(crate) fn is_error(&self) -> bool {
        self.status >= 400
    }

    /// Decode the body into a typed response.
    ///
    /// A body that does not match `T` is reported as [`TermiiError::Api`] with the
    /// received status and the decoded payload as details.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TermiiError> {
        serde_json::from_str(&self.body).map_err(|err| {
            TermiiError::api(
                self.status,
                format!("failed to decode response body: {err}"),
                Some(self.payload.clone()),
            )
        })
    }
}

fn decode_payload(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_owned()))
}
