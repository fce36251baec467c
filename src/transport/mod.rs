//! Transport layer: the shared HTTP core (retries, error mapping) and wire formats.

pub(crate) mod campaign;
mod classify;
pub(crate) mod contact;
#[cfg(test)]
pub(crate) mod fake;
mod http;
pub(crate) mod messaging;
pub(crate) mod phonebook;
mod request;
mod response;
mod retry;
pub(crate) mod sender_id;
pub(crate) mod template;

pub use classify::{GENERIC_ERROR_MESSAGE, extract_error_message};
pub use http::{BoxFuture, HttpTransport, ReqwestTransport, TransportError};
pub use request::{Method, MultipartPart, Request, RequestBody};
pub use response::{RawResponse, Response};
pub use retry::{DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT, HttpClient, backoff};
