//! Typed Rust client for the Termii messaging API.
//!
//! The crate is split the same way every call flows through it: a domain layer of
//! validated request types, a transport layer that owns the wire formats and the
//! shared HTTP core (retries with exponential backoff, mapping of failures to
//! [`TermiiError`]), and a small client layer exposing one handle per API area.
//!
//! ```rust,no_run
//! use termii::{
//!     ApiKey, Channel, MessageText, MessageType, PhoneNumber, SendMessage, SenderId, TermiiClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), termii::TermiiError> {
//!     let client = TermiiClient::new(ApiKey::new("...")?);
//!     let message = SendMessage::text(
//!         PhoneNumber::new("2347065250817")?,
//!         SenderId::new("Acme")?,
//!         MessageText::new("hello")?,
//!         Channel::Generic,
//!         MessageType::Plain,
//!     );
//!     let sent = client.messaging().send(message).await?;
//!     println!("sent {}", sent.message_id);
//!     Ok(())
//! }
//! ```
//!
//! Logging goes through [`tracing`]; install a subscriber to see request, retry and
//! error events. API keys never appear in log output.
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    Campaigns, Contacts, DEFAULT_BASE_URL, ErrorCode, Messaging, Numbers, Phonebooks, SenderIds,
    Templates, TermiiClient, TermiiClientBuilder, TermiiError,
};
pub use domain::{
    AddContact, ApiKey, CampaignId, CampaignSchedule, CampaignType, Channel, CountryCode,
    CreatePhonebook, DeviceId, FetchSenderIds, Media, MediaUrl, MessageText, MessageType,
    PhoneNumber, PhonebookId, Recipients, RequestSenderId, SendBulkMessage, SendCampaign,
    SendMessage, SendNumberMessage, SendTemplate, SenderId, SenderIdStatus, TemplateId,
    TemplateMedia, TemplateValue, UpdatePhonebook, UploadContacts, ValidationError,
};
pub use transport::{
    BoxFuture, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT, GENERIC_ERROR_MESSAGE, HttpClient,
    HttpTransport, Method, MultipartPart, RawResponse, Request, RequestBody, ReqwestTransport,
    Response, TransportError, backoff, extract_error_message,
};
