use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use serde_json::Value;

use crate::domain::ValidationError;

/// Message used when a 401/403 body carries no message of its own.
pub const AUTHENTICATION_MESSAGE: &str = "Authentication failed. Please check your API key.";
/// Message used when a 429 body carries no message of its own.
pub const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded. Please try again later.";
/// Message used when a transport failure has no description.
pub const NETWORK_MESSAGE: &str = "Network request failed. Please check your connection.";
/// Fixed message for 500/502/503/504. The upstream body is only kept in `details`.
pub const SERVER_ERROR_MESSAGE: &str = "Server error occurred. Please try again later.";

/// Machine-readable error tag, stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Authentication,
    Validation,
    RateLimit,
    Network,
    Api,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Authentication => "AUTHENTICATION_ERROR",
            Self::Validation => "VALIDATION_ERROR",
            Self::RateLimit => "RATE_LIMIT_ERROR",
            Self::Network => "NETWORK_ERROR",
            Self::Api => "API_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TermiiClient`](crate::TermiiClient) and the HTTP core.
///
/// Every failed call yields exactly one of these. Discriminate by variant or by
/// [`TermiiError::code`]. Variants can only be constructed by this crate.
pub enum TermiiError {
    /// The API rejected the credentials (HTTP 401 or 403).
    #[error("authentication error: {message}")]
    #[non_exhaustive]
    Authentication {
        message: String,
        details: Option<Value>,
    },

    /// Input was rejected before any request was sent.
    #[error("validation error: {0}")]
    #[non_exhaustive]
    Validation(#[from] ValidationError),

    /// Too many requests (HTTP 429).
    #[error("rate limit error: {message}")]
    #[non_exhaustive]
    RateLimit {
        message: String,
        details: Option<Value>,
    },

    /// No response was received (DNS, TLS, refused connection, timeout).
    #[error("network error: {message}")]
    #[non_exhaustive]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// Any other non-successful HTTP status.
    #[error("API error ({status}): {message}")]
    #[non_exhaustive]
    Api {
        status: u16,
        message: String,
        details: Option<Value>,
    },
}

impl TermiiError {
    pub(crate) fn authentication(message: Option<String>, details: Option<Value>) -> Self {
        Self::Authentication {
            message: message.unwrap_or_else(|| AUTHENTICATION_MESSAGE.to_owned()),
            details,
        }
    }

    pub(crate) fn rate_limit(message: Option<String>, details: Option<Value>) -> Self {
        Self::RateLimit {
            message: message.unwrap_or_else(|| RATE_LIMIT_MESSAGE.to_owned()),
            details,
        }
    }

    pub(crate) fn network(source: Box<dyn StdError + Send + Sync>) -> Self {
        let description = source.to_string();
        let message = if description.trim().is_empty() {
            NETWORK_MESSAGE.to_owned()
        } else {
            description
        };
        Self::Network {
            message,
            source: Some(source),
        }
    }

    pub(crate) fn api(status: u16, message: impl Into<String>, details: Option<Value>) -> Self {
        Self::Api {
            status,
            message: message.into(),
            details,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Authentication { .. } => ErrorCode::Authentication,
            Self::Validation(_) => ErrorCode::Validation,
            Self::RateLimit { .. } => ErrorCode::RateLimit,
            Self::Network { .. } => ErrorCode::Network,
            Self::Api { .. } => ErrorCode::Api,
        }
    }

    /// Status code associated with the kind. Authentication errors report 401
    /// for both 401 and 403 responses.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Authentication { .. } => Some(401),
            Self::Validation(_) => Some(400),
            Self::RateLimit { .. } => Some(429),
            Self::Network { .. } => None,
            Self::Api { status, .. } => Some(*status),
        }
    }

    /// Human-readable message without the kind prefix used by `Display`.
    pub fn message(&self) -> Cow<'_, str> {
        match self {
            Self::Authentication { message, .. }
            | Self::RateLimit { message, .. }
            | Self::Network { message, .. }
            | Self::Api { message, .. } => Cow::Borrowed(message),
            Self::Validation(err) => Cow::Owned(err.to_string()),
        }
    }

    /// Raw decoded error body returned by the API, when there was one.
    pub fn details(&self) -> Option<&Value> {
        match self {
            Self::Authentication { details, .. }
            | Self::RateLimit { details, .. }
            | Self::Api { details, .. } => details.as_ref(),
            Self::Validation(_) | Self::Network { .. } => None,
        }
    }

    /// Network failures and 5xx responses are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } => true,
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
