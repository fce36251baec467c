use serde_json::Value;

use crate::client::{SERVER_ERROR_MESSAGE, TermiiError};

/// Fallback when an error body carries no recognizable message.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing your request";

/// Best human-readable message for an error body.
///
/// Looks, in order, at: a plain string body, a string `message`, a string `error`,
/// an `errors` array of strings (joined with `", "`), any other `errors` value
/// (serialized as JSON). Falls back to [`GENERIC_ERROR_MESSAGE`].
pub fn extract_error_message(body: &Value) -> String {
    body_message(body).unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_owned())
}

fn body_message(body: &Value) -> Option<String> {
    if let Value::String(text) = body {
        return Some(text.clone());
    }
    let object = body.as_object()?;

    for key in ["message", "error"] {
        if let Some(Value::String(text)) = object.get(key)
            && !text.is_empty()
        {
            return Some(text.clone());
        }
    }

    match object.get("errors")? {
        Value::Null => None,
        Value::Array(items) if items.iter().all(Value::is_string) => Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        other => Some(other.to_string()),
    }
}

/// Map a non-successful status and its decoded body to the error kind.
pub(crate) fn error_from_status(status: u16, body: &Value) -> TermiiError {
    let details = match body {
        Value::Null => None,
        other => Some(other.clone()),
    };

    match status {
        401 | 403 => TermiiError::authentication(body_message(body), details),
        429 => TermiiError::rate_limit(body_message(body), details),
        500 | 502 | 503 | 504 => TermiiError::api(status, SERVER_ERROR_MESSAGE, details),
        _ => TermiiError::api(status, extract_error_message(body), details),
    }
}
