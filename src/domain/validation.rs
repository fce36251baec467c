use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    MissingEnv {
        name: &'static str,
    },
    InvalidPhoneNumber {
        input: String,
    },
    PhoneNumberLength {
        min: usize,
        max: usize,
        actual: usize,
    },
    InvalidRecipient {
        index: usize,
        source: Box<ValidationError>,
    },
    TooManyRecipients {
        max: usize,
        actual: usize,
    },
    SenderIdLength {
        min: usize,
        max: usize,
        actual: usize,
    },
    SenderIdNotAlphanumeric {
        input: String,
    },
    InvalidPathSegment {
        field: &'static str,
        input: String,
    },
    InvalidUrl {
        input: String,
        reason: String,
    },
    MediaRequiresWhatsApp,
    NotCsvFile {
        path: String,
    },
    UnreadableFile {
        path: String,
        reason: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::MissingEnv { name } => {
                write!(f, "{name} environment variable is required")
            }
            Self::InvalidPhoneNumber { input } => write!(
                f,
                "invalid phone number: {input} (expected digits in international format, e.g. 2347065250817)"
            ),
            Self::PhoneNumberLength { min, max, actual } => write!(
                f,
                "phone number must be between {min} and {max} digits, got {actual}"
            ),
            Self::InvalidRecipient { index, source } => {
                write!(f, "invalid phone number at index {index}: {source}")
            }
            Self::TooManyRecipients { max, actual } => {
                write!(f, "too many recipients: {actual} (max {max})")
            }
            Self::SenderIdLength { min, max, actual } => write!(
                f,
                "sender id must be between {min} and {max} characters, got {actual}"
            ),
            Self::SenderIdNotAlphanumeric { input } => {
                write!(f, "sender id must be alphanumeric: {input}")
            }
            Self::InvalidPathSegment { field, input } => {
                write!(f, "{field} must not contain '/', '?' or '#': {input}")
            }
            Self::InvalidUrl { input, reason } => write!(f, "invalid url {input}: {reason}"),
            Self::MediaRequiresWhatsApp => {
                write!(f, "media messages are only supported on the whatsapp channel")
            }
            Self::NotCsvFile { path } => write!(f, "contact upload must be a .csv file: {path}"),
            Self::UnreadableFile { path, reason } => {
                write!(f, "could not read {path}: {reason}")
            }
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidRecipient { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
