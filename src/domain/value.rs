use std::fmt;

use phonenumber::country;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};

use crate::domain::validation::ValidationError;

fn trimmed_non_empty(field: &'static str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

fn path_segment(field: &'static str, value: String) -> Result<String, ValidationError> {
    let value = trimmed_non_empty(field, value)?;
    if value.contains(['/', '?', '#']) {
        return Err(ValidationError::InvalidPathSegment {
            field,
            input: value,
        });
    }
    Ok(value)
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Termii API key, sent as `api_key` with every request.
///
/// Invariant: non-empty after trimming. `Debug` output is redacted.
pub struct ApiKey(String);

impl ApiKey {
    /// Field name used by Termii (`api_key`).
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(trimmed_non_empty(Self::FIELD, value.into())?))
    }

    /// Borrow the key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Phone number in international format without a leading `+` (e.g. `2347065250817`).
///
/// Invariant: 10 to 15 ASCII digits. Spaces, dashes and parentheses are stripped
/// on construction.
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Field name used in validation errors.
    pub const FIELD: &'static str = "phone_number";

    /// Minimum number of digits.
    pub const MIN_DIGITS: usize = 10;
    /// Maximum number of digits (E.164 limit).
    pub const MAX_DIGITS: usize = 15;

    /// Create a validated phone number from digits in international format.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let cleaned: String = value
            .chars()
            .filter(|&c| !(c.is_whitespace() || matches!(c, '-' | '(' | ')')))
            .collect();
        if cleaned.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !cleaned.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhoneNumber {
                input: value.trim().to_owned(),
            });
        }
        if !(Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&cleaned.len()) {
            return Err(ValidationError::PhoneNumberLength {
                min: Self::MIN_DIGITS,
                max: Self::MAX_DIGITS,
                actual: cleaned.len(),
            });
        }
        Ok(Self(cleaned))
    }

    /// Parse any human-formatted number (`+234 706 525 0817`, `07065250817`, ...) and
    /// normalize it to international digits.
    ///
    /// `default_region` is used when the input has no explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, raw).map_err(|_| {
            ValidationError::InvalidPhoneNumber {
                input: raw.to_owned(),
            }
        })?;
        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Self::new(e164.trim_start_matches('+'))
    }

    /// Validate a list of recipients, reporting the index of the first bad entry.
    pub fn many<I, S>(values: I) -> Result<Vec<Self>, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                Self::new(value).map_err(|err| ValidationError::InvalidRecipient {
                    index,
                    source: Box::new(err),
                })
            })
            .collect()
    }

    /// Borrow the normalized digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender ID shown to recipients (`from` / `sender_id`).
///
/// Invariant: 3 to 11 ASCII alphanumeric characters.
pub struct SenderId(String);

impl SenderId {
    /// Field name used in validation errors.
    pub const FIELD: &'static str = "sender_id";

    /// Minimum length.
    pub const MIN_LEN: usize = 3;
    /// Maximum length.
    pub const MAX_LEN: usize = 11;

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = trimmed_non_empty(Self::FIELD, value.into())?;
        let len = value.chars().count();
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&len) {
            return Err(ValidationError::SenderIdLength {
                min: Self::MIN_LEN,
                max: Self::MAX_LEN,
                actual: len,
            });
        }
        if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::SenderIdNotAlphanumeric { input: value });
        }
        Ok(Self(value))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message text (`sms` / `message`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Field name used by Termii (`sms`).
    pub const FIELD: &'static str = "sms";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Dialing code of the recipients' country (`country_code`, e.g. `234`).
///
/// Invariant: non-empty after trimming.
pub struct CountryCode(String);

impl CountryCode {
    /// Field name used by Termii (`country_code`).
    pub const FIELD: &'static str = "country_code";

    /// Create a validated [`CountryCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(trimmed_non_empty(Self::FIELD, value.into())?))
    }

    /// Borrow the validated code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Phonebook identifier.
///
/// Invariant: non-empty after trimming and usable as a URL path segment.
pub struct PhonebookId(String);

impl PhonebookId {
    /// Field name used by Termii (`phonebook_id`).
    pub const FIELD: &'static str = "phonebook_id";

    /// Create a validated [`PhonebookId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(path_segment(Self::FIELD, value.into())?))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Campaign identifier.
///
/// Invariant: non-empty after trimming and usable as a URL path segment.
pub struct CampaignId(String);

impl CampaignId {
    /// Field name used by Termii (`campaign_id`).
    pub const FIELD: &'static str = "campaign_id";

    /// Create a validated [`CampaignId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(path_segment(Self::FIELD, value.into())?))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// WhatsApp device id (`device_id`) used for template messages.
pub struct DeviceId(String);

impl DeviceId {
    /// Field name used by Termii (`device_id`).
    pub const FIELD: &'static str = "device_id";

    /// Create a validated (non-empty) [`DeviceId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(trimmed_non_empty(Self::FIELD, value.into())?))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Approved WhatsApp template id (`template_id`).
pub struct TemplateId(String);

impl TemplateId {
    /// Field name used by Termii (`template_id`).
    pub const FIELD: &'static str = "template_id";

    /// Create a validated (non-empty) [`TemplateId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(trimmed_non_empty(Self::FIELD, value.into())?))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Public URL of a media attachment.
///
/// Invariant: parses as an absolute URL.
pub struct MediaUrl(url::Url);

impl MediaUrl {
    /// Field name used by Termii (`url`).
    pub const FIELD: &'static str = "url";

    /// Create a validated [`MediaUrl`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = trimmed_non_empty(Self::FIELD, value.into())?;
        let parsed = url::Url::parse(&value).map_err(|err| ValidationError::InvalidUrl {
            input: value.clone(),
            reason: err.to_string(),
        })?;
        Ok(Self(parsed))
    }

    /// Borrow the URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Delivery route for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Generic,
    Dnd,
    WhatsApp,
}

impl Channel {
    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Dnd => "dnd",
            Self::WhatsApp => "whatsapp",
        }
    }
}

/// Message encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageType {
    #[default]
    Plain,
    Unicode,
}

impl MessageType {
    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Unicode => "unicode",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CampaignType {
    Personalized,
    #[default]
    Regular,
}

impl CampaignType {
    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Personalized => "personalized",
            Self::Regular => "regular",
        }
    }
}

/// Review status of a registered sender id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SenderIdStatus {
    Active,
    Pending,
    Blocked,
}

impl SenderIdStatus {
    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Blocked => "blocked",
        }
    }

    /// Map a wire value to a known status. Matching is case-insensitive.
    pub fn from_wire(value: &str) -> Option<Self> {
        Some(match value.to_ascii_lowercase().as_str() {
            "active" => Self::Active,
            "pending" => Self::Pending,
            "blocked" => Self::Blocked,
            _ => return None,
        })
    }
}

/// Account balance as returned by Termii, either a JSON string or a JSON number.
///
/// For numbers, the raw JSON token is preserved to avoid formatting drift
/// (`10.00` remains `"10.00"` instead of becoming `"10.0"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Balance(String);

impl Balance {
    /// Borrow the balance exactly as the API sent it.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Balance {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                Ok(Self(parsed))
            }
            Some(b'-' | b'0'..=b'9') => Ok(Self(token.to_owned())),
            _ => Err(D::Error::custom(
                "expected balance to be a JSON string or number",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let key = ApiKey::new("  key ").unwrap();
        assert_eq!(key.as_str(), "key");
        assert!(ApiKey::new("  ").is_err());
        assert_eq!(format!("{key:?}"), "ApiKey(***)");

        let msg = MessageText::new(" hi ").unwrap();
        assert_eq!(msg.as_str(), " hi ");
        assert!(MessageText::new("  ").is_err());

        let code = CountryCode::new(" 234 ").unwrap();
        assert_eq!(code.as_str(), "234");

        assert!(DeviceId::new("").is_err());
        assert_eq!(TemplateId::new(" tpl-1 ").unwrap().as_str(), "tpl-1");
    }

    #[test]
    fn phone_number_strips_separators() {
        let pn = PhoneNumber::new("234 (706) 525-0817").unwrap();
        assert_eq!(pn.as_str(), "2347065250817");

        let pasted = PhoneNumber::new("234\u{a0}706\n525\r\n0817\t").unwrap();
        assert_eq!(pasted.as_str(), "2347065250817");
    }

    #[test]
    fn phone_number_rejects_letters_and_bad_lengths() {
        assert!(matches!(
            PhoneNumber::new("+2347065250817"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
        assert!(matches!(
            PhoneNumber::new("12345"),
            Err(ValidationError::PhoneNumberLength { actual: 5, .. })
        ));
        assert!(matches!(
            PhoneNumber::new("1234567890123456"),
            Err(ValidationError::PhoneNumberLength { actual: 16, .. })
        ));
        assert!(matches!(
            PhoneNumber::new(" - "),
            Err(ValidationError::Empty { .. })
        ));
    }

    #[test]
    fn phone_number_parse_normalizes_through_e164() {
        let pn = PhoneNumber::parse(None, "+234 706 525 0817").unwrap();
        assert_eq!(pn.as_str(), "2347065250817");

        let local = PhoneNumber::parse(Some(country::Id::NG), "07065250817").unwrap();
        assert_eq!(local, pn);

        assert!(PhoneNumber::parse(None, "not-a-number").is_err());
    }

    #[test]
    fn phone_number_many_reports_failing_index() {
        let err = PhoneNumber::many(["2347065250817", "123"]).unwrap_err();
        match err {
            ValidationError::InvalidRecipient { index, source } => {
                assert_eq!(index, 1);
                assert!(matches!(*source, ValidationError::PhoneNumberLength { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let ok = PhoneNumber::many(vec!["2347065250817", "2348012345678"]).unwrap();
        assert_eq!(ok.len(), 2);
    }

    #[test]
    fn sender_id_enforces_length_and_charset() {
        assert_eq!(SenderId::new(" Brand ").unwrap().as_str(), "Brand");
        assert!(SenderId::new("Talert123").is_ok());
        assert!(matches!(
            SenderId::new("ab"),
            Err(ValidationError::SenderIdLength { actual: 2, .. })
        ));
        assert!(matches!(
            SenderId::new("ABCDEFGHIJKL"),
            Err(ValidationError::SenderIdLength { actual: 12, .. })
        ));
        assert!(matches!(
            SenderId::new("My Brand"),
            Err(ValidationError::SenderIdNotAlphanumeric { .. })
        ));
    }

    #[test]
    fn ids_must_be_path_segments() {
        assert_eq!(PhonebookId::new(" pb-1 ").unwrap().as_str(), "pb-1");
        assert!(matches!(
            PhonebookId::new("a/b"),
            Err(ValidationError::InvalidPathSegment {
                field: PhonebookId::FIELD,
                ..
            })
        ));
        assert!(CampaignId::new("c?x=1").is_err());
        assert!(CampaignId::new("   ").is_err());
    }

    #[test]
    fn media_url_must_be_absolute() {
        let url = MediaUrl::new("https://example.com/image.jpg").unwrap();
        assert_eq!(url.as_str(), "https://example.com/image.jpg");
        assert!(matches!(
            MediaUrl::new("image.jpg"),
            Err(ValidationError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn enums_map_to_wire_values() {
        assert_eq!(Channel::WhatsApp.as_str(), "whatsapp");
        assert_eq!(MessageType::Unicode.as_str(), "unicode");
        assert_eq!(CampaignType::Personalized.as_str(), "personalized");
        assert_eq!(
            SenderIdStatus::from_wire("Active"),
            Some(SenderIdStatus::Active)
        );
        assert_eq!(SenderIdStatus::from_wire("unknown"), None);
    }

    #[test]
    fn balance_preserves_raw_tokens() {
        let number: Balance = serde_json::from_str("10.00").unwrap();
        assert_eq!(number.as_str(), "10.00");

        let text: Balance = serde_json::from_str("\"9\"").unwrap();
        assert_eq!(text.as_str(), "9");

        assert!(serde_json::from_str::<Balance>("true").is_err());
    }
}
