use std::collections::BTreeMap;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use crate::domain::validation::ValidationError;
use crate::domain::value::{
    CampaignType, Channel, CountryCode, DeviceId, MediaUrl, MessageText, MessageType,
    PhoneNumber, PhonebookId, SenderId, SenderIdStatus, TemplateId,
};

pub const SEND_MESSAGE_MAX_RECIPIENTS: usize = 100;
pub const SEND_BULK_MAX_RECIPIENTS: usize = 10_000;

fn required(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value)
}

fn check_recipients(recipients: &[PhoneNumber], max: usize) -> Result<(), ValidationError> {
    if recipients.is_empty() {
        return Err(ValidationError::Empty {
            field: PhoneNumber::FIELD,
        });
    }
    if recipients.len() > max {
        return Err(ValidationError::TooManyRecipients {
            max,
            actual: recipients.len(),
        });
    }
    Ok(())
}

/// Recipients of a single send: one number (sent as a string) or up to
/// [`SEND_MESSAGE_MAX_RECIPIENTS`] numbers (sent as an array).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipients {
    One(PhoneNumber),
    Many(Vec<PhoneNumber>),
}

impl Recipients {
    pub fn one(phone: PhoneNumber) -> Self {
        Self::One(phone)
    }

    pub fn many(phones: Vec<PhoneNumber>) -> Result<Self, ValidationError> {
        check_recipients(&phones, SEND_MESSAGE_MAX_RECIPIENTS)?;
        Ok(Self::Many(phones))
    }

    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(phones) => phones.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<PhoneNumber> for Recipients {
    fn from(value: PhoneNumber) -> Self {
        Self::One(value)
    }
}

/// WhatsApp media attachment for [`SendMessage::media`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub url: MediaUrl,
    pub caption: Option<String>,
}

impl Media {
    pub fn new(url: MediaUrl) -> Self {
        Self { url, caption: None }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageContent {
    Text(MessageText),
    Media(Media),
}

#[derive(Debug, Clone)]
pub struct SendMessage {
    to: Recipients,
    from: SenderId,
    content: MessageContent,
    channel: Channel,
    message_type: MessageType,
}

impl SendMessage {
    /// Text message to one or more recipients.
    pub fn text(
        to: impl Into<Recipients>,
        from: SenderId,
        sms: MessageText,
        channel: Channel,
        message_type: MessageType,
    ) -> Self {
        Self {
            to: to.into(),
            from,
            content: MessageContent::Text(sms),
            channel,
            message_type,
        }
    }

    /// Media message. Only the WhatsApp channel accepts media.
    pub fn media(
        to: impl Into<Recipients>,
        from: SenderId,
        media: Media,
        channel: Channel,
        message_type: MessageType,
    ) -> Result<Self, ValidationError> {
        if channel != Channel::WhatsApp {
            return Err(ValidationError::MediaRequiresWhatsApp);
        }
        Ok(Self {
            to: to.into(),
            from,
            content: MessageContent::Media(media),
            channel,
            message_type,
        })
    }

    pub fn to(&self) -> &Recipients {
        &self.to
    }

    pub fn sender(&self) -> &SenderId {
        &self.from
    }

    pub fn content(&self) -> &MessageContent {
        &self.content
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn message_type(&self) -> MessageType {
        self.message_type
    }
}

#[derive(Debug, Clone)]
pub struct SendBulkMessage {
    to: Vec<PhoneNumber>,
    from: SenderId,
    sms: MessageText,
    channel: Channel,
    message_type: MessageType,
}

impl SendBulkMessage {
    pub fn new(
        to: Vec<PhoneNumber>,
        from: SenderId,
        sms: MessageText,
        channel: Channel,
        message_type: MessageType,
    ) -> Result<Self, ValidationError> {
        check_recipients(&to, SEND_BULK_MAX_RECIPIENTS)?;
        Ok(Self {
            to,
            from,
            sms,
            channel,
            message_type,
        })
    }

    pub fn to(&self) -> &[PhoneNumber] {
        &self.to
    }

    pub fn sender(&self) -> &SenderId {
        &self.from
    }

    pub fn sms(&self) -> &MessageText {
        &self.sms
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn message_type(&self) -> MessageType {
        self.message_type
    }
}

/// Message sent through the Number API (no sender id, Termii picks the route).
#[derive(Debug, Clone)]
pub struct SendNumberMessage {
    pub to: PhoneNumber,
    pub sms: MessageText,
    pub message_type: Option<MessageType>,
}

impl SendNumberMessage {
    pub fn new(to: PhoneNumber, sms: MessageText) -> Self {
        Self {
            to,
            sms,
            message_type: None,
        }
    }
}

/// Filters for listing sender ids. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct FetchSenderIds {
    pub page: Option<u32>,
    pub size: Option<NonZeroU32>,
    pub status: Option<SenderIdStatus>,
}

#[derive(Debug, Clone)]
pub struct RequestSenderId {
    sender_id: SenderId,
    use_case: String,
    company: String,
}

impl RequestSenderId {
    pub fn new(
        sender_id: SenderId,
        use_case: impl Into<String>,
        company: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            sender_id,
            use_case: required("usecase", use_case.into())?,
            company: required("company", company.into())?,
        })
    }

    pub fn sender_id(&self) -> &SenderId {
        &self.sender_id
    }

    pub fn use_case(&self) -> &str {
        &self.use_case
    }

    pub fn company(&self) -> &str {
        &self.company
    }
}

/// Placeholder value for a WhatsApp template.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateValue {
    Text(String),
    Number(serde_json::Number),
}

impl From<&str> for TemplateValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for TemplateValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for TemplateValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<i64> for TemplateValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for TemplateValue {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

/// Media for a template message; unlike [`Media`], the caption is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMedia {
    url: MediaUrl,
    caption: String,
}

impl TemplateMedia {
    pub fn new(url: MediaUrl, caption: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            url,
            caption: required("caption", caption.into())?,
        })
    }

    pub fn url(&self) -> &MediaUrl {
        &self.url
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }
}

#[derive(Debug, Clone)]
pub struct SendTemplate {
    pub phone_number: PhoneNumber,
    pub device_id: DeviceId,
    pub template_id: TemplateId,
    pub data: BTreeMap<String, TemplateValue>,
    pub media: Option<TemplateMedia>,
}

impl SendTemplate {
    pub fn new(phone_number: PhoneNumber, device_id: DeviceId, template_id: TemplateId) -> Self {
        Self {
            phone_number,
            device_id,
            template_id,
            data: BTreeMap::new(),
            media: None,
        }
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<TemplateValue>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn with_media(mut self, media: TemplateMedia) -> Self {
        self.media = Some(media);
        self
    }
}

#[derive(Debug, Clone)]
pub struct CreatePhonebook {
    name: String,
    description: Option<String>,
}

impl CreatePhonebook {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required("phonebook_name", name.into())?,
            description: None,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct UpdatePhonebook {
    name: String,
    description: String,
}

impl UpdatePhonebook {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required("phonebook_name", name.into())?,
            description: required("description", description.into())?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// When a campaign goes out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CampaignSchedule {
    #[default]
    Immediate,
    At(String),
}

impl CampaignSchedule {
    /// Schedule for a time in the format Termii expects (e.g. `30-06-2024 12:00`).
    pub fn at(time: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::At(required("schedule_time", time.into())?))
    }
}

#[derive(Debug, Clone)]
pub struct SendCampaign {
    pub country_code: CountryCode,
    pub sender_id: SenderId,
    pub message: MessageText,
    pub channel: Channel,
    pub message_type: MessageType,
    pub phonebook_id: PhonebookId,
    pub campaign_type: CampaignType,
    pub schedule: CampaignSchedule,
    pub enable_link_tracking: bool,
    pub delimiter: Option<String>,
    pub remove_duplicate: Option<bool>,
}

impl SendCampaign {
    /// Regular, immediate campaign without link tracking.
    pub fn new(
        country_code: CountryCode,
        sender_id: SenderId,
        message: MessageText,
        channel: Channel,
        phonebook_id: PhonebookId,
    ) -> Self {
        Self {
            country_code,
            sender_id,
            message,
            channel,
            message_type: MessageType::default(),
            phonebook_id,
            campaign_type: CampaignType::default(),
            schedule: CampaignSchedule::default(),
            enable_link_tracking: false,
            delimiter: None,
            remove_duplicate: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AddContact {
    pub phonebook_id: PhonebookId,
    pub phone_number: PhoneNumber,
    pub country_code: Option<CountryCode>,
    pub email_address: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
}

impl AddContact {
    pub fn new(phonebook_id: PhonebookId, phone_number: PhoneNumber) -> Self {
        Self {
            phonebook_id,
            phone_number,
            country_code: None,
            email_address: None,
            first_name: None,
            last_name: None,
            company: None,
        }
    }
}

/// CSV upload of contacts into a phonebook.
#[derive(Debug, Clone)]
pub struct UploadContacts {
    phonebook_id: PhonebookId,
    country_code: CountryCode,
    file: PathBuf,
}

impl UploadContacts {
    pub fn new(
        phonebook_id: PhonebookId,
        country_code: CountryCode,
        file: impl Into<PathBuf>,
    ) -> Result<Self, ValidationError> {
        let file = file.into();
        let is_csv = file
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if !is_csv {
            return Err(ValidationError::NotCsvFile {
                path: file.display().to_string(),
            });
        }
        Ok(Self {
            phonebook_id,
            country_code,
            file,
        })
    }

    pub fn phonebook_id(&self) -> &PhonebookId {
        &self.phonebook_id
    }

    pub fn country_code(&self) -> &CountryCode {
        &self.country_code
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}
