use serde::Deserialize;

use crate::domain::value::{Balance, SenderIdStatus};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SendMessageResponse {
    pub message_id: String,
    pub message: String,
    pub balance: Balance,
    pub user: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Response of the bulk, Number API and similar send endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SendBulkMessageResponse {
    pub code: String,
    pub message_id: String,
    pub message: String,
    pub balance: Balance,
    pub user: String,
}

pub type SendNumberMessageResponse = SendBulkMessageResponse;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SendTemplateResponse {
    pub code: String,
    pub balance: Balance,
    pub message_id: String,
    pub message: String,
    pub user: String,
    #[serde(default)]
    pub message_id_str: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct SortInfo {
    #[serde(default)]
    pub empty: bool,
    #[serde(default)]
    pub sorted: bool,
    #[serde(default)]
    pub unsorted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pageable {
    #[serde(default)]
    pub sort: SortInfo,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub page_number: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub paged: bool,
    #[serde(default)]
    pub unpaged: bool,
}

/// Spring-style page returned by every Termii list endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub pageable: Option<Pageable>,
    #[serde(default)]
    pub sort: Option<SortInfo>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub last: bool,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub number_of_elements: u32,
    #[serde(default)]
    pub empty: bool,
}

/// `{ "data": ... }` wrapper used by a few endpoints.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Data<T> {
    pub(crate) data: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SenderIdEntry {
    pub sender_id: String,
    pub status: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub usecase: Option<String>,
}

impl SenderIdEntry {
    /// Known status, if Termii returned one this crate recognizes.
    pub fn status_kind(&self) -> Option<SenderIdStatus> {
        SenderIdStatus::from_wire(&self.status)
    }
}

pub type FetchSenderIdsResponse = Page<SenderIdEntry>;

/// Generic `{code, message}` acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CodeMessageResponse {
    pub code: String,
    pub message: String,
}

/// Generic `{message, status}` acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusMessageResponse {
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhonebookEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub total_number_of_contacts: u64,
    #[serde(default)]
    pub date_created: Option<String>,
}

pub type FetchPhonebooksResponse = Page<PhonebookEntry>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePhonebookResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub number_of_contacts: u64,
    #[serde(default)]
    pub temp: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendCampaignResponse {
    pub message: String,
    pub campaign_id: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CampaignRecord {
    pub campaign_id: String,
    pub status: String,
    #[serde(default)]
    pub run_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub phone_book: Option<String>,
    #[serde(default)]
    pub camp_type: Option<String>,
    #[serde(default)]
    pub total_recipients: u64,
}

pub type FetchCampaignsResponse = Page<CampaignRecord>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignHistory {
    pub id: String,
    pub campaign_id: String,
    pub status: String,
    #[serde(default)]
    pub application_id: Option<i64>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub phonebook_id: Option<String>,
    #[serde(default)]
    pub phonebook_name: Option<String>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub sms_type: Option<String>,
    #[serde(default)]
    pub campaign_type: Option<String>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub total_recipient: u64,
    #[serde(default)]
    pub total_delivered: u64,
    #[serde(default)]
    pub total_failed: u64,
    #[serde(default)]
    pub sent: u64,
    #[serde(default)]
    pub run_at: Option<String>,
    #[serde(default)]
    pub is_link_tracking_enabled: bool,
    #[serde(default)]
    pub rerun: bool,
    #[serde(default)]
    pub send_by: Option<String>,
    #[serde(default)]
    pub personalized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactKeyValue {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactEntry {
    pub id: String,
    pub phone_number: String,
    #[serde(default)]
    pub pid: Option<String>,
    #[serde(default)]
    pub contact_list_key_value: Vec<ContactKeyValue>,
}

pub type FetchContactsResponse = Page<ContactEntry>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddContactResponse {
    pub id: String,
    pub phone_number: String,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeletedMessage {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeleteContactsResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub data: Option<DeletedMessage>,
}
