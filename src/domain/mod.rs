//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    AddContact, CampaignSchedule, CreatePhonebook, FetchSenderIds, Media, MessageContent,
    Recipients, RequestSenderId, SEND_BULK_MAX_RECIPIENTS, SEND_MESSAGE_MAX_RECIPIENTS,
    SendBulkMessage, SendCampaign, SendMessage, SendNumberMessage, SendTemplate, TemplateMedia,
    TemplateValue, UpdatePhonebook, UploadContacts,
};
pub(crate) use response::Data;
pub use response::{
    AddContactResponse, CampaignHistory, CampaignRecord, CodeMessageResponse, ContactEntry,
    ContactKeyValue, DeleteContactsResponse, DeletedMessage, FetchCampaignsResponse,
    FetchContactsResponse, FetchPhonebooksResponse, FetchSenderIdsResponse, Page, Pageable,
    PhonebookEntry, SendBulkMessageResponse, SendCampaignResponse, SendMessageResponse,
    SendNumberMessageResponse, SendTemplateResponse, SenderIdEntry, SortInfo,
    StatusMessageResponse, UpdatePhonebookResponse,
};
pub use validation::ValidationError;
pub use value::{
    ApiKey, Balance, CampaignId, CampaignType, Channel, CountryCode, DeviceId, MediaUrl,
    MessageText, MessageType, PhoneNumber, PhonebookId, SenderId, SenderIdStatus, TemplateId,
};
