use tracing::{debug, info};

use crate::domain::{
    AddContact, AddContactResponse, ApiKey, Data, DeleteContactsResponse, FetchContactsResponse,
    PhonebookId, StatusMessageResponse, UploadContacts, ValidationError,
};
use crate::transport::{HttpClient, contact};

use super::TermiiError;

/// Contacts of a phonebook.
#[derive(Debug, Clone, Copy)]
pub struct Contacts<'a> {
    http: &'a HttpClient,
    api_key: &'a ApiKey,
}

impl<'a> Contacts<'a> {
    pub(crate) fn new(http: &'a HttpClient, api_key: &'a ApiKey) -> Self {
        Self { http, api_key }
    }

    pub async fn fetch(&self, phonebook: &PhonebookId) -> Result<FetchContactsResponse, TermiiError> {
        debug!(phonebook_id = phonebook.as_str(), "fetching contacts");
        let response = self
            .http
            .execute(&contact::fetch_contacts(phonebook, self.api_key))
            .await?;
        let Data { data: page } = response.json::<Data<FetchContactsResponse>>()?;
        info!(
            phonebook_id = phonebook.as_str(),
            total_elements = page.total_elements,
            "fetched contacts"
        );
        Ok(page)
    }

    pub async fn add(&self, request: AddContact) -> Result<AddContactResponse, TermiiError> {
        debug!(phonebook_id = request.phonebook_id.as_str(), "adding contact");
        let response = self
            .http
            .execute(&contact::add_contact(&request, self.api_key))
            .await?;
        let added: AddContactResponse = response.json()?;
        info!(contact_id = %added.id, "contact added");
        Ok(added)
    }

    /// Upload a CSV of contacts into a phonebook.
    ///
    /// The file is read before anything is sent; an unreadable file is reported as
    /// [`ValidationError::UnreadableFile`].
    pub async fn upload(
        &self,
        request: UploadContacts,
    ) -> Result<StatusMessageResponse, TermiiError> {
        debug!(
            phonebook_id = request.phonebook_id().as_str(),
            file = %request.file().display(),
            "uploading contacts"
        );
        let csv = tokio::fs::read(request.file())
            .await
            .map_err(|err| ValidationError::UnreadableFile {
                path: request.file().display().to_string(),
                reason: err.to_string(),
            })?;
        let response = self
            .http
            .execute(&contact::upload_contacts(&request, csv, self.api_key))
            .await?;
        let uploaded: StatusMessageResponse = response.json()?;
        info!(message = %uploaded.message, "contacts uploaded");
        Ok(uploaded)
    }

    /// Delete every contact of a phonebook.
    pub async fn delete(
        &self,
        phonebook: &PhonebookId,
    ) -> Result<DeleteContactsResponse, TermiiError> {
        debug!(phonebook_id = phonebook.as_str(), "deleting contacts");
        let response = self
            .http
            .execute(&contact::delete_contacts(phonebook, self.api_key))
            .await?;
        let deleted: DeleteContactsResponse = response.json()?;
        info!(phonebook_id = phonebook.as_str(), "contacts deleted");
        Ok(deleted)
    }
}
