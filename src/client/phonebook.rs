use tracing::{debug, info};

use crate::domain::{
    ApiKey, CreatePhonebook, DeletedMessage, FetchPhonebooksResponse, PhonebookId,
    StatusMessageResponse, UpdatePhonebook, UpdatePhonebookResponse,
};
use crate::transport::{HttpClient, phonebook};

use super::TermiiError;

/// Phonebook API: `/api/phonebooks`.
#[derive(Debug, Clone, Copy)]
pub struct Phonebooks<'a> {
    http: &'a HttpClient,
    api_key: &'a ApiKey,
}

impl<'a> Phonebooks<'a> {
    pub(crate) fn new(http: &'a HttpClient, api_key: &'a ApiKey) -> Self {
        Self { http, api_key }
    }

    pub async fn fetch_all(&self) -> Result<FetchPhonebooksResponse, TermiiError> {
        debug!("fetching phonebooks");
        let response = self
            .http
            .execute(&phonebook::fetch_phonebooks(self.api_key))
            .await?;
        let page: FetchPhonebooksResponse = response.json()?;
        info!(total_elements = page.total_elements, "fetched phonebooks");
        Ok(page)
    }

    pub async fn create(
        &self,
        request: CreatePhonebook,
    ) -> Result<StatusMessageResponse, TermiiError> {
        debug!(name = request.name(), "creating phonebook");
        let response = self
            .http
            .execute(&phonebook::create_phonebook(&request, self.api_key))
            .await?;
        let created: StatusMessageResponse = response.json()?;
        info!(message = %created.message, "phonebook created");
        Ok(created)
    }

    pub async fn update(
        &self,
        id: &PhonebookId,
        request: UpdatePhonebook,
    ) -> Result<UpdatePhonebookResponse, TermiiError> {
        debug!(phonebook_id = id.as_str(), "updating phonebook");
        let response = self
            .http
            .execute(&phonebook::update_phonebook(id, &request, self.api_key))
            .await?;
        let updated: UpdatePhonebookResponse = response.json()?;
        info!(phonebook_id = %updated.id, "phonebook updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: &PhonebookId) -> Result<DeletedMessage, TermiiError> {
        debug!(phonebook_id = id.as_str(), "deleting phonebook");
        let response = self
            .http
            .execute(&phonebook::delete_phonebook(id, self.api_key))
            .await?;
        let deleted: DeletedMessage = response.json()?;
        info!(phonebook_id = id.as_str(), "phonebook deleted");
        Ok(deleted)
    }
}
