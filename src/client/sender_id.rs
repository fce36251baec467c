use tracing::{debug, info};

use crate::domain::{
    ApiKey, CodeMessageResponse, FetchSenderIds, FetchSenderIdsResponse, RequestSenderId,
};
use crate::transport::{HttpClient, sender_id};

use super::TermiiError;

/// Sender ID API: list registered sender ids and request new ones.
#[derive(Debug, Clone, Copy)]
pub struct SenderIds<'a> {
    http: &'a HttpClient,
    api_key: &'a ApiKey,
}

impl<'a> SenderIds<'a> {
    pub(crate) fn new(http: &'a HttpClient, api_key: &'a ApiKey) -> Self {
        Self { http, api_key }
    }

    /// One page of sender ids, optionally filtered by status.
    pub async fn fetch(
        &self,
        filter: FetchSenderIds,
    ) -> Result<FetchSenderIdsResponse, TermiiError> {
        debug!(page = ?filter.page, size = ?filter.size, "fetching sender ids");
        let response = self
            .http
            .execute(&sender_id::fetch_sender_ids(&filter, self.api_key))
            .await?;
        let page: FetchSenderIdsResponse = response.json()?;
        info!(
            total_elements = page.total_elements,
            page = page.number,
            "fetched sender ids"
        );
        Ok(page)
    }

    /// Ask Termii to register a new sender id.
    pub async fn request(
        &self,
        request: RequestSenderId,
    ) -> Result<CodeMessageResponse, TermiiError> {
        debug!(sender_id = request.sender_id().as_str(), "requesting sender id");
        let response = self
            .http
            .execute(&sender_id::request_sender_id(&request, self.api_key))
            .await?;
        let created: CodeMessageResponse = response.json()?;
        info!(message = %created.message, "sender id requested");
        Ok(created)
    }
}
