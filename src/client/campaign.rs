use tracing::{debug, info};

use crate::domain::{
    ApiKey, CampaignHistory, CampaignId, FetchCampaignsResponse, SendCampaign,
    SendCampaignResponse, StatusMessageResponse,
};
use crate::transport::{HttpClient, campaign};

use super::TermiiError;

/// Campaign API: send to a phonebook, list, inspect and retry campaigns.
#[derive(Debug, Clone, Copy)]
pub struct Campaigns<'a> {
    http: &'a HttpClient,
    api_key: &'a ApiKey,
}

impl<'a> Campaigns<'a> {
    pub(crate) fn new(http: &'a HttpClient, api_key: &'a ApiKey) -> Self {
        Self { http, api_key }
    }

    pub async fn send(&self, request: SendCampaign) -> Result<SendCampaignResponse, TermiiError> {
        debug!(
            phonebook_id = request.phonebook_id.as_str(),
            campaign_type = request.campaign_type.as_str(),
            "sending campaign"
        );
        let response = self
            .http
            .execute(&campaign::send_campaign(&request, self.api_key))
            .await?;
        let sent: SendCampaignResponse = response.json()?;
        info!(campaign_id = %sent.campaign_id, status = %sent.status, "campaign sent");
        Ok(sent)
    }

    pub async fn fetch_all(&self) -> Result<FetchCampaignsResponse, TermiiError> {
        debug!("fetching campaigns");
        let response = self
            .http
            .execute(&campaign::fetch_campaigns(self.api_key))
            .await?;
        let page: FetchCampaignsResponse = response.json()?;
        info!(total_elements = page.total_elements, "fetched campaigns");
        Ok(page)
    }

    pub async fn history(&self, id: &CampaignId) -> Result<CampaignHistory, TermiiError> {
        debug!(campaign_id = id.as_str(), "fetching campaign history");
        let response = self
            .http
            .execute(&campaign::campaign_history(id, self.api_key))
            .await?;
        let history: CampaignHistory = response.json()?;
        info!(campaign_id = id.as_str(), status = %history.status, "fetched campaign history");
        Ok(history)
    }

    /// Re-run a failed or incomplete campaign.
    pub async fn retry(&self, id: &CampaignId) -> Result<StatusMessageResponse, TermiiError> {
        debug!(campaign_id = id.as_str(), "retrying campaign");
        let response = self
            .http
            .execute(&campaign::retry_campaign(id, self.api_key))
            .await?;
        let retried: StatusMessageResponse = response.json()?;
        info!(campaign_id = id.as_str(), "campaign retry requested");
        Ok(retried)
    }
}
