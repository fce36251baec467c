use tracing::{debug, info};

use crate::domain::{
    ApiKey, SendBulkMessage, SendBulkMessageResponse, SendMessage, SendMessageResponse,
    SendNumberMessage, SendNumberMessageResponse,
};
use crate::transport::{HttpClient, messaging};

use super::TermiiError;

/// Messaging API: `/api/sms/send` and `/api/sms/send/bulk`.
#[derive(Debug, Clone, Copy)]
pub struct Messaging<'a> {
    http: &'a HttpClient,
    api_key: &'a ApiKey,
}

impl<'a> Messaging<'a> {
    pub(crate) fn new(http: &'a HttpClient, api_key: &'a ApiKey) -> Self {
        Self { http, api_key }
    }

    /// Send a text or WhatsApp media message to up to 100 recipients.
    pub async fn send(&self, message: SendMessage) -> Result<SendMessageResponse, TermiiError> {
        debug!(
            recipients = message.to().len(),
            channel = message.channel().as_str(),
            "sending message"
        );
        let response = self
            .http
            .execute(&messaging::send_message(&message, self.api_key))
            .await?;
        let sent: SendMessageResponse = response.json()?;
        info!(message_id = %sent.message_id, "message sent");
        Ok(sent)
    }

    /// Send the same text to up to 10 000 recipients.
    pub async fn send_bulk(
        &self,
        message: SendBulkMessage,
    ) -> Result<SendBulkMessageResponse, TermiiError> {
        debug!(recipients = message.to().len(), "sending bulk message");
        let response = self
            .http
            .execute(&messaging::send_bulk_message(&message, self.api_key))
            .await?;
        let sent: SendBulkMessageResponse = response.json()?;
        info!(message_id = %sent.message_id, "bulk message sent");
        Ok(sent)
    }
}

/// Number API: messages sent from an auto-generated Termii number.
#[derive(Debug, Clone, Copy)]
pub struct Numbers<'a> {
    http: &'a HttpClient,
    api_key: &'a ApiKey,
}

impl<'a> Numbers<'a> {
    pub(crate) fn new(http: &'a HttpClient, api_key: &'a ApiKey) -> Self {
        Self { http, api_key }
    }

    pub async fn send(
        &self,
        message: SendNumberMessage,
    ) -> Result<SendNumberMessageResponse, TermiiError> {
        debug!("sending message through the number API");
        let response = self
            .http
            .execute(&messaging::send_number_message(&message, self.api_key))
            .await?;
        let sent: SendNumberMessageResponse = response.json()?;
        info!(message_id = %sent.message_id, "number message sent");
        Ok(sent)
    }
}
