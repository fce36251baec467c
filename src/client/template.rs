use tracing::{debug, info};

use crate::domain::{ApiKey, SendTemplate, SendTemplateResponse, TemplateMedia};
use crate::transport::{HttpClient, template};

use super::TermiiError;

#[derive(Debug, Clone, Copy)]
pub struct Templates<'a> {
    http: &'a HttpClient,
    api_key: &'a ApiKey,
}

impl<'a> Templates<'a> {
    pub(crate) fn new(http: &'a HttpClient, api_key: &'a ApiKey) -> Self {
        Self { http, api_key }
    }

    /// Send a device template. Media set on the request routes it to the media endpoint.
    pub async fn send(&self, request: SendTemplate) -> Result<SendTemplateResponse, TermiiError> {
        debug!(
            template_id = request.template_id.as_str(),
            fields = request.data.len(),
            media = request.media.is_some(),
            "sending template message"
        );
        let response = self
            .http
            .execute(&template::send_template(&request, self.api_key))
            .await?;
        let sent: SendTemplateResponse = response.json()?;
        info!(message_id = %sent.message_id, "template message sent");
        Ok(sent)
    }

    pub async fn send_with_media(
        &self,
        request: SendTemplate,
        media: TemplateMedia,
    ) -> Result<SendTemplateResponse, TermiiError> {
        self.send(request.with_media(media)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::{client_with, json_body};
    use crate::domain::{DeviceId, MediaUrl, PhoneNumber, TemplateId};
    use crate::transport::fake::FakeTransport;

    use super::*;

    const SENT: &str = r#"{"code": "ok", "message_id": "3017544054459", "message": "Successfully Sent", "balance": "7.2", "user": "Acme", "message_id_str": "3017544054459"}"#;

    fn request() -> SendTemplate {
        SendTemplate::new(
            PhoneNumber::new("2347065250817").unwrap(),
            DeviceId::new("talert").unwrap(),
            TemplateId::new("1493-csdn3-ns34w-sd3434-dfdf").unwrap(),
        )
        .field("product_name", "Termii")
        .field("otp", 120435)
    }

    #[tokio::test]
    async fn send_posts_template_data() {
        let fake = FakeTransport::always(200, SENT);
        let sent = client_with(&fake).templates().send(request()).await.unwrap();

        assert_eq!(sent.message_id_str.as_deref(), Some("3017544054459"));
        let call = fake.last_call();
        assert_eq!(call.url.path(), "/api/send/template");
        assert_eq!(json_body(&call.request)["data"]["otp"], 120435);
    }

    #[tokio::test]
    async fn send_with_media_uses_media_endpoint() {
        let fake = FakeTransport::always(200, SENT);
        let media = TemplateMedia::new(
            MediaUrl::new("https://example.com/invoice.pdf").unwrap(),
            "Invoice",
        )
        .unwrap();

        client_with(&fake)
            .templates()
            .send_with_media(request(), media)
            .await
            .unwrap();
        let call = fake.last_call();
        assert_eq!(call.url.path(), "/api/send/template/media");
        assert_eq!(json_body(&call.request)["media"]["caption"], "Invoice");
    }
}
