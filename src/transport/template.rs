use serde_json::{Map, Value, json};

use crate::domain::{ApiKey, SendTemplate, TemplateValue};

use super::request::{Method, Request};

pub(crate) const SEND_PATH: &str = "/api/send/template";
pub(crate) const SEND_MEDIA_PATH: &str = "/api/send/template/media";

/// Template sends go to the media endpoint when the request carries media.
pub(crate) fn send_template(request: &SendTemplate, api_key: &ApiKey) -> Request {
    let data: Map<String, Value> = request
        .data
        .iter()
        .map(|(key, value)| (key.clone(), template_value(value)))
        .collect();

    let mut body = Map::new();
    body.insert("phone_number".to_owned(), request.phone_number.as_str().into());
    body.insert("device_id".to_owned(), request.device_id.as_str().into());
    body.insert("template_id".to_owned(), request.template_id.as_str().into());
    body.insert("data".to_owned(), Value::Object(data));
    body.insert(ApiKey::FIELD.to_owned(), api_key.as_str().into());

    let path = match &request.media {
        Some(media) => {
            body.insert(
                "media".to_owned(),
                json!({"url": media.url().as_str(), "caption": media.caption()}),
            );
            SEND_MEDIA_PATH
        }
        None => SEND_PATH,
    };

    Request::new(Method::Post, path).json(Value::Object(body))
}

fn template_value(value: &TemplateValue) -> Value {
    match value {
        TemplateValue::Text(text) => Value::String(text.clone()),
        TemplateValue::Number(number) => Value::Number(number.clone()),
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{DeviceId, MediaUrl, PhoneNumber, TemplateId, TemplateMedia};
    use crate::transport::RequestBody;

    use super::*;

    fn template() -> SendTemplate {
        SendTemplate::new(
            PhoneNumber::new("2347065250817").unwrap(),
            DeviceId::new("device-1").unwrap(),
            TemplateId::new("1493-csdn3-ns34w-sd3434-dfdf").unwrap(),
        )
        .field("product_name", "Termii")
        .field("otp", 120435)
        .field("expiry_time", "10 minutes")
    }

    fn body(request: &Request) -> &Value {
        match request.body() {
            Some(RequestBody::Json(value)) => value,
            other => panic!("expected JSON body, got {other:?}"),
        }
    }

    #[test]
    fn plain_template_keeps_value_types() {
        let key = ApiKey::new("test-key").unwrap();
        let request = send_template(&template(), &key);

        assert_eq!(request.path(), "/api/send/template");
        assert_eq!(
            body(&request),
            &json!({
                "phone_number": "2347065250817",
                "device_id": "device-1",
                "template_id": "1493-csdn3-ns34w-sd3434-dfdf",
                "data": {"product_name": "Termii", "otp": 120435, "expiry_time": "10 minutes"},
                "api_key": "test-key",
            })
        );
    }

    #[test]
    fn media_template_uses_media_endpoint() {
        let key = ApiKey::new("test-key").unwrap();
        let media = TemplateMedia::new(
            MediaUrl::new("https://example.com/invoice.pdf").unwrap(),
            "Your invoice",
        )
        .unwrap();
        let request = send_template(&template().with_media(media), &key);

        assert_eq!(request.path(), "/api/send/template/media");
        assert_eq!(
            body(&request)["media"],
            json!({"url": "https://example.com/invoice.pdf", "caption": "Your invoice"})
        );
    }
}
