use serde_json::{Map, Value, json};

use crate::domain::{
    ApiKey, Media, MessageContent, Recipients, SendBulkMessage, SendMessage, SendNumberMessage,
};

use super::request::{Method, Request};

pub(crate) const SEND_PATH: &str = "/api/sms/send";
pub(crate) const SEND_BULK_PATH: &str = "/api/sms/send/bulk";
pub(crate) const SEND_NUMBER_PATH: &str = "/api/sms/number/send";

pub(crate) fn send_message(request: &SendMessage, api_key: &ApiKey) -> Request {
    let mut body = Map::new();
    body.insert("to".to_owned(), recipients(request.to()));
    body.insert("from".to_owned(), request.sender().as_str().into());
    match request.content() {
        MessageContent::Text(sms) => {
            body.insert("sms".to_owned(), sms.as_str().into());
        }
        MessageContent::Media(media_content) => {
            body.insert("media".to_owned(), media(media_content));
        }
    }
    body.insert("type".to_owned(), request.message_type().as_str().into());
    body.insert("channel".to_owned(), request.channel().as_str().into());
    body.insert(ApiKey::FIELD.to_owned(), api_key.as_str().into());

    Request::new(Method::Post, SEND_PATH).json(Value::Object(body))
}

pub(crate) fn send_bulk_message(request: &SendBulkMessage, api_key: &ApiKey) -> Request {
    let to: Vec<&str> = request.to().iter().map(|phone| phone.as_str()).collect();
    Request::new(Method::Post, SEND_BULK_PATH).json(json!({
        "to": to,
        "from": request.sender().as_str(),
        "sms": request.sms().as_str(),
        "type": request.message_type().as_str(),
        "channel": request.channel().as_str(),
        "api_key": api_key.as_str(),
    }))
}

pub(crate) fn send_number_message(request: &SendNumberMessage, api_key: &ApiKey) -> Request {
    let mut body = Map::new();
    body.insert("to".to_owned(), request.to.as_str().into());
    body.insert("sms".to_owned(), request.sms.as_str().into());
    if let Some(message_type) = request.message_type {
        body.insert("type".to_owned(), message_type.as_str().into());
    }
    body.insert(ApiKey::FIELD.to_owned(), api_key.as_str().into());

    Request::new(Method::Post, SEND_NUMBER_PATH).json(Value::Object(body))
}

fn recipients(to: &Recipients) -> Value {
    match to {
        Recipients::One(phone) => phone.as_str().into(),
        Recipients::Many(phones) => phones.iter().map(|phone| phone.as_str()).collect(),
    }
}

fn media(media: &Media) -> Value {
    let mut value = Map::new();
    value.insert("url".to_owned(), media.url.as_str().into());
    if let Some(caption) = &media.caption {
        value.insert("caption".to_owned(), caption.as_str().into());
    }
    Value::Object(value)
}
