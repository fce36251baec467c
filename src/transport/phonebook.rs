use serde_json::{Map, Value, json};

use crate::domain::{ApiKey, CreatePhonebook, PhonebookId, UpdatePhonebook};

use super::request::{Method, Request};

pub(crate) const PHONEBOOKS_PATH: &str = "/api/phonebooks";

fn phonebook_path(id: &PhonebookId) -> String {
    format!("{PHONEBOOKS_PATH}/{}", id.as_str())
}

pub(crate) fn fetch_phonebooks(api_key: &ApiKey) -> Request {
    Request::new(Method::Get, PHONEBOOKS_PATH).query(ApiKey::FIELD, api_key.as_str())
}

pub(crate) fn create_phonebook(request: &CreatePhonebook, api_key: &ApiKey) -> Request {
    let mut body = Map::new();
    body.insert("phonebook_name".to_owned(), request.name().into());
    if let Some(description) = request.description() {
        body.insert("description".to_owned(), description.into());
    }
    body.insert(ApiKey::FIELD.to_owned(), api_key.as_str().into());

    Request::new(Method::Post, PHONEBOOKS_PATH).json(Value::Object(body))
}

pub(crate) fn update_phonebook(
    id: &PhonebookId,
    request: &UpdatePhonebook,
    api_key: &ApiKey,
) -> Request {
    Request::new(Method::Patch, phonebook_path(id)).json(json!({
        "phonebook_name": request.name(),
        "description": request.description(),
        "api_key": api_key.as_str(),
    }))
}

pub(crate) fn delete_phonebook(id: &PhonebookId, api_key: &ApiKey) -> Request {
    Request::new(Method::Delete, phonebook_path(id)).query(ApiKey::FIELD, api_key.as_str())
}
