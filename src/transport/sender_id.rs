use serde_json::json;

use crate::domain::{ApiKey, FetchSenderIds, RequestSenderId};

use super::request::{Method, Request};

pub(crate) const FETCH_PATH: &str = "/api/sender-id";
pub(crate) const REQUEST_PATH: &str = "/api/sender-id/request";

pub(crate) fn fetch_sender_ids(filter: &FetchSenderIds, api_key: &ApiKey) -> Request {
    let mut request = Request::new(Method::Get, FETCH_PATH).query(ApiKey::FIELD, api_key.as_str());
    if let Some(page) = filter.page {
        request = request.query("page", page);
    }
    if let Some(size) = filter.size {
        request = request.query("size", size);
    }
    if let Some(status) = filter.status {
        request = request.query("status", status.as_str());
    }
    request
}

pub(crate) fn request_sender_id(request: &RequestSenderId, api_key: &ApiKey) -> Request {
    Request::new(Method::Post, REQUEST_PATH).json(json!({
        "sender_id": request.sender_id().as_str(),
        "usecase": request.use_case(),
        "company": request.company(),
        "api_key": api_key.as_str(),
    }))
}
