use serde_json::{Map, Value, json};

use crate::domain::{ApiKey, CampaignId, CampaignSchedule, SendCampaign};

use super::request::{Method, Request};

pub(crate) const CAMPAIGNS_PATH: &str = "/api/sms/campaigns";
pub(crate) const SEND_PATH: &str = "/api/sms/campaigns/send";

pub(crate) fn send_campaign(request: &SendCampaign, api_key: &ApiKey) -> Request {
    let mut body = Map::new();
    body.insert("country_code".to_owned(), request.country_code.as_str().into());
    body.insert("sender_id".to_owned(), request.sender_id.as_str().into());
    body.insert("message".to_owned(), request.message.as_str().into());
    body.insert("channel".to_owned(), request.channel.as_str().into());
    body.insert(
        "message_type".to_owned(),
        request.message_type.as_str().into(),
    );
    body.insert(
        "phonebook_id".to_owned(),
        request.phonebook_id.as_str().into(),
    );
    body.insert(
        "campaign_type".to_owned(),
        request.campaign_type.as_str().into(),
    );
    match &request.schedule {
        CampaignSchedule::Immediate => {
            body.insert("schedule_sms_status".to_owned(), "regular".into());
        }
        CampaignSchedule::At(time) => {
            body.insert("schedule_sms_status".to_owned(), "scheduled".into());
            body.insert("schedule_time".to_owned(), time.as_str().into());
        }
    }
    body.insert(
        "enable_link_tracking".to_owned(),
        request.enable_link_tracking.into(),
    );
    if let Some(delimiter) = &request.delimiter {
        body.insert("delimiter".to_owned(), delimiter.as_str().into());
    }
    if let Some(remove) = request.remove_duplicate {
        body.insert(
            "remove_duplicate".to_owned(),
            if remove { "yes" } else { "no" }.into(),
        );
    }
    body.insert(ApiKey::FIELD.to_owned(), api_key.as_str().into());

    Request::new(Method::Post, SEND_PATH).json(Value::Object(body))
}

pub(crate) fn fetch_campaigns(api_key: &ApiKey) -> Request {
    Request::new(Method::Get, CAMPAIGNS_PATH).query(ApiKey::FIELD, api_key.as_str())
}

pub(crate) fn campaign_history(id: &CampaignId, api_key: &ApiKey) -> Request {
    Request::new(Method::Get, CAMPAIGNS_PATH)
        .query(CampaignId::FIELD, id.as_str())
        .query(ApiKey::FIELD, api_key.as_str())
}

pub(crate) fn retry_campaign(id: &CampaignId, api_key: &ApiKey) -> Request {
    Request::new(Method::Patch, format!("{CAMPAIGNS_PATH}/{}", id.as_str()))
        .json(json!({ "api_key": api_key.as_str() }))
}
