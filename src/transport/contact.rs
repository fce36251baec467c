use serde_json::{Map, Value, json};

use crate::domain::{AddContact, ApiKey, PhonebookId, UploadContacts};

use super::request::{Method, MultipartPart, Request};

pub(crate) const UPLOAD_PATH: &str = "/api/phonebooks/contacts/upload";

fn contacts_path(id: &PhonebookId) -> String {
    format!("/api/phonebooks/{}/contacts", id.as_str())
}

pub(crate) fn fetch_contacts(id: &PhonebookId, api_key: &ApiKey) -> Request {
    Request::new(Method::Get, contacts_path(id)).query(ApiKey::FIELD, api_key.as_str())
}

pub(crate) fn add_contact(request: &AddContact, api_key: &ApiKey) -> Request {
    let mut body = Map::new();
    body.insert("pid".to_owned(), request.phonebook_id.as_str().into());
    body.insert(
        "phone_number".to_owned(),
        request.phone_number.as_str().into(),
    );
    if let Some(country_code) = &request.country_code {
        body.insert("country_code".to_owned(), country_code.as_str().into());
    }
    let optional = [
        ("email_address", &request.email_address),
        ("first_name", &request.first_name),
        ("last_name", &request.last_name),
        ("company", &request.company),
    ];
    for (name, value) in optional {
        if let Some(value) = value {
            body.insert(name.to_owned(), value.as_str().into());
        }
    }
    body.insert(ApiKey::FIELD.to_owned(), api_key.as_str().into());

    Request::new(Method::Post, contacts_path(&request.phonebook_id)).json(Value::Object(body))
}

/// Multipart upload: the CSV as `file`, the target phonebook as a JSON `contact` part.
pub(crate) fn upload_contacts(request: &UploadContacts, csv: Vec<u8>, api_key: &ApiKey) -> Request {
    let file_name = request
        .file()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "contacts.csv".to_owned());
    let contact = json!({
        "pid": request.phonebook_id().as_str(),
        "country_code": request.country_code().as_str(),
        "api_key": api_key.as_str(),
    });

    Request::new(Method::Post, UPLOAD_PATH).multipart(vec![
        MultipartPart::file("file", file_name, csv).content_type("text/csv"),
        MultipartPart::text("contact", contact.to_string()).content_type("application/json"),
    ])
}

pub(crate) fn delete_contacts(id: &PhonebookId, api_key: &ApiKey) -> Request {
    Request::new(Method::Delete, contacts_path(id)).query(ApiKey::FIELD, api_key.as_str())
}

#[cfg(test)]
mod tests {
    use crate::domain::{CountryCode, PhoneNumber};
    use crate::transport::RequestBody;

    use super::*;

    fn key() -> ApiKey {
        ApiKey::new("test-key").unwrap()
    }

    fn pid() -> PhonebookId {
        PhonebookId::new("pb-7").unwrap()
    }

    #[test]
    fn fetch_and_delete_use_the_phonebook_contacts_path() {
        let fetch = fetch_contacts(&pid(), &key());
        assert_eq!(fetch.method(), Method::Get);
        assert_eq!(fetch.path(), "/api/phonebooks/pb-7/contacts");

        let delete = delete_contacts(&pid(), &key());
        assert_eq!(delete.method(), Method::Delete);
        assert_eq!(delete.path(), "/api/phonebooks/pb-7/contacts");
        assert_eq!(
            delete.query_params(),
            &[("api_key".to_owned(), "test-key".to_owned())]
        );
    }

    #[test]
    fn add_contact_sends_only_present_fields() {
        let mut contact = AddContact::new(pid(), PhoneNumber::new("8123696237").unwrap());
        contact.first_name = Some("Ada".to_owned());
        contact.country_code = Some(CountryCode::new("234").unwrap());
        let request = add_contact(&contact, &key());

        assert_eq!(request.path(), "/api/phonebooks/pb-7/contacts");
        assert_eq!(
            request.body(),
            Some(&RequestBody::Json(json!({
                "pid": "pb-7",
                "phone_number": "8123696237",
                "country_code": "234",
                "first_name": "Ada",
                "api_key": "test-key",
            })))
        );
    }

    #[test]
    fn upload_builds_file_and_contact_parts() {
        let upload = UploadContacts::new(
            pid(),
            CountryCode::new("234").unwrap(),
            "/data/contacts.csv",
        )
        .unwrap();
        let request = upload_contacts(&upload, b"phone_number\n2348123696237\n".to_vec(), &key());

        assert_eq!(request.path(), "/api/phonebooks/contacts/upload");
        let Some(RequestBody::Multipart(parts)) = request.body() else {
            panic!("expected multipart body");
        };
        assert_eq!(parts.len(), 2);

        assert_eq!(parts[0].name(), "file");
        assert_eq!(parts[0].file_name(), Some("contacts.csv"));
        assert_eq!(parts[0].mime(), Some("text/csv"));
        assert_eq!(parts[0].bytes(), b"phone_number\n2348123696237\n");

        assert_eq!(parts[1].name(), "contact");
        assert_eq!(parts[1].mime(), Some("application/json"));
        let contact: Value = serde_json::from_slice(parts[1].bytes()).unwrap();
        assert_eq!(
            contact,
            json!({"pid": "pb-7", "country_code": "234", "api_key": "test-key"})
        );
    }
}
