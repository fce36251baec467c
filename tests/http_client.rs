use std::io::Write;
use std::time::Duration;

use serde_json::json;
use termii::{
    ApiKey, Channel, CountryCode, ErrorCode, FetchSenderIds, MessageText, MessageType, PhoneNumber,
    PhonebookId, SendMessage, SenderId, TermiiClient, TermiiError, UploadContacts,
};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, max_retries: u32) -> TermiiClient {
    TermiiClient::builder(ApiKey::new("test-key").unwrap())
        .base_url(server.uri())
        .max_retries(max_retries)
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client should build")
}

fn message() -> SendMessage {
    SendMessage::text(
        PhoneNumber::new("2347065250817").unwrap(),
        SenderId::new("Acme").unwrap(),
        MessageText::new("Hello").unwrap(),
        Channel::Generic,
        MessageType::Plain,
    )
}

fn sent_body() -> serde_json::Value {
    json!({
        "message_id": "9122821270554876574",
        "message": "Successfully Sent",
        "balance": 9,
        "user": "Peter Mcleish"
    })
}

#[tokio::test]
async fn send_message_posts_json_with_default_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sms/send"))
        .and(body_partial_json(json!({
            "to": "2347065250817",
            "from": "Acme",
            "sms": "Hello",
            "api_key": "test-key"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(sent_body()))
        .expect(1)
        .mount(&server)
        .await;

    let sent = client(&server, 0).messaging().send(message()).await.unwrap();
    assert_eq!(sent.message_id, "9122821270554876574");
    assert_eq!(sent.balance.as_str(), "9");

    let requests = server.received_requests().await.unwrap();
    let headers = &requests[0].headers;
    let header = |name: &str| headers.get(name).and_then(|value| value.to_str().ok());
    assert_eq!(header("content-type"), Some("application/json"));
    assert_eq!(header("accept"), Some("application/json"));
    assert_eq!(header("accept-encoding"), Some("gzip, deflate"));
}

#[tokio::test]
async fn bad_request_surfaces_the_body_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sms/send"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "Invalid sender id"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server, 3)
        .messaging()
        .send(message())
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Api);
    assert_eq!(err.status_code(), Some(400));
    assert_eq!(err.message(), "Invalid sender id");
    assert_eq!(err.details(), Some(&json!({"message": "Invalid sender id"})));
}

#[tokio::test]
async fn unauthorized_is_an_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sender-id"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server, 3)
        .sender_ids()
        .fetch(FetchSenderIds::default())
        .await
        .unwrap_err();
    assert!(matches!(err, TermiiError::Authentication { .. }));
    assert_eq!(err.message(), termii::client::AUTHENTICATION_MESSAGE);
}

#[tokio::test]
async fn server_error_is_retried_until_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/phonebooks"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/phonebooks"))
        .and(query_param("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{"id": "pb-1", "name": "Customers", "total_number_of_contacts": 2}],
            "totalElements": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server, 1).phonebooks().fetch_all().await.unwrap();
    assert_eq!(page.content[0].id, "pb-1");
}

#[tokio::test]
async fn exhausted_server_errors_use_the_fixed_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sms/campaigns"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "db down"})))
        .expect(2)
        .mount(&server)
        .await;

    let err = client(&server, 1)
        .campaigns()
        .fetch_all()
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(500));
    assert_eq!(err.message(), termii::client::SERVER_ERROR_MESSAGE);
    assert_eq!(err.details(), Some(&json!({"message": "db down"})));
}

#[tokio::test]
async fn slow_response_times_out_as_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/phonebooks"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"content": []}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = TermiiClient::builder(ApiKey::new("test-key").unwrap())
        .base_url(server.uri())
        .timeout(Duration::from_millis(200))
        .max_retries(0)
        .build()
        .unwrap();
    let err = client.phonebooks().fetch_all().await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::Network);
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn refused_connection_is_a_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let client = TermiiClient::builder(ApiKey::new("test-key").unwrap())
        .base_url(format!("http://{address}"))
        .max_retries(0)
        .build()
        .unwrap();
    let err = client.phonebooks().fetch_all().await.unwrap_err();
    assert!(matches!(err, TermiiError::Network { .. }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn contact_upload_sends_multipart_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/phonebooks/contacts/upload"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Visit Log to see upload status"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut file = tempfile::Builder::new()
        .prefix("contacts")
        .suffix(".csv")
        .tempfile()
        .unwrap();
    writeln!(file, "phone_number,first_name").unwrap();
    writeln!(file, "8123696237,Ada").unwrap();

    let upload = UploadContacts::new(
        PhonebookId::new("pb-7").unwrap(),
        CountryCode::new("234").unwrap(),
        file.path(),
    )
    .unwrap();
    let uploaded = client(&server, 0).contacts().upload(upload).await.unwrap();
    assert_eq!(uploaded.message, "Visit Log to see upload status");

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    let content_type = request
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data; boundary="));

    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains(r#"name="file""#));
    assert!(body.contains("8123696237,Ada"));
    assert!(body.contains(r#"name="contact""#));
    assert!(body.contains(r#""pid":"pb-7""#));
    assert!(body.contains(r#""api_key":"test-key""#));
}
