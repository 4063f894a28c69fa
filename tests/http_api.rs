//! Integration tests for the HTTP device client using wiremock.
//!
//! These tests run [`HttpDeviceApi`] against a mock HTTP server and cover
//! every endpoint, error statuses, malformed bodies, and the password POST.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use phonedeck::remote::{DeviceApi, HttpDeviceApi, RemoteError};

// =============================================================================
// Test Helpers
// =============================================================================

fn client(server: &MockServer) -> HttpDeviceApi {
    HttpDeviceApi::new(server.uri(), Duration::from_secs(5)).unwrap()
}

async fn mount_get(server: &MockServer, endpoint: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/{}", endpoint)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

// =============================================================================
// Read endpoints
// =============================================================================

#[tokio::test]
async fn contacts_are_flattened_in_order() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "getContacts",
        json!({"contacts": [{"Zed": "555-0199", "Alice": "555-0100"}, {"Bob": 5550101}]}),
    )
    .await;

    let contacts = client(&server).contacts().await.unwrap();

    let names: Vec<&str> = contacts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Zed", "Alice", "Bob"]);
    assert_eq!(contacts[1].number, "555-0100");
    assert_eq!(contacts[2].number, "5550101");
}

#[tokio::test]
async fn sms_records_are_decoded() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "getSMS",
        json!({"sms": [{
            "Address": "+15550100",
            "Content": "running late",
            "Date": 1500000000000u64,
            "Sent": 1499999990000u64
        }]}),
    )
    .await;

    let messages = client(&server).sms().await.unwrap();

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].address, "+15550100");
    assert_eq!(messages[0].content, "running late");
}

#[tokio::test]
async fn call_logs_are_decoded() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "getLogs",
        json!({"calllogs": [{"Name": "Bob", "Number": "555", "Date": 0, "Duration": "61"}]}),
    )
    .await;

    let logs = client(&server).call_logs().await.unwrap();

    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].name, "Bob");
    assert_eq!(logs[0].duration, "61");
}

#[tokio::test]
async fn make_image_returns_raw_reply() {
    let server = MockServer::start().await;
    mount_get(&server, "makeImage", json!({"image": "ready", "size": 3})).await;

    let reply = client(&server).make_image().await.unwrap();
    assert_eq!(reply, json!({"image": "ready", "size": 3}));
}

#[tokio::test]
async fn requests_ask_for_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getSMS"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sms": []})))
        .expect(1)
        .mount(&server)
        .await;

    let messages = client(&server).sms().await.unwrap();
    assert!(messages.is_empty());
}

// =============================================================================
// Errors
// =============================================================================

#[tokio::test]
async fn error_status_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getContacts"))
        .respond_with(ResponseTemplate::new(500).set_body_string("device locked"))
        .mount(&server)
        .await;

    let err = client(&server).contacts().await.unwrap_err();

    match err {
        RemoteError::Api {
            endpoint,
            status,
            message,
        } => {
            assert_eq!(endpoint, "getContacts");
            assert_eq!(status, 500);
            assert!(message.contains("device locked"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_body_maps_to_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getLogs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client(&server).call_logs().await.unwrap_err();
    assert!(matches!(err, RemoteError::Decode { .. }), "got {:?}", err);
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let api = HttpDeviceApi::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
    let err = api.sms().await.unwrap_err();
    assert!(matches!(err, RemoteError::Network(_)), "got {:?}", err);
}

// =============================================================================
// Password gate
// =============================================================================

#[tokio::test]
async fn password_is_posted_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/getPassword"))
        .and(body_json(json!({"password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client(&server).submit_password("hunter2").await.unwrap();

    assert_eq!(reply.status, 200);
    assert_eq!(reply.reason, "OK");
}

#[tokio::test]
async fn rejected_password_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/getPassword"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let reply = client(&server).submit_password("wrong").await.unwrap();

    assert_eq!(reply.status, 403);
    assert_eq!(reply.reason, "Forbidden");
}
