//! Failure classification tests.
//!
//! This module tests how responses map onto the error taxonomy:
//! - Non-2xx statuses are transport failures, checked before the body shape
//! - 2xx bodies without `records` are contract failures carrying the body
//! - Timeouts and refused connections are transport failures
//!
//! # Invariants
//! - A contract check is never attempted on a non-2xx response

mod common;

use std::time::Duration;

use airtable_client::{ClientError, ErrorCategory, QueryFilter, RecordUpdate, TableRepository};
use common::*;
use serde_json::json;
use wiremock::matchers::{method, path};

fn business_filter() -> QueryFilter {
    QueryFilter::exact_match("Business Name", "Test")
}

#[tokio::test]
async fn test_query_missing_records_is_contract_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.query(&business_filter()).await.unwrap_err();

    match err {
        ClientError::MissingRecords { ref body } => assert_eq!(body, "{}"),
        other => panic!("Expected MissingRecords, got {:?}", other),
    }
    assert_eq!(err.category(), ErrorCategory::Contract);
    assert!(err.to_string().contains("{}"));
}

#[tokio::test]
async fn test_update_missing_records_is_contract_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "offset": "itr1" })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let updates = vec![RecordUpdate::new("rec1", serde_json::Map::new())];
    let err = client.update(&updates).await.unwrap_err();

    assert!(err.is_contract(), "got {:?}", err);
    assert!(
        err.to_string().contains(r#"{"offset":"itr1"}"#),
        "message should carry the body: {}",
        err
    );
}

#[tokio::test]
async fn test_null_records_is_missing_records_with_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "records": null, "marker": "xyz" })),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.query(&business_filter()).await.unwrap_err();

    assert!(matches!(err, ClientError::MissingRecords { .. }), "got {:?}", err);
    assert!(err.is_contract());
    assert!(err.to_string().contains("xyz"), "message should carry the body: {}", err);
}

#[tokio::test]
async fn test_unparseable_records_carries_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "records": {}, "marker": "xyz" })),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.query(&business_filter()).await.unwrap_err();

    assert!(matches!(err, ClientError::InvalidResponse(_)), "got {:?}", err);
    assert!(err.is_contract());
    assert!(err.to_string().contains("xyz"), "message should carry the body: {}", err);
}

#[tokio::test]
async fn test_malformed_json_is_contract_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.query(&business_filter()).await.unwrap_err();

    assert!(matches!(err, ClientError::InvalidResponse(_)), "got {:?}", err);
    assert!(err.is_contract());
}

#[tokio::test]
async fn test_record_without_id_is_contract_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "records": [{ "fields": {} }] })),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.query(&business_filter()).await.unwrap_err();

    assert!(matches!(err, ClientError::InvalidResponse(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_non_2xx_is_transport_error_before_contract_check() {
    let mock_server = MockServer::start().await;

    // Body lacks `records`, but the status must win.
    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.query(&business_filter()).await.unwrap_err();

    match err {
        ClientError::ApiError { status, .. } => assert_eq!(status, 500),
        other => panic!("Expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_api_error_message_from_airtable_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(TABLE_PATH))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(load_fixture("records/error_invalid_permissions.json")),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let updates = vec![RecordUpdate::new("rec1", serde_json::Map::new())];
    let err = client.update(&updates).await.unwrap_err();

    assert!(err.is_transport());
    assert!(err.is_auth_error());
    match err {
        ClientError::ApiError {
            status,
            ref url,
            ref message,
        } => {
            assert_eq!(status, 403);
            assert!(url.ends_with(TABLE_PATH), "url: {url}");
            assert!(message.starts_with("INVALID_PERMISSIONS_OR_MODEL_NOT_FOUND"));
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_api_error_with_plain_text_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.query(&business_filter()).await.unwrap_err();

    match err {
        ClientError::ApiError { status, message, .. } => {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "records": [] }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let client = test_client_with_timeout(&mock_server, Duration::from_millis(300));
    let err = client.query(&business_filter()).await.unwrap_err();

    assert!(
        matches!(err, ClientError::Timeout(d) if d == Duration::from_millis(300)),
        "got {:?}",
        err
    );
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client = airtable_client::AirtableClient::builder()
        .base_url("http://127.0.0.1:1/v0/".to_string())
        .api_key(secrecy::SecretString::new(TEST_API_KEY.to_string().into()))
        .base_id(TEST_BASE_ID.to_string())
        .table(TEST_TABLE.to_string())
        .build()
        .unwrap();

    let err = client.query(&business_filter()).await.unwrap_err();

    assert!(matches!(err, ClientError::HttpError(_)), "got {:?}", err);
    assert!(err.is_transport());
}
