//! Multipart and raw-body uploads over the wire.

use super::*;
use integrations_watson::services::discovery::AddDocumentRequest;
use integrations_watson::services::personality_insights::ProfileOptions;
use serde_json::json;
use std::io::Write;
use wiremock::matchers::{body_string, body_string_contains, header, header_regex, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_add_document_multipart() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/instances/abc/v1/environments/env-1/collections/col-1/documents"))
        .and(header_regex("content-type", "^multipart/form-data; boundary=.+"))
        .and(body_string_contains("name=\"file\"; filename="))
        .and(body_string_contains("Watson reads documents."))
        .and(body_string_contains("name=\"metadata\""))
        .and(body_string_contains("{\"source\":\"manual\"}"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "document_id": "doc-9",
            "status": "processing"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    file.write_all(b"Watson reads documents.").unwrap();

    let mut metadata = serde_json::Map::new();
    metadata.insert("source".to_string(), json!("manual"));
    let request = AddDocumentRequest::file(file.path(), "text/plain").with_metadata(metadata);

    let client = client_for(&instance_url(&server));
    let accepted = client
        .discovery()
        .add_document("env-1", "col-1", request)
        .await
        .unwrap();

    assert_eq!(accepted.document_id, "doc-9");
    assert_eq!(accepted.status, "processing");
}

#[tokio::test]
async fn test_profile_sends_raw_body() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/instances/abc/v3/profile"))
        .and(header("content-type", "text/plain;charset=utf-8"))
        .and(header("content-language", "en"))
        .and(body_string("Call me Ishmael."))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "processed_language": "en",
            "word_count": 3,
            "personality": [],
            "needs": [],
            "values": [],
            "warnings": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&instance_url(&server));
    let profile = client
        .personality_insights()
        .profile(ProfileOptions::text("Call me Ishmael.").with_content_language("en"))
        .await
        .unwrap();

    assert_eq!(profile.word_count, 3);
}
