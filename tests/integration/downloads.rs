//! Streaming response bodies into files.

use super::*;
use integrations_watson::services::dialog::DialogFileFormat;
use integrations_watson::services::text_to_speech::AudioFormat;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_dialog_file_download_negotiates_format() {
    let server = setup_mock_server().await;
    let xml = "<?xml version=\"1.0\"?><dialog><flow/></dialog>";

    Mock::given(method("GET"))
        .and(path("/instances/abc/v1/dialogs/d-1"))
        .and(header("accept", "application/wds+xml"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(xml, "application/wds+xml"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("pizza.xml");

    let client = client_for(&instance_url(&server));
    let written = client
        .dialog()
        .download_dialog_file("d-1", DialogFileFormat::Xml, &destination)
        .await
        .unwrap();

    assert_eq!(written, destination);
    assert_eq!(std::fs::read_to_string(&destination).unwrap(), xml);
}

#[tokio::test]
async fn test_synthesize_to_file() {
    let server = setup_mock_server().await;
    let audio: Vec<u8> = (0..=255u8).cycle().take(64 * 1024).collect();

    Mock::given(method("POST"))
        .and(path("/instances/abc/v1/synthesize"))
        .and(header("accept", "audio/wav"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(audio.clone(), "audio/wav"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("hello.wav");

    let client = client_for(&instance_url(&server));
    client
        .text_to_speech()
        .synthesize_to_file("hello", None, AudioFormat::Wav, &destination)
        .await
        .unwrap();

    assert_eq!(std::fs::read(&destination).unwrap(), audio);
}

#[tokio::test]
async fn test_failed_download_leaves_no_file() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/instances/abc/v1/dialogs/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"code": 404, "error": "Dialog not found"})),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("missing.json");

    let client = client_for(&instance_url(&server));
    let err = client
        .dialog()
        .download_dialog_file("missing", DialogFileFormat::Json, &destination)
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.service_error().unwrap().message, "Dialog not found");
    assert!(!destination.exists());
}
