//! Unit tests for the dialog service

use super::*;
use crate::errors::WatsonError;
use crate::fixtures::*;
use crate::mocks::{mock_executor, MockHttpTransport};
use http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use std::io::Write;
use test_case::test_case;

fn create_test_service(transport: &MockHttpTransport) -> DialogServiceImpl {
    DialogServiceImpl::new(mock_executor(transport, None))
}

#[tokio::test]
async fn test_list_dialogs_has_no_query() {
    let transport = MockHttpTransport::new().with_json_response(200, list_dialogs_response());
    let service = create_test_service(&transport);

    let list = service.list_dialogs().await.unwrap();

    assert_eq!(list.dialogs[1].name, "weather");
    assert_eq!(transport.last_request().unwrap().url.query(), None);
}

#[tokio::test]
async fn test_create_dialog_uploads_name_and_file() {
    let mut file = tempfile::Builder::new().suffix(".xml").tempfile().unwrap();
    file.write_all(b"<dialog><flow/></dialog>").unwrap();

    let transport = MockHttpTransport::new().with_json_response(201, r#"{"dialog_id":"d-9"}"#);
    let service = create_test_service(&transport);

    let created = service.create_dialog("pizza", file.path()).await.unwrap();
    assert_eq!(created.dialog_id, "d-9");

    let request = transport.last_request().unwrap();
    let body = request.body_text();
    assert!(body.contains("name=\"name\"\r\n\r\npizza\r\n"));
    assert!(body.contains("Content-Type: application/wds+xml"));
    assert!(body.contains("<dialog><flow/></dialog>"));
}

#[test_case(DialogFileFormat::Mct, "application/octet-stream" ; "mct")]
#[test_case(DialogFileFormat::Json, "application/wds+json" ; "json")]
#[test_case(DialogFileFormat::Xml, "application/wds+xml" ; "xml")]
#[tokio::test]
async fn test_download_negotiates_format(format: DialogFileFormat, accept: &str) {
    let transport = MockHttpTransport::new().with_response(StatusCode::OK, "dialog-bytes");
    let service = create_test_service(&transport);
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join(format!("pizza.{}", format.extension()));

    let path = service
        .download_dialog_file("d-1", format, &destination)
        .await
        .unwrap();

    assert_eq!(path, destination);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "dialog-bytes");
    let request = transport.last_request().unwrap();
    assert_eq!(request.header("accept"), Some(accept));
    assert_eq!(request.url.path(), "/instances/1/v1/dialogs/d-1");
}

#[tokio::test]
async fn test_content_round_trip() {
    let transport = MockHttpTransport::new()
        .with_json_response(200, dialog_content_response())
        .with_response(StatusCode::CREATED, "");
    let service = create_test_service(&transport);

    let mut content = service.get_content("d-1").await.unwrap();
    assert_eq!(content.len(), 2);
    content[1].content = "Which size would you like?".to_string();

    service.update_content("d-1", content).await.unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, Method::PUT);
    assert_eq!(
        request.body_json()[1],
        serde_json::json!({"node": "OUTPUT(200001)", "content": "Which size would you like?"})
    );
}

#[tokio::test]
async fn test_converse_query_parameters() {
    let transport = MockHttpTransport::new().with_json_response(201, conversation_response());
    let service = create_test_service(&transport);

    let response = service
        .converse("d-1", Some(1001), Some(2002), Some("large"))
        .await
        .unwrap();

    assert_eq!(response.response.len(), 2);
    let request = transport.last_request().unwrap();
    assert_eq!(
        request.url.query(),
        Some("conversation_id=1001&client_id=2002&input=large")
    );
    assert!(request.body.is_none());
}

#[tokio::test]
async fn test_new_conversation_omits_ids() {
    let transport = MockHttpTransport::new().with_json_response(201, conversation_response());
    let service = create_test_service(&transport);

    service.converse("d-1", None, None, None).await.unwrap();

    assert_eq!(transport.last_request().unwrap().url.query(), None);
}

#[tokio::test]
async fn test_get_profile_repeats_name_key() {
    let transport = MockHttpTransport::new().with_json_response(200, dialog_profile_response());
    let service = create_test_service(&transport);

    let names = vec!["size".to_string(), "topping".to_string()];
    let profile = service.get_profile("d-1", 2002, &names).await.unwrap();

    assert_eq!(profile.name_values[0], NameValue::new("size", "large"));
    assert_eq!(
        transport.last_request().unwrap().url.query(),
        Some("client_id=2002&name=size&name=topping")
    );
}

#[tokio::test]
async fn test_update_profile() {
    let transport = MockHttpTransport::new().with_response(StatusCode::OK, "");
    let service = create_test_service(&transport);

    let profile = Profile {
        client_id: Some(2002),
        name_values: vec![NameValue::new("size", "small")],
    };
    service.update_profile("d-1", profile).await.unwrap();

    assert_eq!(
        transport.last_request().unwrap().body_json(),
        serde_json::json!({"client_id": 2002, "name_values": [{"name": "size", "value": "small"}]})
    );
}

#[tokio::test]
async fn test_delete_dialog_error_uses_msg_description() {
    let transport = MockHttpTransport::new().with_json_response(400, msg_description_body());
    let service = create_test_service(&transport);

    let err = service.delete_dialog("d-1").await.unwrap_err();
    match err {
        WatsonError::Http(service_error) => {
            assert_eq!(service_error.message, "Dialog file is malformed");
            assert_eq!(
                service_error.recovery_suggestion.as_deref(),
                Some("Validate the XML against the schema")
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_format_from_extension() {
    assert_eq!(DialogFileFormat::from_extension("XML"), Some(DialogFileFormat::Xml));
    assert_eq!(DialogFileFormat::from_extension("txt"), None);
}
