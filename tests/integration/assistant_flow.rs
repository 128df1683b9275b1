//! Session lifecycle against a mocked Assistant instance.

use super::*;
use integrations_watson::services::assistant::{MessageRequest, ResponseGeneric};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_session_message_delete() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/instances/abc/v2/assistants/my%20bot/sessions"))
        .and(query_param("version", VERSION))
        .and(header("authorization", BASIC_HEADER))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"session_id": "s-1"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/instances/abc/v2/assistants/my%20bot/sessions/s-1/message"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"input": {"message_type": "text", "text": "hello"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": {
                "generic": [{ "response_type": "text", "text": "Hi there" }],
                "intents": [{ "intent": "greeting", "confidence": 0.98 }]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/instances/abc/v2/assistants/my%20bot/sessions/s-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&instance_url(&server));
    let assistant = client.assistant();

    let session = assistant.create_session("my bot").await.unwrap();
    assert_eq!(session.session_id, "s-1");

    let reply = assistant
        .message("my bot", &session.session_id, Some(MessageRequest::text("hello")))
        .await
        .unwrap();
    assert_eq!(
        reply.output.generic[0],
        ResponseGeneric::Text {
            text: "Hi there".to_string()
        }
    );
    assert_eq!(reply.output.intents[0].intent, "greeting");

    assistant.delete_session("my bot", "s-1").await.unwrap();
}

#[tokio::test]
async fn test_missing_session_is_structured_error() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/instances/abc/v2/assistants/a1/sessions/gone/message"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("x-global-transaction-id", "tx-42")
                .set_body_json(json!({"error": "Invalid Session", "code": 404})),
        )
        .mount(&server)
        .await;

    let client = client_for(&instance_url(&server));
    let err = client
        .assistant()
        .message("a1", "gone", None)
        .await
        .unwrap_err();

    let service_error = err.service_error().expect("http error");
    assert_eq!(service_error.status_code, 404);
    assert_eq!(service_error.message, "Invalid Session");
    assert_eq!(service_error.transaction_id(), Some("tx-42"));
}
