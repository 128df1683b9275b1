//! Every call ends in exactly one outcome, whatever the transport, status
//! and body shape.

use super::*;
use integrations_watson::errors::ErrorMetadata;
use test_case::test_case;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[derive(Debug, PartialEq)]
enum Outcome {
    Success,
    Decode,
    Http { status: u16, message: String },
}

fn http(status: u16, message: &str) -> Outcome {
    Outcome::Http {
        status,
        message: message.to_string(),
    }
}

const VALID: &str = r#"{"session_id":"abc"}"#;
const ERROR_BODY: &str = r#"{"error":"Rate limit exceeded"}"#;
const GARBAGE: &str = "<html>upstream hiccup</html>";

#[test_case(201, VALID, Outcome::Success ; "2xx parseable")]
#[test_case(200, GARBAGE, Outcome::Decode ; "2xx unparseable")]
#[test_case(429, ERROR_BODY, http(429, "Rate limit exceeded") ; "4xx parseable")]
#[test_case(400, GARBAGE, http(400, "Bad Request") ; "4xx unparseable")]
#[test_case(503, ERROR_BODY, http(503, "Rate limit exceeded") ; "5xx parseable")]
#[test_case(500, GARBAGE, http(500, "Internal Server Error") ; "5xx unparseable")]
#[tokio::test]
async fn test_delivery(status: u16, body: &'static str, expected: Outcome) {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/instances/abc/v2/assistants/a1/sessions"))
        .respond_with(ResponseTemplate::new(status).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let client = client_for(&instance_url(&server));
    let outcome = match client.assistant().create_session("a1").await {
        Ok(session) => {
            assert_eq!(session.session_id, "abc");
            Outcome::Success
        }
        Err(err) if err.is_decode_error() => Outcome::Decode,
        Err(WatsonError::Http(service_error)) => {
            if body == GARBAGE {
                assert!(matches!(service_error.metadata, ErrorMetadata::Raw(_)));
            }
            Outcome::Http {
                status: service_error.status_code,
                message: service_error.message,
            }
        }
        Err(other) => panic!("unexpected outcome: {other:?}"),
    };

    assert_eq!(outcome, expected);
}

#[tokio::test]
async fn test_transport_failure() {
    // Nothing listens on a port that was just released.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = client_for(&format!("http://127.0.0.1:{port}/instances/abc"));
    let err = client.assistant().create_session("a1").await.unwrap_err();

    assert!(err.is_transport_error());
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn test_missing_service_url_sends_nothing() {
    let client = WatsonClientBuilder::new()
        .with_config(ServiceConfig::default())
        .with_authenticator(Arc::new(NoAuthAuthenticator))
        .build()
        .unwrap();

    let err = client.assistant().create_session("a1").await.unwrap_err();
    assert!(matches!(err, WatsonError::NoEndpoint));
}
