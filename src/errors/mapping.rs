use crate::errors::{ErrorMetadata, ServiceError};
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde_json::Value;

type MessageExtractor = fn(&Value) -> Option<ExtractedMessage>;

/// Error body shapes, tried in order; the first that yields a message wins.
const MESSAGE_EXTRACTORS: [MessageExtractor; 4] = [
    ErrorMapper::from_errors_array,
    ErrorMapper::from_error_field,
    ErrorMapper::from_message_field,
    ErrorMapper::from_msg_description,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedMessage {
    pub message: String,
    pub recovery_suggestion: Option<String>,
}

impl ExtractedMessage {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            recovery_suggestion: None,
        }
    }
}

pub struct ErrorMapper;

impl ErrorMapper {
    /// Builds the structured error for a non-2xx response.
    pub fn from_response(status: StatusCode, headers: &HeaderMap, body: &[u8]) -> ServiceError {
        let metadata = Self::metadata(body);

        let extracted = metadata
            .as_json()
            .and_then(Self::extract_message)
            .unwrap_or_else(|| ExtractedMessage {
                message: Self::reason_phrase(status),
                recovery_suggestion: None,
            });

        ServiceError {
            status_code: status.as_u16(),
            message: extracted.message,
            recovery_suggestion: extracted.recovery_suggestion,
            metadata,
            headers: headers.clone(),
        }
    }

    /// Runs the message extractors over a parsed error body.
    pub fn extract_message(body: &Value) -> Option<ExtractedMessage> {
        MESSAGE_EXTRACTORS
            .iter()
            .find_map(|extract| extract(body))
    }

    /// Standard reason phrase for a status code.
    pub fn reason_phrase(status: StatusCode) -> String {
        status
            .canonical_reason()
            .unwrap_or("Unknown Error")
            .to_string()
    }

    fn metadata(body: &[u8]) -> ErrorMetadata {
        if body.iter().all(u8::is_ascii_whitespace) {
            return ErrorMetadata::Empty;
        }
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => ErrorMetadata::Json(value),
            Err(_) => ErrorMetadata::Raw(Bytes::copy_from_slice(body)),
        }
    }

    fn from_errors_array(body: &Value) -> Option<ExtractedMessage> {
        body.get("errors")?
            .as_array()?
            .first()?
            .get("message")
            .and_then(Self::non_blank)
            .map(ExtractedMessage::new)
    }

    fn from_error_field(body: &Value) -> Option<ExtractedMessage> {
        body.get("error").and_then(Self::non_blank).map(ExtractedMessage::new)
    }

    fn from_message_field(body: &Value) -> Option<ExtractedMessage> {
        body.get("message").and_then(Self::non_blank).map(ExtractedMessage::new)
    }

    fn from_msg_description(body: &Value) -> Option<ExtractedMessage> {
        let msg = body.get("msg").and_then(Self::non_blank)?;
        let description = body.get("description")?.as_str()?;
        Some(ExtractedMessage {
            message: msg.to_string(),
            recovery_suggestion: Some(description.to_string()).filter(|d| !d.trim().is_empty()),
        })
    }

    /// A string that is usable as a message.
    fn non_blank(value: &Value) -> Option<&str> {
        value.as_str().filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn map(status: u16, body: &str) -> ServiceError {
        ErrorMapper::from_response(
            StatusCode::from_u16(status).unwrap(),
            &HeaderMap::new(),
            body.as_bytes(),
        )
    }

    #[test_case(r#"{"errors":[{"message":"m1"}]}"#, "m1" ; "errors array")]
    #[test_case(r#"{"error":"m2"}"#, "m2" ; "error string")]
    #[test_case(r#"{"message":"m3"}"#, "m3" ; "message string")]
    #[test_case(r#"{"msg":"m4","description":"d4"}"#, "m4" ; "msg and description")]
    #[test_case(r#"{"errors":[{"message":"first"}],"error":"second","message":"third"}"#, "first" ; "errors wins over error")]
    #[test_case(r#"{"error":"second","message":"third"}"#, "second" ; "error wins over message")]
    #[test_case(r#"{"errors":[],"error":"fallthrough"}"#, "fallthrough" ; "empty errors array falls through")]
    #[test_case(r#"{"errors":[{"code":"x"}],"message":"fallthrough"}"#, "fallthrough" ; "errors without message falls through")]
    #[test_case(r#"{"error":{"code":7},"message":"fallthrough"}"#, "fallthrough" ; "non string error falls through")]
    #[test_case(r#"{"error":""}"#, "Bad Request" ; "empty error falls back to reason")]
    #[test_case(r#"{"errors":[{"message":" "}],"message":"m"}"#, "m" ; "blank errors message falls through")]
    #[test_case(r#"{"error":"\t\n","message":""}"#, "Bad Request" ; "whitespace everywhere falls back to reason")]
    #[test_case(r#"{"msg":" ","description":"d"}"#, "Bad Request" ; "blank msg falls back to reason")]
    fn test_message_priority(body: &str, expected: &str) {
        assert_eq!(map(400, body).message, expected);
    }

    #[test]
    fn test_msg_description_attaches_recovery_suggestion() {
        let err = map(400, r#"{"msg":"m3","description":"d3"}"#);
        assert_eq!(err.message, "m3");
        assert_eq!(err.recovery_suggestion.as_deref(), Some("d3"));
    }

    #[test]
    fn test_msg_without_description_is_not_used() {
        let err = map(409, r#"{"msg":"only msg"}"#);
        assert_eq!(err.message, "Conflict");
        assert_eq!(err.recovery_suggestion, None);
    }

    #[test]
    fn test_unparseable_body_falls_back_to_reason_phrase() {
        let err = map(500, "<html>oops</html>");
        assert_eq!(err.message, "Internal Server Error");
        assert_eq!(
            err.metadata,
            ErrorMetadata::Raw(Bytes::from_static(b"<html>oops</html>"))
        );
    }

    #[test]
    fn test_empty_body_has_empty_metadata() {
        let err = map(404, "");
        assert_eq!(err.message, "Not Found");
        assert_eq!(err.metadata, ErrorMetadata::Empty);
    }

    #[test]
    fn test_json_metadata_is_preserved() {
        let err = map(403, r#"{"error":"Forbidden resource","code":403}"#);
        assert_eq!(
            err.metadata.as_json().and_then(|v| v.get("code")),
            Some(&serde_json::json!(403))
        );
    }

    #[test]
    fn test_nonstandard_status_reason() {
        let err = map(599, "");
        assert_eq!(err.message, "Unknown Error");
        assert_eq!(err.status_code, 599);
    }
}
