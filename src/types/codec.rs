//! JSON codec entry points shared by every model type.
//!
//! Models derive (or hand-implement) serde traits; this module runs them and
//! turns serde's failures into a [`DecodeError`] callers can match on.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::error::Category;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("missing field `{0}`")]
    MissingField(String),

    #[error("unknown variant `{value}`")]
    UnknownVariant { value: String, detail: String },

    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("malformed JSON: {0}")]
    Syntax(String),
}

impl DecodeError {
    fn from_data_error(message: String) -> Self {
        if let Some(name) = backticked_after(&message, "missing field `") {
            return DecodeError::MissingField(name);
        }
        if let Some(value) = backticked_after(&message, "unknown variant `") {
            return DecodeError::UnknownVariant {
                value,
                detail: message,
            };
        }
        DecodeError::InvalidValue(message)
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => DecodeError::from_data_error(err.to_string()),
            Category::Syntax | Category::Eof | Category::Io => DecodeError::Syntax(err.to_string()),
        }
    }
}

fn backticked_after(message: &str, prefix: &str) -> Option<String> {
    let rest = message.strip_prefix(prefix)?;
    let end = rest.find('`')?;
    Some(rest[..end].to_string())
}

/// Decodes a typed value from a parsed JSON tree.
pub fn decode_value<T: DeserializeOwned>(value: Value) -> Result<T, DecodeError> {
    serde_json::from_value(value).map_err(DecodeError::from)
}

/// Decodes a typed value straight from response bytes.
pub fn decode_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
    serde_json::from_slice(bytes).map_err(DecodeError::from)
}

/// Encodes a typed value into a JSON tree.
pub fn encode_value<T: Serialize + ?Sized>(value: &T) -> Result<Value, serde_json::Error> {
    serde_json::to_value(value)
}
