use crate::errors::categories::{
    AuthenticationError, ConfigurationError, SerializationError, TransportError, ValidationError,
};
use bytes::Bytes;
use http::HeaderMap;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub type WatsonResult<T> = Result<T, WatsonError>;

#[derive(Error, Debug)]
pub enum WatsonError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("URL encoding error: {0}")]
    UrlEncoding(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    #[error("No service URL configured")]
    NoEndpoint,

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("HTTP error: {0}")]
    Http(ServiceError),

    #[error("File error at {}: {message}", path.display())]
    File { path: PathBuf, message: String },
}

impl WatsonError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            WatsonError::Http(err) => Some(err.status_code),
            _ => None,
        }
    }

    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            WatsonError::Http(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_http_error(&self) -> bool {
        matches!(self, WatsonError::Http(_))
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self, WatsonError::Transport(_))
    }

    pub fn is_decode_error(&self) -> bool {
        matches!(self, WatsonError::Serialization(err) if err.is_decode())
    }

    pub(crate) fn file(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        WatsonError::File {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

impl From<ServiceError> for WatsonError {
    fn from(err: ServiceError) -> Self {
        WatsonError::Http(err)
    }
}

impl From<reqwest::Error> for WatsonError {
    fn from(err: reqwest::Error) -> Self {
        WatsonError::Transport(err.into())
    }
}

impl From<url::ParseError> for WatsonError {
    fn from(err: url::ParseError) -> Self {
        WatsonError::UrlEncoding(err.to_string())
    }
}

/// Diagnostic payload attached to a [`ServiceError`].
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorMetadata {
    /// The error body parsed as JSON.
    Json(serde_json::Value),
    /// The error body did not parse; kept verbatim.
    Raw(Bytes),
    /// The response carried no body.
    Empty,
}

impl ErrorMetadata {
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            ErrorMetadata::Json(value) => Some(value),
            _ => None,
        }
    }
}

/// A response was received but its status was outside `[200, 300)`.
///
/// Built only by [`ErrorMapper`](crate::errors::ErrorMapper). The message is
/// never empty: it falls back to the status reason phrase.
#[derive(Debug, Clone)]
pub struct ServiceError {
    pub status_code: u16,
    pub message: String,
    pub recovery_suggestion: Option<String>,
    pub metadata: ErrorMetadata,
    pub headers: HeaderMap,
}

impl ServiceError {
    /// Value of the `X-Global-Transaction-Id` header, if the service sent one.
    pub fn transaction_id(&self) -> Option<&str> {
        self.headers
            .get("x-global-transaction-id")
            .and_then(|v| v.to_str().ok())
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.status_code, self.message)?;
        if let Some(suggestion) = &self.recovery_suggestion {
            write!(f, " ({})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ServiceError {}
