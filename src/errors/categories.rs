use crate::types::DecodeError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Invalid service URL: {0}")]
    InvalidServiceUrl(String),

    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),

    #[error("Missing authenticator: {0}")]
    MissingAuthenticator(String),

    #[error("Missing required configuration: {0}")]
    MissingConfiguration(String),

    #[error("Unsupported authentication type: {0}")]
    UnsupportedAuthType(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("Failed to install log subscriber: {0}")]
    Logging(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationError {
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Failed to decorate request: {0}")]
    DecorationFailed(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required parameter: {0}")]
    MissingRequiredParameter(String),

    #[error("Invalid parameter: {parameter} - {reason}")]
    InvalidParameter { parameter: String, reason: String },

    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

/// Payload codec failures, split by the direction the payload was travelling.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SerializationError {
    #[error("failed to encode request body: {0}")]
    Encode(String),

    #[error("failed to decode response body: {0}")]
    Decode(#[from] DecodeError),
}

impl SerializationError {
    pub fn is_decode(&self) -> bool {
        matches!(self, SerializationError::Decode(_))
    }
}

/// Failures where no HTTP response was obtained at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("TLS error: {0}")]
    Tls(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Response body could not be read: {0}")]
    Body(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::ConnectionFailed(err.to_string())
        } else if err.is_body() || err.is_decode() {
            TransportError::Body(err.to_string())
        } else {
            TransportError::RequestFailed(err.to_string())
        }
    }
}
