use crate::auth::AuthProvider;
use crate::errors::{AuthenticationError, WatsonResult};
use crate::transport::HttpRequest;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use http::header::AUTHORIZATION;
use http::HeaderValue;
use secrecy::{ExposeSecret, SecretString};

/// HTTP basic authentication with a service username and password.
pub struct BasicAuthenticator {
    username: String,
    password: SecretString,
}

impl BasicAuthenticator {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::new(password.into()),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    fn header_value(&self) -> WatsonResult<HeaderValue> {
        let credentials = format!("{}:{}", self.username, self.password.expose_secret());
        let mut value = HeaderValue::from_str(&format!("Basic {}", STANDARD.encode(credentials)))
            .map_err(|e| AuthenticationError::DecorationFailed(e.to_string()))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl std::fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthenticator")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[async_trait]
impl AuthProvider for BasicAuthenticator {
    async fn authenticate(&self, request: &mut HttpRequest) -> WatsonResult<()> {
        if !self.is_valid() {
            return Err(AuthenticationError::MissingCredentials(
                "username and password are required for basic authentication".to_string(),
            )
            .into());
        }
        request.headers.insert(AUTHORIZATION, self.header_value()?);
        Ok(())
    }

    fn is_valid(&self) -> bool {
        !self.username.is_empty()
            && !self.password.expose_secret().is_empty()
            && !self.username.contains(':')
    }
}
