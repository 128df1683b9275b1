use crate::auth::AuthProvider;
use crate::errors::{AuthenticationError, WatsonResult};
use crate::transport::HttpRequest;
use async_trait::async_trait;
use http::header::AUTHORIZATION;
use http::HeaderValue;
use secrecy::{ExposeSecret, SecretString};
use std::sync::RwLock;

/// Static bearer token supplied and refreshed by the caller.
pub struct BearerTokenAuthenticator {
    token: RwLock<SecretString>,
}

impl BearerTokenAuthenticator {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(SecretString::new(token.into())),
        }
    }

    /// Replaces the token used by subsequent calls.
    pub fn set_token(&self, token: impl Into<String>) -> WatsonResult<()> {
        let mut guard = self
            .token
            .write()
            .map_err(|_| AuthenticationError::DecorationFailed("token lock poisoned".to_string()))?;
        *guard = SecretString::new(token.into());
        Ok(())
    }

    fn header_value(&self) -> WatsonResult<HeaderValue> {
        let guard = self
            .token
            .read()
            .map_err(|_| AuthenticationError::DecorationFailed("token lock poisoned".to_string()))?;
        let token = guard.expose_secret();
        if token.is_empty() {
            return Err(AuthenticationError::MissingCredentials("bearer token is empty".to_string()).into());
        }
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| AuthenticationError::InvalidCredentials("bearer token is not a valid header value".to_string()))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl std::fmt::Debug for BearerTokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerTokenAuthenticator")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[async_trait]
impl AuthProvider for BearerTokenAuthenticator {
    async fn authenticate(&self, request: &mut HttpRequest) -> WatsonResult<()> {
        let value = self.header_value()?;
        request.headers.insert(AUTHORIZATION, value);
        Ok(())
    }

    fn is_valid(&self) -> bool {
        self.token
            .read()
            .map(|t| !t.expose_secret().is_empty())
            .unwrap_or(false)
    }
}
