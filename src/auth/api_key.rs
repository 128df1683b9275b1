use crate::auth::AuthProvider;
use crate::errors::{AuthenticationError, WatsonResult};
use crate::transport::HttpRequest;
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

const API_KEY_PARAMETER: &str = "apikey";

/// Passes an API key as the `apikey` query parameter (AlchemyAPI style).
pub struct ApiKeyQueryAuthenticator {
    api_key: SecretString,
}

impl ApiKeyQueryAuthenticator {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
        }
    }
}

impl std::fmt::Debug for ApiKeyQueryAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyQueryAuthenticator")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[async_trait]
impl AuthProvider for ApiKeyQueryAuthenticator {
    async fn authenticate(&self, request: &mut HttpRequest) -> WatsonResult<()> {
        if !self.is_valid() {
            return Err(AuthenticationError::MissingCredentials("API key is empty".to_string()).into());
        }
        request
            .url
            .query_pairs_mut()
            .append_pair(API_KEY_PARAMETER, self.api_key.expose_secret());
        Ok(())
    }

    fn is_valid(&self) -> bool {
        !self.api_key.expose_secret().is_empty()
    }
}
