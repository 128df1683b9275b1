//! Mock authentication provider for testing

use crate::auth::AuthProvider;
use crate::errors::{AuthenticationError, WatsonResult};
use crate::transport::HttpRequest;
use async_trait::async_trait;
use http::header::AUTHORIZATION;
use http::HeaderValue;

#[derive(Debug, Clone, Default)]
pub struct MockAuthProvider {
    error: Option<String>,
}

impl MockAuthProvider {
    /// Adds `Authorization: Bearer mock-token` to every request.
    pub fn new() -> Self {
        Self { error: None }
    }

    /// Fails every request with `InvalidCredentials(message)`.
    pub fn with_error(mut self, message: &str) -> Self {
        self.error = Some(message.to_string());
        self
    }
}

#[async_trait]
impl AuthProvider for MockAuthProvider {
    async fn authenticate(&self, request: &mut HttpRequest) -> WatsonResult<()> {
        if let Some(message) = &self.error {
            return Err(AuthenticationError::InvalidCredentials(message.clone()).into());
        }
        request
            .headers
            .insert(AUTHORIZATION, HeaderValue::from_static("Bearer mock-token"));
        Ok(())
    }

    fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}
