mod api_key;
mod basic;
mod bearer;
mod env;

pub use api_key::ApiKeyQueryAuthenticator;
pub use basic::BasicAuthenticator;
pub use bearer::BearerTokenAuthenticator;
pub use env::authenticator_from_env;

use crate::errors::WatsonResult;
use crate::transport::HttpRequest;
use async_trait::async_trait;

/// Decorates a drafted request with credentials.
///
/// Implementations are shared by every in-flight call of a client and must be
/// safe for concurrent use.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Adds credentials to the request or fails with an authentication error.
    async fn authenticate(&self, request: &mut HttpRequest) -> WatsonResult<()>;

    /// Checks if the authentication credentials are usable
    fn is_valid(&self) -> bool;
}

/// Sends requests without credentials, e.g. behind an authenticating proxy.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAuthAuthenticator;

#[async_trait]
impl AuthProvider for NoAuthAuthenticator {
    async fn authenticate(&self, _request: &mut HttpRequest) -> WatsonResult<()> {
        Ok(())
    }

    fn is_valid(&self) -> bool {
        true
    }
}
