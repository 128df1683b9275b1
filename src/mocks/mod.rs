//! Test doubles for the transport and authentication collaborators.
//!
//! Services are exercised against these without any network access.

mod mock_auth;
mod mock_transport;

pub use mock_auth::MockAuthProvider;
pub use mock_transport::{MockHttpTransport, RecordedRequest};

use crate::client::{RequestExecutor, ServiceConfig};
use std::sync::Arc;

pub const MOCK_SERVICE_URL: &str = "https://api.us-south.watson.test/instances/1";

/// Executor wired to the given mock transport with a passing authenticator.
pub fn mock_executor(transport: &MockHttpTransport, version: Option<&str>) -> Arc<RequestExecutor> {
    let mut config = ServiceConfig::new(MOCK_SERVICE_URL).unwrap();
    if let Some(version) = version {
        config = config.with_version(version);
    }
    Arc::new(RequestExecutor::new(
        config,
        Arc::new(transport.clone()),
        Arc::new(MockAuthProvider::new()),
    ))
}
