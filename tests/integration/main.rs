//! End-to-end tests: the real reqwest transport against a WireMock server.

mod assistant_flow;
mod delivery_matrix;
mod downloads;
mod uploads;

use integrations_watson::prelude::*;
use std::sync::Arc;
use wiremock::MockServer;

pub const VERSION: &str = "2019-02-28";

/// `Basic` credentials for `apikey:secret`.
pub const BASIC_HEADER: &str = "Basic YXBpa2V5OnNlY3JldA==";

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Base URL of a service instance hosted by `server`.
pub fn instance_url(server: &MockServer) -> String {
    format!("{}/instances/abc", server.uri())
}

pub fn client_for(service_url: &str) -> Arc<dyn WatsonClient> {
    let config = ServiceConfig::new(service_url)
        .expect("valid service url")
        .with_version(VERSION);

    WatsonClientBuilder::new()
        .with_config(config)
        .with_authenticator(Arc::new(BasicAuthenticator::new("apikey", "secret")))
        .build()
        .expect("client builds")
}
