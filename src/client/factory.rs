use super::config::parse_service_url;
use crate::auth::{authenticator_from_env, AuthProvider};
use crate::client::{RequestExecutor, ServiceConfig, WatsonClient, WatsonClientImpl};
use crate::errors::{ConfigurationError, WatsonResult};
use crate::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;

pub struct WatsonClientBuilder {
    config: Option<ServiceConfig>,
    transport: Option<Arc<dyn HttpTransport>>,
    authenticator: Option<Arc<dyn AuthProvider>>,
}

impl WatsonClientBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            transport: None,
            authenticator: None,
        }
    }

    /// Loads both the configuration and the authenticator from
    /// `<PREFIX>_*` environment variables.
    pub fn from_env(prefix: &str) -> WatsonResult<Self> {
        Ok(Self::new()
            .with_config(ServiceConfig::from_env(prefix)?)
            .with_authenticator(authenticator_from_env(prefix)?))
    }

    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_service_url(mut self, service_url: &str) -> WatsonResult<Self> {
        let url = parse_service_url(service_url)?;
        self.config = Some(self.config.take().unwrap_or_default().with_service_url(url));
        Ok(self)
    }

    pub fn with_authenticator(mut self, authenticator: Arc<dyn AuthProvider>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> WatsonResult<Arc<dyn WatsonClient>> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let authenticator = self.authenticator.ok_or_else(|| {
            ConfigurationError::MissingAuthenticator(
                "an authenticator must be provided".to_string(),
            )
        })?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(&config)?),
        };

        let executor = Arc::new(RequestExecutor::new(config, transport, authenticator));
        Ok(Arc::new(WatsonClientImpl::new(executor)))
    }
}

impl Default for WatsonClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
