use crate::errors::{ConfigurationError, ValidationError, WatsonResult};
use http::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Per-service connection settings, read-only once a client is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the service instance. Calls fail with `NoEndpoint` while unset.
    #[serde(default)]
    pub service_url: Option<Url>,

    /// Sent as the leading `version=` query parameter on every call.
    #[serde(default)]
    pub version: Option<String>,

    /// Handed to the transport only.
    #[serde(default, with = "optional_secs")]
    pub timeout: Option<Duration>,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Asks the service not to use request data for training.
    #[serde(default)]
    pub learning_opt_out: bool,

    #[serde(skip)]
    pub default_headers: HeaderMap,
}

impl ServiceConfig {
    /// Creates a configuration for the service instance at `service_url`.
    pub fn new(service_url: &str) -> WatsonResult<Self> {
        Ok(Self::default().with_service_url(parse_service_url(service_url)?))
    }

    /// Creates a configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `<PREFIX>_URL` (optional; calls fail with `NoEndpoint` without it)
    /// - `<PREFIX>_VERSION` (optional)
    /// - `<PREFIX>_TIMEOUT_SECS` (optional)
    /// - `<PREFIX>_LEARNING_OPT_OUT` (optional, `true`/`false`)
    pub fn from_env(prefix: &str) -> WatsonResult<Self> {
        Self::from_lookup(prefix, |name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(prefix: &str, lookup: F) -> WatsonResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| lookup(&format!("{}_{}", prefix, suffix)).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(url) = var("URL") {
            config.service_url = Some(parse_service_url(&url)?);
        }

        config.version = var("VERSION");

        if let Some(secs) = var("TIMEOUT_SECS") {
            let secs = secs.parse::<u64>().map_err(|e| {
                ConfigurationError::InvalidTimeout(format!("{}_TIMEOUT_SECS: {}", prefix, e))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        if let Some(flag) = var("LEARNING_OPT_OUT") {
            config.learning_opt_out = flag.eq_ignore_ascii_case("true") || flag == "1";
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> WatsonResult<()> {
        if let Some(url) = &self.service_url {
            if url.cannot_be_a_base() {
                return Err(ConfigurationError::InvalidServiceUrl(format!(
                    "{} cannot be used as a base URL",
                    url
                ))
                .into());
            }
            if url.query().is_some() || url.fragment().is_some() {
                return Err(ConfigurationError::InvalidServiceUrl(format!(
                    "{} must not carry a query or fragment",
                    url
                ))
                .into());
            }
        }

        if self.timeout == Some(Duration::ZERO) {
            return Err(ConfigurationError::InvalidTimeout(
                "Timeout must be greater than 0".to_string(),
            )
            .into());
        }

        Ok(())
    }

    pub fn with_service_url(mut self, service_url: Url) -> Self {
        self.service_url = Some(service_url);
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_learning_opt_out(mut self, opt_out: bool) -> Self {
        self.learning_opt_out = opt_out;
        self
    }

    pub fn with_default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = headers;
        self
    }

    /// Adds one header sent on every call.
    pub fn with_default_header(mut self, name: &str, value: &str) -> WatsonResult<Self> {
        let header_name = HeaderName::from_str(name)
            .map_err(|_| ValidationError::InvalidHeader(name.to_string()))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|_| ValidationError::InvalidHeader(name.to_string()))?;
        self.default_headers.insert(header_name, header_value);
        Ok(self)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_url: None,
            version: None,
            timeout: None,
            user_agent: default_user_agent(),
            learning_opt_out: false,
            default_headers: HeaderMap::new(),
        }
    }
}

pub(super) fn parse_service_url(value: &str) -> WatsonResult<Url> {
    Url::parse(value)
        .map_err(|e| ConfigurationError::InvalidServiceUrl(format!("{}: {}", value, e)).into())
}

fn default_user_agent() -> String {
    format!("integrations-watson/{}", env!("CARGO_PKG_VERSION"))
}

mod optional_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(duration) => serializer.serialize_some(&duration.as_secs_f64()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Duration>, D::Error> {
        let secs = Option::<f64>::deserialize(deserializer)?;
        match secs {
            Some(secs) if secs.is_finite() && secs >= 0.0 => Ok(Some(Duration::from_secs_f64(secs))),
            Some(secs) => Err(serde::de::Error::custom(format!("invalid timeout: {}", secs))),
            None => Ok(None),
        }
    }
}
