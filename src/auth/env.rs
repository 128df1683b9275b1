use crate::auth::{AuthProvider, BasicAuthenticator, BearerTokenAuthenticator, NoAuthAuthenticator};
use crate::errors::{ConfigurationError, WatsonResult};
use std::sync::Arc;

/// Builds an authenticator from `<PREFIX>_AUTH_TYPE` and its companion
/// variables (`_USERNAME`, `_PASSWORD`, `_BEARER_TOKEN`).
///
/// An unset auth type defaults to `basic` when a username is present.
pub fn authenticator_from_env(prefix: &str) -> WatsonResult<Arc<dyn AuthProvider>> {
    from_lookup(prefix, |name| std::env::var(name).ok())
}

pub(crate) fn from_lookup<F>(prefix: &str, lookup: F) -> WatsonResult<Arc<dyn AuthProvider>>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |suffix: &str| {
        lookup(&format!("{}_{}", prefix, suffix)).filter(|value| !value.is_empty())
    };
    let require = |suffix: &str| {
        var(suffix).ok_or_else(|| {
            ConfigurationError::MissingConfiguration(format!("{}_{}", prefix, suffix))
        })
    };

    let auth_type = match var("AUTH_TYPE") {
        Some(auth_type) => auth_type,
        None if var("USERNAME").is_some() => "basic".to_string(),
        None if var("BEARER_TOKEN").is_some() => "bearerToken".to_string(),
        None => {
            return Err(ConfigurationError::MissingAuthenticator(format!("{}_AUTH_TYPE", prefix)).into())
        }
    };

    let provider: Arc<dyn AuthProvider> = match auth_type.to_ascii_lowercase().as_str() {
        "basic" => Arc::new(BasicAuthenticator::new(require("USERNAME")?, require("PASSWORD")?)),
        "bearertoken" => Arc::new(BearerTokenAuthenticator::new(require("BEARER_TOKEN")?)),
        "noauth" => Arc::new(NoAuthAuthenticator),
        _ => return Err(ConfigurationError::UnsupportedAuthType(auth_type).into()),
    };

    Ok(provider)
}
