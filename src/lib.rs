//! Typed async bindings for the IBM Watson REST services.
//!
//! Every call goes through one pipeline: a service façade describes the
//! endpoint, the request builder resolves it against the [`ServiceConfig`],
//! the authenticator decorates it, the transport sends it, and the response
//! decoder turns the result into exactly one `WatsonResult<T>`.
//!
//! ```no_run
//! use integrations_watson::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn run() -> WatsonResult<()> {
//! let config = ServiceConfig::new("https://api.us-south.assistant.watson.cloud.ibm.com/instances/abc")?
//!     .with_version("2019-02-28");
//! let client = WatsonClientBuilder::new()
//!     .with_config(config)
//!     .with_authenticator(Arc::new(BearerTokenAuthenticator::new("token")))
//!     .build()?;
//!
//! let session = client.assistant().create_session("assistant-id").await?;
//! let reply = client
//!     .assistant()
//!     .message("assistant-id", &session.session_id, Some(MessageRequest::text("hello")))
//!     .await?;
//! # let _ = reply;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod errors;
pub mod observability;
pub mod services;
pub mod transport;
pub mod types;

#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mocks;

pub use auth::{
    authenticator_from_env, ApiKeyQueryAuthenticator, AuthProvider, BasicAuthenticator,
    BearerTokenAuthenticator, NoAuthAuthenticator,
};
pub use client::{RequestExecutor, ServiceConfig, WatsonClient, WatsonClientBuilder};
pub use errors::{ServiceError, WatsonError, WatsonResult};
pub use transport::{HttpTransport, ReqwestTransport};
pub use types::{OptionValue, Range};

pub mod prelude {
    pub use crate::auth::{
        ApiKeyQueryAuthenticator, AuthProvider, BasicAuthenticator, BearerTokenAuthenticator,
        NoAuthAuthenticator,
    };
    pub use crate::client::{ServiceConfig, WatsonClient, WatsonClientBuilder};
    pub use crate::errors::{ServiceError, WatsonError, WatsonResult};
    pub use crate::services::alchemy_language::AlchemyLanguageService;
    pub use crate::services::assistant::{AssistantService, MessageRequest};
    pub use crate::services::dialog::DialogService;
    pub use crate::services::discovery::DiscoveryService;
    pub use crate::services::natural_language_classifier::NaturalLanguageClassifierService;
    pub use crate::services::personality_insights::PersonalityInsightsService;
    pub use crate::services::retrieve_and_rank::RetrieveAndRankService;
    pub use crate::services::text_to_speech::TextToSpeechService;
    pub use crate::services::tradeoff_analytics::TradeoffAnalyticsService;
}
