mod client_impl;
mod config;
mod executor;
mod factory;

pub use client_impl::WatsonClientImpl;
pub use config::ServiceConfig;
pub use executor::RequestExecutor;
pub use factory::WatsonClientBuilder;

use crate::services::{
    alchemy_language::AlchemyLanguageService, assistant::AssistantService,
    dialog::DialogService, discovery::DiscoveryService,
    natural_language_classifier::NaturalLanguageClassifierService,
    personality_insights::PersonalityInsightsService,
    retrieve_and_rank::RetrieveAndRankService, text_to_speech::TextToSpeechService,
    tradeoff_analytics::TradeoffAnalyticsService,
};

/// Entry point to the service façades.
///
/// A client is bound to one service instance URL and one authenticator;
/// every façade shares its executor. Use the façade matching the instance.
pub trait WatsonClient: Send + Sync {
    fn config(&self) -> &ServiceConfig;
    fn assistant(&self) -> &dyn AssistantService;
    fn discovery(&self) -> &dyn DiscoveryService;
    fn dialog(&self) -> &dyn DialogService;
    fn natural_language_classifier(&self) -> &dyn NaturalLanguageClassifierService;
    fn personality_insights(&self) -> &dyn PersonalityInsightsService;
    fn retrieve_and_rank(&self) -> &dyn RetrieveAndRankService;
    fn text_to_speech(&self) -> &dyn TextToSpeechService;
    fn tradeoff_analytics(&self) -> &dyn TradeoffAnalyticsService;
    fn alchemy_language(&self) -> &dyn AlchemyLanguageService;
}
