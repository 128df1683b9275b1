use crate::client::{RequestExecutor, ServiceConfig, WatsonClient};
use crate::services::{
    alchemy_language::{AlchemyLanguageService, AlchemyLanguageServiceImpl},
    assistant::{AssistantService, AssistantServiceImpl},
    dialog::{DialogService, DialogServiceImpl},
    discovery::{DiscoveryService, DiscoveryServiceImpl},
    natural_language_classifier::{
        NaturalLanguageClassifierService, NaturalLanguageClassifierServiceImpl,
    },
    personality_insights::{PersonalityInsightsService, PersonalityInsightsServiceImpl},
    retrieve_and_rank::{RetrieveAndRankService, RetrieveAndRankServiceImpl},
    text_to_speech::{TextToSpeechService, TextToSpeechServiceImpl},
    tradeoff_analytics::{TradeoffAnalyticsService, TradeoffAnalyticsServiceImpl},
};
use std::sync::Arc;

pub struct WatsonClientImpl {
    executor: Arc<RequestExecutor>,

    assistant_service: AssistantServiceImpl,
    discovery_service: DiscoveryServiceImpl,
    dialog_service: DialogServiceImpl,
    classifier_service: NaturalLanguageClassifierServiceImpl,
    personality_service: PersonalityInsightsServiceImpl,
    retrieve_and_rank_service: RetrieveAndRankServiceImpl,
    text_to_speech_service: TextToSpeechServiceImpl,
    tradeoff_service: TradeoffAnalyticsServiceImpl,
    alchemy_service: AlchemyLanguageServiceImpl,
}

impl WatsonClientImpl {
    pub fn new(executor: Arc<RequestExecutor>) -> Self {
        Self {
            assistant_service: AssistantServiceImpl::new(executor.clone()),
            discovery_service: DiscoveryServiceImpl::new(executor.clone()),
            dialog_service: DialogServiceImpl::new(executor.clone()),
            classifier_service: NaturalLanguageClassifierServiceImpl::new(executor.clone()),
            personality_service: PersonalityInsightsServiceImpl::new(executor.clone()),
            retrieve_and_rank_service: RetrieveAndRankServiceImpl::new(executor.clone()),
            text_to_speech_service: TextToSpeechServiceImpl::new(executor.clone()),
            tradeoff_service: TradeoffAnalyticsServiceImpl::new(executor.clone()),
            alchemy_service: AlchemyLanguageServiceImpl::new(executor.clone()),
            executor,
        }
    }

    pub fn executor(&self) -> &Arc<RequestExecutor> {
        &self.executor
    }
}

impl WatsonClient for WatsonClientImpl {
    fn config(&self) -> &ServiceConfig {
        self.executor.config()
    }

    fn assistant(&self) -> &dyn AssistantService {
        &self.assistant_service
    }

    fn discovery(&self) -> &dyn DiscoveryService {
        &self.discovery_service
    }

    fn dialog(&self) -> &dyn DialogService {
        &self.dialog_service
    }

    fn natural_language_classifier(&self) -> &dyn NaturalLanguageClassifierService {
        &self.classifier_service
    }

    fn personality_insights(&self) -> &dyn PersonalityInsightsService {
        &self.personality_service
    }

    fn retrieve_and_rank(&self) -> &dyn RetrieveAndRankService {
        &self.retrieve_and_rank_service
    }

    fn text_to_speech(&self) -> &dyn TextToSpeechService {
        &self.text_to_speech_service
    }

    fn tradeoff_analytics(&self) -> &dyn TradeoffAnalyticsService {
        &self.tradeoff_service
    }

    fn alchemy_language(&self) -> &dyn AlchemyLanguageService {
        &self.alchemy_service
    }
}
