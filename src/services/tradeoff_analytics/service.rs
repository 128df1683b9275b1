use crate::client::RequestExecutor;
use crate::errors::{ValidationError, WatsonResult};
use crate::services::tradeoff_analytics::{Dilemma, DilemmaOptions, Problem};
use crate::transport::ServiceInfo;
use async_trait::async_trait;
use http::{HeaderMap, Method};
use std::sync::Arc;

const SERVICE: ServiceInfo = ServiceInfo::new("tradeoff_analytics", "V1");

#[async_trait]
pub trait TradeoffAnalyticsService: Send + Sync {
    /// Resolves a decision problem into its Pareto front.
    async fn dilemmas(&self, problem: &Problem, options: DilemmaOptions) -> WatsonResult<Dilemma>;
}

pub struct TradeoffAnalyticsServiceImpl {
    executor: Arc<RequestExecutor>,
    headers: HeaderMap,
}

impl TradeoffAnalyticsServiceImpl {
    pub fn new(executor: Arc<RequestExecutor>) -> Self {
        Self {
            executor,
            headers: HeaderMap::new(),
        }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }
}

#[async_trait]
impl TradeoffAnalyticsService for TradeoffAnalyticsServiceImpl {
    async fn dilemmas(&self, problem: &Problem, options: DilemmaOptions) -> WatsonResult<Dilemma> {
        if problem.columns.is_empty() {
            return Err(ValidationError::MissingRequiredParameter("columns".to_string()).into());
        }
        if problem.options.is_empty() {
            return Err(ValidationError::MissingRequiredParameter("options".to_string()).into());
        }

        let endpoint = SERVICE
            .endpoint(Method::POST, "/v1/dilemmas", "dilemmas")
            .query_opt("generate_visualization", options.generate_visualization)
            .query_opt("find_preferable_options", options.find_preferable_options)
            .headers(&self.headers)
            .json_body(problem)?;

        self.executor.execute(endpoint).await
    }
}
