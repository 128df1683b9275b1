use crate::client::RequestExecutor;
use crate::errors::{ValidationError, WatsonResult};
use crate::services::personality_insights::{Profile, ProfileOptions};
use crate::transport::{Endpoint, ServiceInfo};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method};
use std::sync::Arc;

const SERVICE: ServiceInfo = ServiceInfo::new("personality_insights", "V3");

#[async_trait]
pub trait PersonalityInsightsService: Send + Sync {
    async fn profile(&self, options: ProfileOptions) -> WatsonResult<Profile>;

    /// The same analysis rendered as CSV.
    async fn profile_as_csv(&self, options: ProfileOptions) -> WatsonResult<Bytes>;
}

pub struct PersonalityInsightsServiceImpl {
    executor: Arc<RequestExecutor>,
    headers: HeaderMap,
}

impl PersonalityInsightsServiceImpl {
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

    fn endpoint(&self, options: ProfileOptions, operation: &'static str) -> WatsonResult<Endpoint> {
        if options.content.is_empty() {
            return Err(ValidationError::MissingRequiredParameter("content".to_string()).into());
        }

        Ok(SERVICE
            .endpoint(Method::POST, "/v3/profile", operation)
            .query_opt("raw_scores", options.raw_scores)
            .query_opt("csv_headers", options.csv_headers)
            .query_opt("consumption_preferences", options.consumption_preferences)
            .headers(&self.headers)
            .header_opt("Content-Language", options.content_language.as_deref())
            .header_opt("Accept-Language", options.accept_language.as_deref())
            .binary(options.content, options.content_type.media_type()))
    }
}

#[async_trait]
impl PersonalityInsightsService for PersonalityInsightsServiceImpl {
    async fn profile(&self, options: ProfileOptions) -> WatsonResult<Profile> {
        let endpoint = self.endpoint(options, "profile")?;
        self.executor.execute(endpoint).await
    }

    async fn profile_as_csv(&self, options: ProfileOptions) -> WatsonResult<Bytes> {
        let endpoint = self.endpoint(options, "profileAsCsv")?.accept(mime::TEXT_CSV.as_ref());
        self.executor.execute_bytes(endpoint).await
    }
}
