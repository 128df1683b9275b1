use crate::client::RequestExecutor;
use crate::errors::{ErrorMetadata, SerializationError, ServiceError, WatsonResult};
use crate::services::alchemy_language::{AlchemySource, DocumentSentiment, KeywordOptions, Keywords};
use crate::services::require_non_empty;
use crate::transport::{Endpoint, ResponseParser, ServiceInfo};
use crate::types::codec;
use async_trait::async_trait;
use http::{HeaderMap, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

const SERVICE: ServiceInfo = ServiceInfo::new("alchemy_language", "V1");

#[async_trait]
pub trait AlchemyLanguageService: Send + Sync {
    async fn get_sentiment(&self, source: &AlchemySource) -> WatsonResult<DocumentSentiment>;

    async fn get_keywords(
        &self,
        source: &AlchemySource,
        options: KeywordOptions,
    ) -> WatsonResult<Keywords>;
}

pub struct AlchemyLanguageServiceImpl {
    executor: Arc<RequestExecutor>,
    headers: HeaderMap,
}

impl AlchemyLanguageServiceImpl {
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

    fn endpoint(
        &self,
        source: &AlchemySource,
        call: &str,
        operation: &'static str,
        extra: &[(&str, String)],
    ) -> WatsonResult<Endpoint> {
        let (field, value) = source.form_field();
        require_non_empty(field, value)?;

        let mut form = url::form_urlencoded::Serializer::new(String::new());
        form.append_pair(field, value);
        for (name, value) in extra {
            form.append_pair(name, value);
        }

        Ok(SERVICE
            .endpoint(Method::POST, format!("{}{}", source.path_prefix(), call).as_str(), operation)
            .query("outputMode", "json")
            .headers(&self.headers)
            .binary(form.finish(), mime::APPLICATION_WWW_FORM_URLENCODED.as_ref()))
    }

    async fn call<T: DeserializeOwned>(&self, endpoint: Endpoint) -> WatsonResult<T> {
        let response = self.executor.execute_raw(endpoint).await?;
        let body: Value = ResponseParser::parse_json(&response.body)?;

        if body.get("status").and_then(Value::as_str) == Some("ERROR") {
            let message = body
                .get("statusInfo")
                .and_then(Value::as_str)
                .filter(|info| !info.trim().is_empty())
                .unwrap_or("Unknown Error")
                .to_string();
            return Err(ServiceError {
                status_code: response.status.as_u16(),
                message,
                recovery_suggestion: None,
                metadata: ErrorMetadata::Json(body),
                headers: response.headers,
            }
            .into());
        }

        codec::decode_value(body).map_err(|e| SerializationError::Decode(e).into())
    }
}

#[async_trait]
impl AlchemyLanguageService for AlchemyLanguageServiceImpl {
    async fn get_sentiment(&self, source: &AlchemySource) -> WatsonResult<DocumentSentiment> {
        let endpoint = self.endpoint(source, "GetTextSentiment", "getSentiment", &[])?;
        self.call(endpoint).await
    }

    async fn get_keywords(
        &self,
        source: &AlchemySource,
        options: KeywordOptions,
    ) -> WatsonResult<Keywords> {
        let mut extra = vec![("keywordExtractMode", "strict".to_string())];
        if let Some(max_retrieve) = options.max_retrieve {
            extra.push(("maxRetrieve", max_retrieve.to_string()));
        }
        if options.sentiment {
            extra.push(("sentiment", "1".to_string()));
        }

        let endpoint = self.endpoint(source, "GetRankedKeywords", "getKeywords", &extra)?;
        self.call(endpoint).await
    }
}
