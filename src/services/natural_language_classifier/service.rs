use crate::client::RequestExecutor;
use crate::errors::WatsonResult;
use crate::services::natural_language_classifier::{
    Classification, Classifier, ClassifierList, CreateClassifierRequest,
};
use crate::services::require_non_empty;
use crate::transport::{MultipartForm, ServiceInfo};
use async_trait::async_trait;
use http::{HeaderMap, Method};
use serde::Serialize;
use std::sync::Arc;

const SERVICE: ServiceInfo = ServiceInfo::new("natural_language_classifier", "V1");

#[derive(Serialize)]
struct ClassifyInput<'a> {
    text: &'a str,
}

#[async_trait]
pub trait NaturalLanguageClassifierService: Send + Sync {
    async fn list_classifiers(&self) -> WatsonResult<ClassifierList>;

    async fn get_classifier(&self, classifier_id: &str) -> WatsonResult<Classifier>;

    /// Starts training a new classifier.
    async fn create_classifier(&self, request: CreateClassifierRequest) -> WatsonResult<Classifier>;

    async fn classify(&self, classifier_id: &str, text: &str) -> WatsonResult<Classification>;

    async fn delete_classifier(&self, classifier_id: &str) -> WatsonResult<()>;
}

pub struct NaturalLanguageClassifierServiceImpl {
    executor: Arc<RequestExecutor>,
    headers: HeaderMap,
}

impl NaturalLanguageClassifierServiceImpl {
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
impl NaturalLanguageClassifierService for NaturalLanguageClassifierServiceImpl {
    async fn list_classifiers(&self) -> WatsonResult<ClassifierList> {
        let endpoint = SERVICE
            .endpoint(Method::GET, "/v1/classifiers", "listClassifiers")
            .headers(&self.headers);

        self.executor.execute(endpoint).await
    }

    async fn get_classifier(&self, classifier_id: &str) -> WatsonResult<Classifier> {
        require_non_empty("classifier_id", classifier_id)?;

        let endpoint = SERVICE
            .endpoint(Method::GET, "/v1/classifiers/{classifier_id}", "getClassifier")
            .path_param("classifier_id", classifier_id)
            .headers(&self.headers);

        self.executor.execute(endpoint).await
    }

    async fn create_classifier(&self, request: CreateClassifierRequest) -> WatsonResult<Classifier> {
        require_non_empty("language", &request.metadata.language)?;

        let form = MultipartForm::new()
            .json("training_metadata", &request.metadata)?
            .file("training_data", &request.training_data, "text/csv");

        let endpoint = SERVICE
            .endpoint(Method::POST, "/v1/classifiers", "createClassifier")
            .headers(&self.headers)
            .multipart(form);

        self.executor.execute(endpoint).await
    }

    async fn classify(&self, classifier_id: &str, text: &str) -> WatsonResult<Classification> {
        require_non_empty("classifier_id", classifier_id)?;
        require_non_empty("text", text)?;

        let endpoint = SERVICE
            .endpoint(Method::POST, "/v1/classifiers/{classifier_id}/classify", "classify")
            .path_param("classifier_id", classifier_id)
            .headers(&self.headers)
            .json_body(&ClassifyInput { text })?;

        self.executor.execute(endpoint).await
    }

    async fn delete_classifier(&self, classifier_id: &str) -> WatsonResult<()> {
        require_non_empty("classifier_id", classifier_id)?;

        let endpoint = SERVICE
            .endpoint(Method::DELETE, "/v1/classifiers/{classifier_id}", "deleteClassifier")
            .path_param("classifier_id", classifier_id)
            .headers(&self.headers);

        self.executor.execute_empty(endpoint).await
    }
}
