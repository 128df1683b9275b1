use crate::client::RequestExecutor;
use crate::errors::{ValidationError, WatsonResult};
use crate::services::discovery::{
    AddDocumentRequest, DocumentAccepted, DocumentStatus, ListCollectionsResponse,
    ListEnvironmentsResponse, QueryOptions, QueryResponse,
};
use crate::services::require_non_empty;
use crate::transport::{ArrayFormat, MultipartForm, ServiceInfo};
use async_trait::async_trait;
use http::{HeaderMap, Method};
use std::sync::Arc;

const SERVICE: ServiceInfo = ServiceInfo::new("discovery", "V1");

#[async_trait]
pub trait DiscoveryService: Send + Sync {
    async fn list_environments(&self, name: Option<&str>) -> WatsonResult<ListEnvironmentsResponse>;

    async fn list_collections(
        &self,
        environment_id: &str,
        name: Option<&str>,
    ) -> WatsonResult<ListCollectionsResponse>;

    /// Uploads a document for asynchronous ingestion.
    async fn add_document(
        &self,
        environment_id: &str,
        collection_id: &str,
        request: AddDocumentRequest,
    ) -> WatsonResult<DocumentAccepted>;

    async fn get_document_status(
        &self,
        environment_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> WatsonResult<DocumentStatus>;

    async fn query(
        &self,
        environment_id: &str,
        collection_id: &str,
        options: QueryOptions,
    ) -> WatsonResult<QueryResponse>;
}

pub struct DiscoveryServiceImpl {
    executor: Arc<RequestExecutor>,
    headers: HeaderMap,
}

impl DiscoveryServiceImpl {
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
impl DiscoveryService for DiscoveryServiceImpl {
    async fn list_environments(&self, name: Option<&str>) -> WatsonResult<ListEnvironmentsResponse> {
        let endpoint = SERVICE
            .endpoint(Method::GET, "/v1/environments", "listEnvironments")
            .query_opt("name", name)
            .headers(&self.headers);

        self.executor.execute(endpoint).await
    }

    async fn list_collections(
        &self,
        environment_id: &str,
        name: Option<&str>,
    ) -> WatsonResult<ListCollectionsResponse> {
        require_non_empty("environment_id", environment_id)?;

        let endpoint = SERVICE
            .endpoint(
                Method::GET,
                "/v1/environments/{environment_id}/collections",
                "listCollections",
            )
            .path_param("environment_id", environment_id)
            .query_opt("name", name)
            .headers(&self.headers);

        self.executor.execute(endpoint).await
    }

    async fn add_document(
        &self,
        environment_id: &str,
        collection_id: &str,
        request: AddDocumentRequest,
    ) -> WatsonResult<DocumentAccepted> {
        require_non_empty("environment_id", environment_id)?;
        require_non_empty("collection_id", collection_id)?;
        if request.file.is_none() && request.metadata.is_none() {
            return Err(ValidationError::MissingRequiredParameter("file or metadata".to_string()).into());
        }

        let mut form = MultipartForm::new();
        if let Some(path) = &request.file {
            let content_type = request
                .file_content_type
                .as_deref()
                .unwrap_or(mime::APPLICATION_OCTET_STREAM.as_ref());
            form = form.file("file", path, content_type);
        }
        if let Some(metadata) = &request.metadata {
            form = form.json("metadata", metadata)?;
        }

        let endpoint = SERVICE
            .endpoint(
                Method::POST,
                "/v1/environments/{environment_id}/collections/{collection_id}/documents",
                "addDocument",
            )
            .path_param("environment_id", environment_id)
            .path_param("collection_id", collection_id)
            .headers(&self.headers)
            .multipart(form);

        self.executor.execute(endpoint).await
    }

    async fn get_document_status(
        &self,
        environment_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> WatsonResult<DocumentStatus> {
        require_non_empty("environment_id", environment_id)?;
        require_non_empty("collection_id", collection_id)?;
        require_non_empty("document_id", document_id)?;

        let endpoint = SERVICE
            .endpoint(
                Method::GET,
                "/v1/environments/{environment_id}/collections/{collection_id}/documents/{document_id}",
                "getDocumentStatus",
            )
            .path_param("environment_id", environment_id)
            .path_param("collection_id", collection_id)
            .path_param("document_id", document_id)
            .headers(&self.headers);

        self.executor.execute(endpoint).await
    }

    async fn query(
        &self,
        environment_id: &str,
        collection_id: &str,
        options: QueryOptions,
    ) -> WatsonResult<QueryResponse> {
        require_non_empty("environment_id", environment_id)?;
        require_non_empty("collection_id", collection_id)?;

        let endpoint = SERVICE
            .endpoint(
                Method::GET,
                "/v1/environments/{environment_id}/collections/{collection_id}/query",
                "query",
            )
            .path_param("environment_id", environment_id)
            .path_param("collection_id", collection_id)
            .query_opt("filter", options.filter)
            .query_opt("query", options.query)
            .query_opt("natural_language_query", options.natural_language_query)
            .query_opt("aggregation", options.aggregation)
            .query_opt("count", options.count)
            .query_list("return", options.return_fields, ArrayFormat::CommaSeparated)
            .query_opt("offset", options.offset)
            .query_list("sort", options.sort, ArrayFormat::CommaSeparated)
            .query_opt("highlight", options.highlight)
            .query_opt("deduplicate", options.deduplicate)
            .headers(&self.headers);

        self.executor.execute(endpoint).await
    }
}
