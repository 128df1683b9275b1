use crate::client::RequestExecutor;
use crate::errors::WatsonResult;
use crate::services::require_non_empty;
use crate::services::retrieve_and_rank::{
    CreateSolrClusterRequest, SearchOptions, SearchResponse, SolrCluster, SolrClusterList,
};
use crate::transport::{ArrayFormat, ServiceInfo};
use async_trait::async_trait;
use http::{HeaderMap, Method};
use std::sync::Arc;

const SERVICE: ServiceInfo = ServiceInfo::new("retrieve_and_rank", "V1");

#[async_trait]
pub trait RetrieveAndRankService: Send + Sync {
    async fn list_solr_clusters(&self) -> WatsonResult<SolrClusterList>;

    async fn create_solr_cluster(
        &self,
        request: Option<CreateSolrClusterRequest>,
    ) -> WatsonResult<SolrCluster>;

    async fn get_solr_cluster(&self, solr_cluster_id: &str) -> WatsonResult<SolrCluster>;

    async fn delete_solr_cluster(&self, solr_cluster_id: &str) -> WatsonResult<()>;

    async fn search(
        &self,
        solr_cluster_id: &str,
        collection_name: &str,
        options: SearchOptions,
    ) -> WatsonResult<SearchResponse>;
}

pub struct RetrieveAndRankServiceImpl {
    executor: Arc<RequestExecutor>,
    headers: HeaderMap,
}

impl RetrieveAndRankServiceImpl {
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
impl RetrieveAndRankService for RetrieveAndRankServiceImpl {
    async fn list_solr_clusters(&self) -> WatsonResult<SolrClusterList> {
        let endpoint = SERVICE
            .endpoint(Method::GET, "/v1/solr_clusters", "listSolrClusters")
            .headers(&self.headers);

        self.executor.execute(endpoint).await
    }

    async fn create_solr_cluster(
        &self,
        request: Option<CreateSolrClusterRequest>,
    ) -> WatsonResult<SolrCluster> {
        let endpoint = SERVICE
            .endpoint(Method::POST, "/v1/solr_clusters", "createSolrCluster")
            .headers(&self.headers)
            .optional_json_body(&request)?;

        self.executor.execute(endpoint).await
    }

    async fn get_solr_cluster(&self, solr_cluster_id: &str) -> WatsonResult<SolrCluster> {
        require_non_empty("solr_cluster_id", solr_cluster_id)?;

        let endpoint = SERVICE
            .endpoint(Method::GET, "/v1/solr_clusters/{solr_cluster_id}", "getSolrCluster")
            .path_param("solr_cluster_id", solr_cluster_id)
            .headers(&self.headers);

        self.executor.execute(endpoint).await
    }

    async fn delete_solr_cluster(&self, solr_cluster_id: &str) -> WatsonResult<()> {
        require_non_empty("solr_cluster_id", solr_cluster_id)?;

        let endpoint = SERVICE
            .endpoint(Method::DELETE, "/v1/solr_clusters/{solr_cluster_id}", "deleteSolrCluster")
            .path_param("solr_cluster_id", solr_cluster_id)
            .headers(&self.headers);

        self.executor.execute_empty(endpoint).await
    }

    async fn search(
        &self,
        solr_cluster_id: &str,
        collection_name: &str,
        options: SearchOptions,
    ) -> WatsonResult<SearchResponse> {
        require_non_empty("solr_cluster_id", solr_cluster_id)?;
        require_non_empty("collection_name", collection_name)?;
        require_non_empty("query", &options.query)?;

        let (template, operation) = if options.ranker_id.is_some() {
            (
                "/v1/solr_clusters/{solr_cluster_id}/solr/{collection_name}/fcselect",
                "rankedSearch",
            )
        } else {
            (
                "/v1/solr_clusters/{solr_cluster_id}/solr/{collection_name}/select",
                "search",
            )
        };

        let endpoint = SERVICE
            .endpoint(Method::GET, template, operation)
            .path_param("solr_cluster_id", solr_cluster_id)
            .path_param("collection_name", collection_name)
            .query("q", &options.query)
            .query("wt", "json")
            .query_opt("ranker_id", options.ranker_id.as_deref())
            .query_list("fl", &options.fields, ArrayFormat::CommaSeparated)
            .query_list("fq", &options.filter_queries, ArrayFormat::Repeated)
            .query_opt("rows", options.rows)
            .query_opt("start", options.start)
            .headers(&self.headers);

        self.executor.execute(endpoint).await
    }
}
