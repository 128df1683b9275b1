use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SolrClusterStatus {
    NotAvailable,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SolrCluster {
    pub solr_cluster_id: String,
    #[serde(default)]
    pub cluster_name: Option<String>,
    /// Reported by the service as a string, e.g. `"1"`.
    #[serde(default)]
    pub cluster_size: Option<String>,
    pub solr_cluster_status: SolrClusterStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SolrClusterList {
    #[serde(default)]
    pub clusters: Vec<SolrCluster>,
}

/// Options for a new cluster. An empty request creates a free-plan cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateSolrClusterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_size: Option<String>,
}

impl CreateSolrClusterRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            cluster_name: Some(name.into()),
            cluster_size: None,
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.cluster_size = Some(size.to_string());
        self
    }
}

/// A Solr `select` query, optionally re-ordered by a trained ranker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub query: String,
    /// Returned fields, sent comma-joined as `fl`.
    pub fields: Vec<String>,
    /// Filter queries, each sent as its own `fq`.
    pub filter_queries: Vec<String>,
    pub rows: Option<u32>,
    pub start: Option<u32>,
    /// Routes the query through `fcselect` with this ranker.
    pub ranker_id: Option<String>,
}

impl SearchOptions {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            fields: Vec::new(),
            filter_queries: Vec::new(),
            rows: None,
            start: None,
            ranker_id: None,
        }
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_filter_query(mut self, filter: impl Into<String>) -> Self {
        self.filter_queries.push(filter.into());
        self
    }

    pub fn with_rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn with_start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_ranker(mut self, ranker_id: impl Into<String>) -> Self {
        self.ranker_id = Some(ranker_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "responseHeader")]
    pub response_header: SolrResponseHeader,
    pub response: SolrResults,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SolrResponseHeader {
    pub status: i64,
    #[serde(rename = "QTime")]
    pub query_time: i64,
    #[serde(default)]
    pub params: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SolrResults {
    #[serde(rename = "numFound")]
    pub num_found: u64,
    pub start: u64,
    #[serde(rename = "maxScore", default)]
    pub max_score: Option<f64>,
    #[serde(default)]
    pub docs: Vec<Map<String, Value>>,
}
