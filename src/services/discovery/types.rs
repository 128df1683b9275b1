use crate::services::discovery::AggregationResult;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListEnvironmentsResponse {
    #[serde(default)]
    pub environments: Vec<Environment>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Environment {
    pub environment_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub index_capacity: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListCollectionsResponse {
    #[serde(default)]
    pub collections: Vec<Collection>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Collection {
    pub collection_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub configuration_id: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub document_counts: Option<DocumentCounts>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DocumentCounts {
    #[serde(default)]
    pub available: u64,
    #[serde(default)]
    pub processing: u64,
    #[serde(default)]
    pub failed: u64,
}

/// A document upload. At least one of `file` and `metadata` must be set.
#[derive(Debug, Clone, Default)]
pub struct AddDocumentRequest {
    pub file: Option<PathBuf>,
    /// Defaults to `application/octet-stream`.
    pub file_content_type: Option<String>,
    pub metadata: Option<Map<String, Value>>,
}

impl AddDocumentRequest {
    pub fn file(path: impl Into<PathBuf>, content_type: impl Into<String>) -> Self {
        Self {
            file: Some(path.into()),
            file_content_type: Some(content_type.into()),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentAccepted {
    pub document_id: String,
    pub status: String,
    #[serde(default)]
    pub notices: Vec<Notice>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentStatus {
    pub document_id: String,
    pub status: String,
    #[serde(default)]
    pub status_description: Option<String>,
    #[serde(default)]
    pub configuration_id: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub sha1: Option<String>,
    #[serde(default)]
    pub notices: Vec<Notice>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Notice {
    #[serde(default)]
    pub notice_id: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub step: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Parameters of a collection query. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    pub filter: Option<String>,
    pub query: Option<String>,
    pub natural_language_query: Option<String>,
    pub aggregation: Option<String>,
    pub count: Option<u32>,
    /// Fields to return, sent comma-separated as `return`.
    pub return_fields: Vec<String>,
    pub offset: Option<u32>,
    /// Sort keys, sent comma-separated. Prefix with `-` for descending.
    pub sort: Vec<String>,
    pub highlight: Option<bool>,
    pub deduplicate: Option<bool>,
}

impl QueryOptions {
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    pub fn natural_language(query: impl Into<String>) -> Self {
        Self {
            natural_language_query: Some(query.into()),
            ..Default::default()
        }
    }

    pub fn with_aggregation(mut self, aggregation: impl Into<String>) -> Self {
        self.aggregation = Some(aggregation.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryResponse {
    pub matching_results: u64,
    #[serde(default)]
    pub results: Vec<QueryResult>,
    #[serde(default)]
    pub aggregations: Vec<AggregationResult>,
    #[serde(default)]
    pub passages: Vec<Value>,
    #[serde(default)]
    pub duplicates_removed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryResult {
    pub id: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
    /// Remaining document fields, as stored.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
