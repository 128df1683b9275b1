//! Watson Discovery v1: environments, collections, documents and queries.

mod aggregation;
mod service;
mod types;


pub use aggregation::{
    AggregationBucket, AggregationResult, FilterAggregation, HistogramAggregation,
    MetricAggregation, NestedAggregation, TermAggregation, TimesliceAggregation,
    TopHitsAggregation, TopHitsResults, UniqueCountAggregation,
};
pub use service::{DiscoveryService, DiscoveryServiceImpl};
pub use types::{
    AddDocumentRequest, Collection, DocumentAccepted, DocumentCounts, DocumentStatus,
    Environment, ListCollectionsResponse, ListEnvironmentsResponse, Notice, QueryOptions,
    QueryResponse, QueryResult,
};
