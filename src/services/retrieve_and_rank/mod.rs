//! Retrieve and Rank v1: Solr cluster management and search.

mod service;
mod types;


pub use service::{RetrieveAndRankService, RetrieveAndRankServiceImpl};
pub use types::{
    CreateSolrClusterRequest, SearchOptions, SearchResponse, SolrCluster, SolrClusterList,
    SolrClusterStatus, SolrResponseHeader, SolrResults,
};
