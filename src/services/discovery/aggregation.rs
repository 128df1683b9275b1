//! Query aggregation results.
//!
//! The wire form discriminates on `type`. These models are decode-only and an
//! unrecognised `type` is a decode failure.

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AggregationResult {
    Term(TermAggregation),
    Filter(FilterAggregation),
    Nested(NestedAggregation),
    Histogram(HistogramAggregation),
    Timeslice(TimesliceAggregation),
    TopHits(TopHitsAggregation),
    UniqueCount(UniqueCountAggregation),
    Min(MetricAggregation),
    Max(MetricAggregation),
    Average(MetricAggregation),
    Sum(MetricAggregation),
}

impl AggregationResult {
    /// Sub-aggregations attached directly to this result.
    pub fn children(&self) -> &[AggregationResult] {
        match self {
            AggregationResult::Filter(f) => &f.aggregations,
            AggregationResult::Nested(n) => &n.aggregations,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AggregationBucket {
    /// A term, a histogram bound or a timeslice instant.
    pub key: Value,
    #[serde(default)]
    pub key_as_string: Option<String>,
    pub matching_results: u64,
    #[serde(default)]
    pub event_rate: Option<f64>,
    #[serde(default)]
    pub aggregations: Vec<AggregationResult>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TermAggregation {
    pub field: String,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub results: Vec<AggregationBucket>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FilterAggregation {
    #[serde(rename = "match")]
    pub match_expression: String,
    pub matching_results: u64,
    #[serde(default)]
    pub aggregations: Vec<AggregationResult>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NestedAggregation {
    pub path: String,
    pub matching_results: u64,
    #[serde(default)]
    pub aggregations: Vec<AggregationResult>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistogramAggregation {
    pub field: String,
    pub interval: i64,
    #[serde(default)]
    pub results: Vec<AggregationBucket>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimesliceAggregation {
    pub field: String,
    pub interval: String,
    #[serde(default)]
    pub anomaly: Option<bool>,
    #[serde(default)]
    pub results: Vec<AggregationBucket>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopHitsAggregation {
    pub size: u64,
    #[serde(default)]
    pub hits: Option<TopHitsResults>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopHitsResults {
    pub matching_results: u64,
    #[serde(default)]
    pub hits: Vec<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UniqueCountAggregation {
    pub field: String,
    #[serde(default)]
    pub value: Option<f64>,
}

/// Shared shape of `min`, `max`, `average` and `sum`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetricAggregation {
    pub field: String,
    #[serde(default)]
    pub value: Option<f64>,
}
