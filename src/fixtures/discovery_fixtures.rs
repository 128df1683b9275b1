use serde_json::{json, Value};

pub fn list_environments_response() -> Value {
    json!({
        "environments": [
            {
                "environment_id": "system",
                "name": "Watson System Environment",
                "read_only": true
            },
            {
                "environment_id": "env-1",
                "name": "byod",
                "description": "Bring your own data",
                "created": "2016-06-16T10:56:54.957Z",
                "status": "active",
                "read_only": false,
                "size": "LT"
            }
        ]
    })
}

pub fn list_collections_response() -> Value {
    json!({
        "collections": [
            {
                "collection_id": "col-1",
                "name": "news",
                "status": "active",
                "language": "en",
                "document_counts": { "available": 12, "processing": 1, "failed": 0 }
            }
        ]
    })
}

pub fn document_accepted_response() -> Value {
    json!({
        "document_id": "doc-1",
        "status": "processing",
        "notices": [
            { "notice_id": "smart_quotes", "severity": "warning", "description": "Quotes normalised" }
        ]
    })
}

pub fn document_status_response() -> Value {
    json!({
        "document_id": "doc-1",
        "configuration_id": "cfg-1",
        "status": "available",
        "status_description": "Document is successfully ingested and indexed with no warnings",
        "filename": "news.html",
        "file_type": "html",
        "sha1": "de9f2c7fd25e1b3afad3e85a0bd17d9b100db4b3"
    })
}

pub fn query_response() -> Value {
    json!({
        "matching_results": 24,
        "results": [
            {
                "id": "doc-1",
                "score": 1.72,
                "title": "Watson wins",
                "extracted_metadata": { "filename": "news.html" }
            }
        ],
        "aggregations": [
            {
                "type": "term",
                "field": "enriched_text.entities.type",
                "count": 2,
                "results": [
                    { "key": "Company", "matching_results": 17 },
                    { "key": "Person", "matching_results": 9 }
                ]
            },
            {
                "type": "timeslice",
                "field": "publication_date",
                "interval": "1d",
                "anomaly": true,
                "results": [
                    { "key": 1484784000000i64, "key_as_string": "2017-01-19T00:00:00.000Z", "matching_results": 3, "event_rate": 0.0 }
                ]
            }
        ]
    })
}

pub fn query_response_unknown_aggregation() -> Value {
    json!({
        "matching_results": 1,
        "aggregations": [ { "type": "not_a_real_type", "field": "x" } ]
    })
}
