use serde_json::{json, Value};

pub fn solr_cluster_response() -> Value {
    json!({
        "solr_cluster_id": "sc1264f746_d0f7_4840_90be_07164e6ed04b",
        "cluster_name": "example_cluster",
        "cluster_size": "1",
        "solr_cluster_status": "NOT_AVAILABLE"
    })
}

pub fn solr_cluster_list_response() -> Value {
    json!({
        "clusters": [
            {
                "solr_cluster_id": "sc1264f746_d0f7_4840_90be_07164e6ed04b",
                "cluster_name": "example_cluster",
                "cluster_size": "1",
                "solr_cluster_status": "READY"
            }
        ]
    })
}

pub fn search_response() -> Value {
    json!({
        "responseHeader": {
            "status": 0,
            "QTime": 4,
            "params": { "q": "what is the basic mechanism", "fl": "id,title", "wt": "json" }
        },
        "response": {
            "numFound": 2,
            "start": 0,
            "maxScore": 10.5,
            "docs": [
                { "id": "38", "title": ["boundary layer flows"] },
                { "id": "12", "title": ["transition studies"] }
            ]
        }
    })
}
