use serde_json::{json, Value};

pub fn sentiment_response() -> Value {
    json!({
        "status": "OK",
        "usage": "By accessing AlchemyAPI or using information generated by AlchemyAPI, you are agreeing to be bound by the AlchemyAPI Terms of Use",
        "totalTransactions": "1",
        "language": "english",
        "docSentiment": {
            "type": "positive",
            "score": "0.51",
            "mixed": "1"
        }
    })
}

pub fn keywords_response() -> Value {
    json!({
        "status": "OK",
        "url": "https://www.ibm.com/watson",
        "totalTransactions": "2",
        "language": "english",
        "keywords": [
            { "text": "cognitive computing", "relevance": "0.946", "sentiment": { "type": "neutral" } },
            { "text": "IBM", "relevance": "0.71" }
        ]
    })
}

pub fn status_error_response() -> Value {
    json!({
        "status": "ERROR",
        "statusInfo": "invalid-api-key",
        "usage": "By accessing AlchemyAPI or using information generated by AlchemyAPI, you are agreeing to be bound by the AlchemyAPI Terms of Use"
    })
}
