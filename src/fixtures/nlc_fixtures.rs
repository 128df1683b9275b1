use serde_json::{json, Value};

pub fn classifier_response() -> Value {
    json!({
        "classifier_id": "10D41B-nlc-1",
        "name": "weather",
        "language": "en",
        "created": "2015-08-24T18:42:25.324Z",
        "url": "https://gateway.watsonplatform.net/natural-language-classifier/api/v1/classifiers/10D41B-nlc-1",
        "status": "Training",
        "status_description": "The classifier instance is in its training phase, not yet ready to accept classify requests"
    })
}

pub fn list_classifiers_response() -> Value {
    json!({
        "classifiers": [
            {
                "classifier_id": "10D41B-nlc-1",
                "url": "https://gateway.watsonplatform.net/natural-language-classifier/api/v1/classifiers/10D41B-nlc-1",
                "name": "weather",
                "language": "en"
            }
        ]
    })
}

pub fn classification_response() -> Value {
    json!({
        "classifier_id": "10D41B-nlc-1",
        "url": "https://gateway.watsonplatform.net/natural-language-classifier/api/v1/classifiers/10D41B-nlc-1",
        "text": "How hot will it be today?",
        "top_class": "temperature",
        "classes": [
            { "class_name": "temperature", "confidence": 0.9998201258549781 },
            { "class_name": "conditions", "confidence": 0.00017987414502176904 }
        ]
    })
}

pub fn classifier_unavailable_status() -> Value {
    json!({
        "classifier_id": "10D41B-nlc-1",
        "url": "https://gateway.watsonplatform.net/natural-language-classifier/api/v1/classifiers/10D41B-nlc-1",
        "status": "Non Existent"
    })
}
