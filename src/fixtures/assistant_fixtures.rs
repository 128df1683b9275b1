use serde_json::{json, Value};

pub fn create_session_response() -> Value {
    json!({ "session_id": "abc" })
}

pub fn message_response() -> Value {
    json!({
        "output": {
            "generic": [
                { "response_type": "text", "text": "Hello! How can I help?" },
                {
                    "response_type": "option",
                    "title": "Pick a topic",
                    "options": [
                        {
                            "label": "Billing",
                            "value": { "input": { "text": "billing" } }
                        }
                    ]
                },
                { "response_type": "pause", "time": 500, "typing": true }
            ],
            "intents": [ { "intent": "greeting", "confidence": 0.97 } ],
            "entities": [
                { "entity": "sys-date", "value": "2021-11-27", "location": [10, 18], "confidence": 1.0 }
            ]
        },
        "context": {
            "global": {
                "system": { "turn_count": 1, "timezone": "UTC" },
                "session_id": "abc"
            },
            "skills": { "main skill": { "user_defined": { "name": "Ada" } } }
        },
        "user_id": "user-1"
    })
}

pub fn message_response_unknown_generic() -> Value {
    json!({
        "output": {
            "generic": [ { "response_type": "hologram", "text": "?" } ]
        }
    })
}
