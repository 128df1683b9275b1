use serde_json::{json, Value};

pub fn list_dialogs_response() -> Value {
    json!({
        "dialogs": [
            { "dialog_id": "d-1", "name": "pizza-ordering" },
            { "dialog_id": "d-2", "name": "weather" }
        ]
    })
}

pub fn dialog_content_response() -> Value {
    json!([
        { "node": "OUTPUT(200000)", "content": "Hi! What would you like to order?" },
        { "node": "OUTPUT(200001)", "content": "What size?" }
    ])
}

pub fn conversation_response() -> Value {
    json!({
        "conversation_id": 1001,
        "client_id": 2002,
        "input": "large",
        "confidence": 0.82,
        "response": ["Large it is.", "Anything to drink?"]
    })
}

pub fn dialog_profile_response() -> Value {
    json!({
        "client_id": 2002,
        "name_values": [
            { "name": "size", "value": "large" },
            { "name": "topping", "value": "mushroom" }
        ]
    })
}
