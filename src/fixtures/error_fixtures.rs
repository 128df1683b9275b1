use serde_json::{json, Value};

pub fn errors_array_body() -> Value {
    json!({ "errors": [ { "message": "Resource not found", "code": 404 } ], "trace": "t-1" })
}

pub fn error_string_body() -> Value {
    json!({ "error": "Invalid credentials", "code": 401 })
}

pub fn msg_description_body() -> Value {
    json!({ "msg": "Dialog file is malformed", "description": "Validate the XML against the schema" })
}
