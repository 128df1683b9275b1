use serde_json::{json, Value};

pub fn dilemma_response() -> Value {
    json!({
        "problem": {
            "subject": "phones",
            "columns": [
                { "key": "price", "type": "numeric", "goal": "min", "is_objective": true,
                  "full_name": "Price", "range": { "low": 0, "high": 400 } },
                { "key": "color", "type": "categorical", "goal": "max", "is_objective": true,
                  "range": ["black", "white"], "preference": ["black", "white"] },
                { "key": "release", "type": "datetime", "goal": "max", "is_objective": true,
                  "range": { "low": "2013-01-01T00:00:00Z", "high": "2015-01-01T00:00:00Z" } }
            ],
            "options": [
                { "key": "1", "name": "Samsung Galaxy S4",
                  "values": { "price": 249, "color": "black", "release": "2013-04-29T00:00:00Z" } },
                { "key": "2", "name": "Apple iPhone 5",
                  "values": { "price": "349.99", "color": "white", "release": "2012-09-21T00:00:00Z" } }
            ]
        },
        "resolution": {
            "solutions": [
                { "solution_ref": "1", "status": "FRONT", "shadows": ["2"] },
                { "solution_ref": "2", "status": "EXCLUDED",
                  "status_cause": {
                      "message": "A column of a option is out of range.",
                      "error_code": "RANGE_MISMATCH",
                      "tokens": ["release", "2012-09-21T00:00:00Z", "[2013-01-01T00:00:00Z,2015-01-01T00:00:00Z]"]
                  },
                  "shadow_me": ["1"] }
            ],
            "preferable_solutions": { "solution_refs": ["1"], "score": 0.73 }
        }
    })
}
