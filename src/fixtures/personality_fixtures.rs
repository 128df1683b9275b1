use serde_json::{json, Value};

pub fn personality_profile_response() -> Value {
    json!({
        "word_count": 15128,
        "processed_language": "en",
        "personality": [
            {
                "trait_id": "big5_openness",
                "name": "Openness",
                "category": "personality",
                "percentile": 0.8011555009552956,
                "raw_score": 0.7756540425503803,
                "significant": true,
                "children": [
                    {
                        "trait_id": "facet_adventurousness",
                        "name": "Adventurousness",
                        "category": "personality",
                        "percentile": 0.8945390559734079,
                        "significant": true
                    }
                ]
            }
        ],
        "needs": [
            { "trait_id": "need_challenge", "name": "Challenge", "category": "needs", "percentile": 0.67 }
        ],
        "values": [],
        "consumption_preferences": [
            {
                "consumption_preference_category_id": "consumption_preferences_shopping",
                "name": "Purchasing Preferences",
                "consumption_preferences": [
                    {
                        "consumption_preference_id": "consumption_preferences_automobile_ownership_cost",
                        "name": "Likely to be sensitive to ownership cost when buying automobiles",
                        "score": 0.0
                    }
                ]
            }
        ],
        "warnings": [
            { "warning_id": "WORD_COUNT_MESSAGE", "message": "There were 15128 words in the input." }
        ]
    })
}
