use serde_json::{json, Value};

pub fn voice_response() -> Value {
    json!({
        "url": "https://api.us-south.text-to-speech.watson.cloud.ibm.com/v1/voices/en-US_AllisonVoice",
        "name": "en-US_AllisonVoice",
        "language": "en-US",
        "gender": "female",
        "description": "Allison: American English female voice.",
        "customizable": true,
        "supported_features": {
            "custom_pronunciation": true,
            "voice_transformation": true
        }
    })
}

pub fn voice_list_response() -> Value {
    json!({
        "voices": [
            voice_response(),
            {
                "name": "es-ES_EnriqueVoice",
                "language": "es-ES",
                "gender": "male"
            }
        ]
    })
}

pub fn pronunciation_response() -> Value {
    json!({ "pronunciation": "ˈjoʊ.lɛ.ni" })
}
