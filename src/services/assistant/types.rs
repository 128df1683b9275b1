use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<MessageInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<MessageContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl MessageRequest {
    /// A plain text turn.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            input: Some(MessageInput {
                message_type: Some("text".to_string()),
                text: Some(text.into()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    pub fn with_context(mut self, context: MessageContext) -> Self {
        self.context = Some(context);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub intents: Vec<RuntimeIntent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<RuntimeEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<MessageInputOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageInputOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_intents: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_context: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeIntent {
    pub intent: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeEntity {
    pub entity: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<[u32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// Conversation state carried between turns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<MessageContextGlobal>,
    /// Per-skill state, passed back unchanged.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub skills: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageContextGlobal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<MessageContextSystem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageContextSystem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turn_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MessageResponse {
    pub output: MessageOutput,
    #[serde(default)]
    pub context: Option<MessageContext>,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MessageOutput {
    #[serde(default)]
    pub generic: Vec<ResponseGeneric>,
    #[serde(default)]
    pub intents: Vec<RuntimeIntent>,
    #[serde(default)]
    pub entities: Vec<RuntimeEntity>,
    #[serde(default)]
    pub debug: Option<Value>,
    #[serde(default)]
    pub user_defined: Option<Map<String, Value>>,
}

/// One unit of assistant output, discriminated by `response_type`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "response_type", rename_all = "snake_case")]
pub enum ResponseGeneric {
    Text {
        text: String,
    },
    Option {
        title: String,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        options: Vec<ResponseOption>,
    },
    Image {
        source: String,
        #[serde(default)]
        title: Option<String>,
    },
    Pause {
        time: u64,
        #[serde(default)]
        typing: Option<bool>,
    },
    Suggestion {
        title: String,
    },
    ConnectToAgent {
        #[serde(default)]
        message_to_human_agent: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponseOption {
    pub label: String,
    pub value: ResponseOptionValue,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponseOptionValue {
    pub input: MessageInput,
}
