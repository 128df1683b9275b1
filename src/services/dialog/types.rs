use serde::{Deserialize, Serialize};

/// Serialisations of a dialog file, negotiated through `Accept`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogFileFormat {
    /// Compiled binary dialog.
    Mct,
    Json,
    Xml,
}

impl DialogFileFormat {
    pub fn media_type(self) -> &'static str {
        match self {
            DialogFileFormat::Mct => "application/octet-stream",
            DialogFileFormat::Json => "application/wds+json",
            DialogFileFormat::Xml => "application/wds+xml",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            DialogFileFormat::Mct => "mct",
            DialogFileFormat::Json => "json",
            DialogFileFormat::Xml => "xml",
        }
    }

    /// Guesses the format from a file extension.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "mct" => Some(DialogFileFormat::Mct),
            "json" => Some(DialogFileFormat::Json),
            "xml" => Some(DialogFileFormat::Xml),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DialogList {
    #[serde(default)]
    pub dialogs: Vec<DialogSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DialogSummary {
    pub dialog_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DialogId {
    pub dialog_id: String,
}

/// The text of one dialog node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogContent {
    pub node: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConversationResponse {
    pub conversation_id: i64,
    pub client_id: i64,
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub response: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameValue {
    pub name: String,
    pub value: String,
}

impl NameValue {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Profile variables held by the service for one client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<i64>,
    #[serde(default)]
    pub name_values: Vec<NameValue>,
}
