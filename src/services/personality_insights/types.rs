use bytes::Bytes;
use serde::Deserialize;

/// Media type of the text being analysed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Plain,
    Html,
    /// A `contentItems` JSON document.
    Json,
}

impl ContentType {
    pub fn media_type(self) -> &'static str {
        match self {
            ContentType::Plain => "text/plain;charset=utf-8",
            ContentType::Html => "text/html;charset=utf-8",
            ContentType::Json => "application/json",
        }
    }
}

/// Input and switches for one profile request.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileOptions {
    pub content: Bytes,
    pub content_type: ContentType,
    /// Language of the input, sent as `Content-Language`.
    pub content_language: Option<String>,
    /// Language of the response, sent as `Accept-Language`.
    pub accept_language: Option<String>,
    pub raw_scores: Option<bool>,
    pub csv_headers: Option<bool>,
    pub consumption_preferences: Option<bool>,
}

impl ProfileOptions {
    pub fn new(content: impl Into<Bytes>, content_type: ContentType) -> Self {
        Self {
            content: content.into(),
            content_type,
            content_language: None,
            accept_language: None,
            raw_scores: None,
            csv_headers: None,
            consumption_preferences: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(Bytes::from(text.into()), ContentType::Plain)
    }

    pub fn with_content_language(mut self, language: impl Into<String>) -> Self {
        self.content_language = Some(language.into());
        self
    }

    pub fn with_accept_language(mut self, language: impl Into<String>) -> Self {
        self.accept_language = Some(language.into());
        self
    }

    pub fn with_raw_scores(mut self, raw_scores: bool) -> Self {
        self.raw_scores = Some(raw_scores);
        self
    }

    pub fn with_consumption_preferences(mut self, enabled: bool) -> Self {
        self.consumption_preferences = Some(enabled);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub processed_language: String,
    pub word_count: u64,
    #[serde(default)]
    pub word_count_message: Option<String>,
    #[serde(default)]
    pub personality: Vec<Trait>,
    #[serde(default)]
    pub needs: Vec<Trait>,
    #[serde(default)]
    pub values: Vec<Trait>,
    #[serde(default)]
    pub consumption_preferences: Vec<ConsumptionPreferencesCategory>,
    #[serde(default)]
    pub warnings: Vec<Warning>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Trait {
    pub trait_id: String,
    pub name: String,
    pub category: String,
    pub percentile: f64,
    #[serde(default)]
    pub raw_score: Option<f64>,
    #[serde(default)]
    pub significant: Option<bool>,
    #[serde(default)]
    pub children: Vec<Trait>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConsumptionPreferencesCategory {
    pub consumption_preference_category_id: String,
    pub name: String,
    #[serde(default)]
    pub consumption_preferences: Vec<ConsumptionPreference>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConsumptionPreference {
    pub consumption_preference_id: String,
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Warning {
    pub warning_id: String,
    pub message: String,
}
