use serde::{Deserialize, Deserializer};

/// What to analyse. Each kind maps to its own family of Alchemy calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlchemySource {
    Text(String),
    Html(String),
    /// A public web page fetched by the service.
    Url(String),
}

impl AlchemySource {
    pub(crate) fn path_prefix(&self) -> &'static str {
        match self {
            AlchemySource::Text(_) => "/text/Text",
            AlchemySource::Html(_) => "/html/HTML",
            AlchemySource::Url(_) => "/url/URL",
        }
    }

    pub(crate) fn form_field(&self) -> (&'static str, &str) {
        match self {
            AlchemySource::Text(text) => ("text", text),
            AlchemySource::Html(html) => ("html", html),
            AlchemySource::Url(url) => ("url", url),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeywordOptions {
    pub max_retrieve: Option<u32>,
    /// Also score the sentiment of each keyword.
    pub sentiment: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentType {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sentiment {
    #[serde(rename = "type")]
    pub sentiment_type: SentimentType,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub mixed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSentiment {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_transactions: Option<u64>,
    pub doc_sentiment: Sentiment,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Keyword {
    pub text: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub relevance: Option<f64>,
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keywords {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_transactions: Option<u64>,
    #[serde(default)]
    pub keywords: Vec<Keyword>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient {
    Number(f64),
    Text(String),
}

impl Lenient {
    fn into_f64<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            Lenient::Number(value) => Ok(value),
            Lenient::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("`{text}` is not a number"))),
        }
    }
}

// Alchemy quotes its numbers: `"score": "0.51"`, `"mixed": "1"`.
fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Option::<Lenient>::deserialize(deserializer)?
        .map(Lenient::into_f64)
        .transpose()
}

fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    match lenient_f64(deserializer)? {
        Some(value) if value >= 0.0 && value.fract() == 0.0 => Ok(Some(value as u64)),
        Some(value) => Err(serde::de::Error::custom(format!(
            "{value} is not a transaction count"
        ))),
        None => Ok(None),
    }
}

fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Ok(lenient_f64(deserializer)?.map(|value| value != 0.0))
}
