//! AlchemyLanguage text analysis.
//!
//! Unlike the other services, Alchemy reports some failures in a `200 OK`
//! body with `"status": "ERROR"`. Those are surfaced as
//! [`WatsonError::Http`](crate::errors::WatsonError::Http) whose message is
//! the service's `statusInfo`.

mod service;
mod types;


pub use service::{AlchemyLanguageService, AlchemyLanguageServiceImpl};
pub use types::{
    AlchemySource, DocumentSentiment, Keyword, KeywordOptions, Keywords, Sentiment, SentimentType,
};
