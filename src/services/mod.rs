pub mod alchemy_language;
pub mod assistant;
pub mod dialog;
pub mod discovery;
pub mod natural_language_classifier;
pub mod personality_insights;
pub mod retrieve_and_rank;
pub mod text_to_speech;
pub mod tradeoff_analytics;

use crate::errors::{ValidationError, WatsonResult};

/// Rejects an empty required parameter before anything is sent.
pub(crate) fn require_non_empty(parameter: &str, value: &str) -> WatsonResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingRequiredParameter(parameter.to_string()).into());
    }
    Ok(())
}
