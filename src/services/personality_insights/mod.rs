//! Personality Insights v3.

mod service;
mod types;


pub use service::{PersonalityInsightsService, PersonalityInsightsServiceImpl};
pub use types::{
    ConsumptionPreference, ConsumptionPreferencesCategory, ContentType, Profile, ProfileOptions,
    Trait, Warning,
};
