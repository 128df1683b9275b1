//! Canned response payloads for service tests.

mod alchemy_fixtures;
mod assistant_fixtures;
mod dialog_fixtures;
mod discovery_fixtures;
mod error_fixtures;
mod nlc_fixtures;
mod personality_fixtures;
mod retrieve_and_rank_fixtures;
mod text_to_speech_fixtures;
mod tradeoff_fixtures;

pub use alchemy_fixtures::*;
pub use assistant_fixtures::*;
pub use dialog_fixtures::*;
pub use discovery_fixtures::*;
pub use error_fixtures::*;
pub use nlc_fixtures::*;
pub use personality_fixtures::*;
pub use retrieve_and_rank_fixtures::*;
pub use text_to_speech_fixtures::*;
pub use tradeoff_fixtures::*;
