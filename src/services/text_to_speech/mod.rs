//! Text to Speech v1.

mod service;
mod types;


pub use service::{TextToSpeechService, TextToSpeechServiceImpl};
pub use types::{
    AudioFormat, Pronunciation, PronunciationFormat, SupportedFeatures, Voice, VoiceList,
};
