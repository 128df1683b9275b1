use serde::Deserialize;
use std::fmt;

/// Audio encodings the service can synthesize, negotiated through `Accept`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioFormat {
    #[default]
    OggOpus,
    Wav,
    Flac,
    Mp3,
    Basic,
    /// Linear 16-bit PCM at 22050 Hz.
    L16,
}

impl AudioFormat {
    pub fn media_type(self) -> &'static str {
        match self {
            AudioFormat::OggOpus => "audio/ogg;codecs=opus",
            AudioFormat::Wav => "audio/wav",
            AudioFormat::Flac => "audio/flac",
            AudioFormat::Mp3 => "audio/mp3",
            AudioFormat::Basic => "audio/basic",
            AudioFormat::L16 => "audio/l16;rate=22050",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PronunciationFormat {
    Ipa,
    Spr,
}

impl fmt::Display for PronunciationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PronunciationFormat::Ipa => f.write_str("ipa"),
            PronunciationFormat::Spr => f.write_str("spr"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Voice {
    pub name: String,
    pub language: String,
    pub gender: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub customizable: Option<bool>,
    #[serde(default)]
    pub supported_features: Option<SupportedFeatures>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SupportedFeatures {
    pub custom_pronunciation: bool,
    pub voice_transformation: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VoiceList {
    pub voices: Vec<Voice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Pronunciation {
    pub pronunciation: String,
}
