use crate::client::RequestExecutor;
use crate::errors::WatsonResult;
use crate::services::require_non_empty;
use crate::services::text_to_speech::{
    AudioFormat, Pronunciation, PronunciationFormat, Voice, VoiceList,
};
use crate::transport::{Endpoint, ServiceInfo};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const SERVICE: ServiceInfo = ServiceInfo::new("text_to_speech", "V1");

#[derive(Serialize)]
struct SynthesizeInput<'a> {
    text: &'a str,
}

#[async_trait]
pub trait TextToSpeechService: Send + Sync {
    async fn list_voices(&self) -> WatsonResult<VoiceList>;

    async fn get_voice(&self, voice: &str) -> WatsonResult<Voice>;

    /// Synthesizes `text` and returns the audio in memory.
    async fn synthesize(
        &self,
        text: &str,
        voice: Option<&str>,
        format: AudioFormat,
    ) -> WatsonResult<Bytes>;

    /// Synthesizes `text` straight into `destination`.
    async fn synthesize_to_file(
        &self,
        text: &str,
        voice: Option<&str>,
        format: AudioFormat,
        destination: &Path,
    ) -> WatsonResult<PathBuf>;

    async fn get_pronunciation(
        &self,
        text: &str,
        voice: Option<&str>,
        format: Option<PronunciationFormat>,
    ) -> WatsonResult<Pronunciation>;
}

pub struct TextToSpeechServiceImpl {
    executor: Arc<RequestExecutor>,
    headers: HeaderMap,
}

impl TextToSpeechServiceImpl {
    pub fn new(executor: Arc<RequestExecutor>) -> Self {
        Self {
            executor,
            headers: HeaderMap::new(),
        }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    fn synthesize_endpoint(
        &self,
        text: &str,
        voice: Option<&str>,
        format: AudioFormat,
    ) -> WatsonResult<Endpoint> {
        require_non_empty("text", text)?;

        SERVICE
            .endpoint(Method::POST, "/v1/synthesize", "synthesize")
            .query_opt("voice", voice)
            .headers(&self.headers)
            .accept(format.media_type())
            .json_body(&SynthesizeInput { text })
    }
}

#[async_trait]
impl TextToSpeechService for TextToSpeechServiceImpl {
    async fn list_voices(&self) -> WatsonResult<VoiceList> {
        let endpoint = SERVICE
            .endpoint(Method::GET, "/v1/voices", "listVoices")
            .headers(&self.headers);

        self.executor.execute(endpoint).await
    }

    async fn get_voice(&self, voice: &str) -> WatsonResult<Voice> {
        require_non_empty("voice", voice)?;

        let endpoint = SERVICE
            .endpoint(Method::GET, "/v1/voices/{voice}", "getVoice")
            .path_param("voice", voice)
            .headers(&self.headers);

        self.executor.execute(endpoint).await
    }

    async fn synthesize(
        &self,
        text: &str,
        voice: Option<&str>,
        format: AudioFormat,
    ) -> WatsonResult<Bytes> {
        let endpoint = self.synthesize_endpoint(text, voice, format)?;
        self.executor.execute_bytes(endpoint).await
    }

    async fn synthesize_to_file(
        &self,
        text: &str,
        voice: Option<&str>,
        format: AudioFormat,
        destination: &Path,
    ) -> WatsonResult<PathBuf> {
        let endpoint = self.synthesize_endpoint(text, voice, format)?;
        self.executor.download(endpoint, destination).await
    }

    async fn get_pronunciation(
        &self,
        text: &str,
        voice: Option<&str>,
        format: Option<PronunciationFormat>,
    ) -> WatsonResult<Pronunciation> {
        require_non_empty("text", text)?;

        let endpoint = SERVICE
            .endpoint(Method::GET, "/v1/pronunciation", "getPronunciation")
            .query("text", text)
            .query_opt("voice", voice)
            .query_opt("format", format)
            .headers(&self.headers);

        self.executor.execute(endpoint).await
    }
}
