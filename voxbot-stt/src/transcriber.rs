//! Abstract transcription interface

use async_trait::async_trait;

use crate::audio::AudioClip;
use crate::error::Result;

/// Result of a transcription request.
#[derive(Debug, Clone)]
pub struct Transcript {
    /// Transcribed text
    pub text: String,
    /// Confidence score (0.0 to 1.0) when the service reports one
    pub confidence: Option<f32>,
    /// Language the service recognized against (e.g. "fr-FR")
    pub language: Option<String>,
}

/// A speech-to-text backend: `transcribe(audio) -> text | error`.
#[async_trait]
pub trait Transcriber: Send + Sync + std::fmt::Debug {
    /// Transcribe a recorded clip into text.
    async fn transcribe(&self, audio: &AudioClip) -> Result<Transcript>;

    /// Human-readable engine name for logging.
    fn name(&self) -> &'static str;
}
