//! Error types for transcription operations

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SttError>;

#[derive(Error, Debug)]
pub enum SttError {
    /// The service could not make out any speech in the clip
    #[error("Sorry, the audio could not be understood")]
    Unintelligible,

    #[error("Speech service request failed: {0}")]
    Request(String),

    #[error("Speech engine not supported: {0}")]
    UnsupportedEngine(String),

    #[error("Audio loading error: {0}")]
    AudioLoad(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SttError {
    pub fn request<S: Into<String>>(msg: S) -> Self {
        Self::Request(msg.into())
    }

    pub fn audio_load<S: Into<String>>(msg: S) -> Self {
        Self::AudioLoad(msg.into())
    }
}
