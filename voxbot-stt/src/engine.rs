//! Speech engine selection

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SttError};
use crate::google::GoogleTranscriber;
use crate::transcriber::Transcriber;

/// The speech-recognition engines the application knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    /// Google Web Speech API (remote)
    Google,
    /// PocketSphinx (local engine, not shipped)
    Sphinx,
}

impl FromStr for EngineKind {
    type Err = SttError;

    fn from_str(s: &str) -> std::result::Result<Self, SttError> {
        match s.to_ascii_lowercase().as_str() {
            "google" => Ok(EngineKind::Google),
            "sphinx" => Ok(EngineKind::Sphinx),
            other => Err(SttError::UnsupportedEngine(other.to_string())),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Google => write!(f, "google"),
            EngineKind::Sphinx => write!(f, "sphinx"),
        }
    }
}

/// Build a transcriber for the selected engine.
///
/// `api_key` of `None` uses the engine's built-in key. Selecting an
/// engine the system does not ship yields `UnsupportedEngine`.
pub fn build_transcriber(
    kind: EngineKind,
    language: &str,
    api_key: Option<&str>,
) -> Result<Box<dyn Transcriber>> {
    match kind {
        EngineKind::Google => {
            let mut transcriber = GoogleTranscriber::new().with_language(language);
            if let Some(key) = api_key {
                transcriber = transcriber.with_api_key(key);
            }
            Ok(Box::new(transcriber))
        }
        EngineKind::Sphinx => Err(SttError::UnsupportedEngine(
            "sphinx (no local engine available)".to_string(),
        )),
    }
}
