//! Speech transcription for voxbot
//!
//! Thin clients over remote speech-recognition services, behind an
//! abstract [`Transcriber`] trait: `transcribe(audio) -> text | error`.
//! Capture itself is out of scope; clips arrive as WAV files.
//!
//! # Example
//!
//! ```no_run
//! use voxbot_stt::{AudioClip, GoogleTranscriber, Transcriber};
//!
//! # async fn demo() -> voxbot_stt::Result<()> {
//! let clip = AudioClip::from_wav_path("clip.wav")?;
//! let stt = GoogleTranscriber::new().with_language("fr-FR");
//! let transcript = stt.transcribe(&clip).await?;
//! println!("Transcription: {}", transcript.text);
//! # Ok(())
//! # }
//! ```

pub mod audio;
pub mod engine;
pub mod error;
pub mod google;
pub mod transcriber;

pub use audio::AudioClip;
pub use engine::{build_transcriber, EngineKind};
pub use error::{Result, SttError};
pub use google::GoogleTranscriber;
pub use transcriber::{Transcriber, Transcript};
