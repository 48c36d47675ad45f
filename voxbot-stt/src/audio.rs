//! Recorded audio clips

use std::path::Path;

use hound::{SampleFormat, WavReader};

use crate::error::{Result, SttError};

/// A short mono voice clip, 16-bit PCM.
#[derive(Debug, Clone)]
pub struct AudioClip {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl AudioClip {
    pub fn new(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Load a clip from a 16-bit PCM WAV file.
    ///
    /// Multi-channel files are averaged down to mono.
    pub fn from_wav_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = WavReader::open(path.as_ref())
            .map_err(|e| SttError::audio_load(format!("Failed to open WAV: {}", e)))?;

        let spec = reader.spec();
        if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 {
            return Err(SttError::audio_load(format!(
                "Only 16-bit PCM WAV is supported, got {}-bit {:?}",
                spec.bits_per_sample, spec.sample_format
            )));
        }

        let channels = spec.channels as usize;
        let sample_rate = spec.sample_rate;

        let samples: Vec<i16> = reader
            .into_samples::<i16>()
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| SttError::audio_load(format!("Failed to read samples: {}", e)))?;

        let samples = if channels > 1 {
            samples
                .chunks(channels)
                .map(|frame| {
                    (frame.iter().map(|s| *s as i32).sum::<i32>() / channels as i32) as i16
                })
                .collect()
        } else {
            samples
        };

        Ok(Self::new(samples, sample_rate))
    }

    /// Raw little-endian PCM bytes, as sent to the speech service.
    pub fn to_pcm16le_bytes(&self) -> Vec<u8> {
        self.samples
            .iter()
            .flat_map(|sample| sample.to_le_bytes())
            .collect()
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{WavSpec, WavWriter};

    fn write_wav(path: &Path, channels: u16, samples: &[i16]) {
        let spec = WavSpec {
            channels,
            sample_rate: 16000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(path, spec).unwrap();
        for s in samples {
            writer.write_sample(*s).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_duration() {
        let clip = AudioClip::new(vec![0; 8000], 16000);
        assert_eq!(clip.duration_secs(), 0.5);
    }

    #[test]
    fn test_pcm_bytes_little_endian() {
        let clip = AudioClip::new(vec![1, -2], 16000);
        assert_eq!(clip.to_pcm16le_bytes(), vec![0x01, 0x00, 0xFE, 0xFF]);
    }

    #[test]
    fn test_load_mono_wav() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mono.wav");
        write_wav(&path, 1, &[10, 20, 30]);

        let clip = AudioClip::from_wav_path(&path).unwrap();
        assert_eq!(clip.samples(), &[10, 20, 30]);
        assert_eq!(clip.sample_rate(), 16000);
    }

    #[test]
    fn test_stereo_downmix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stereo.wav");
        // Interleaved L/R frames: (10, 20), (30, 50)
        write_wav(&path, 2, &[10, 20, 30, 50]);

        let clip = AudioClip::from_wav_path(&path).unwrap();
        assert_eq!(clip.samples(), &[15, 40]);
    }

    #[test]
    fn test_missing_file_is_audio_load_error() {
        let err = AudioClip::from_wav_path("/nonexistent/clip.wav").unwrap_err();
        assert!(matches!(err, SttError::AudioLoad(_)));
    }
}
