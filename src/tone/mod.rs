//! Sine tone synthesis.
//!
//! Produces 16-bit PCM samples for a single fixed-frequency tone. Synthesis
//! is pure and deterministic; `wav` handles the container.

pub mod wav;

pub use wav::{encode, write_file, ToneSummary};

use crate::error::{ToneError, ToneResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::warn;

/// Size of one mono 16-bit frame.
const BYTES_PER_SAMPLE: usize = 2;
/// RIFF chunk bytes besides the sample data; the RIFF size field is a u32.
const RIFF_OVERHEAD_BYTES: usize = 36;

/// Parameters of a sine tone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneSpec {
    /// Samples per second.
    pub sample_rate: u32,
    /// Length of the tone in seconds.
    pub duration_secs: f64,
    /// Tone frequency in Hz.
    pub frequency_hz: f64,
    /// Peak sample value.
    pub amplitude: i16,
}

impl Default for ToneSpec {
    /// A 200 ms A5 (880 Hz) beep at full scale, sampled at 44.1 kHz.
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            duration_secs: 0.2,
            frequency_hz: 880.0,
            amplitude: i16::MAX,
        }
    }
}

impl ToneSpec {
    /// Check that the parameters describe a tone that can be synthesized.
    pub fn validate(&self) -> ToneResult<()> {
        if self.sample_rate == 0 {
            return Err(ToneError::InvalidSpec(
                "sample rate must be positive".to_string(),
            ));
        }
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(ToneError::InvalidSpec(format!(
                "duration must be a positive number of seconds, got {}",
                self.duration_secs
            )));
        }
        if !self.frequency_hz.is_finite() || self.frequency_hz <= 0.0 {
            return Err(ToneError::InvalidSpec(format!(
                "frequency must be a positive number of Hz, got {}",
                self.frequency_hz
            )));
        }
        if self.amplitude < 0 {
            return Err(ToneError::InvalidSpec(format!(
                "amplitude must not be negative, got {}",
                self.amplitude
            )));
        }
        let riff_bytes = self
            .sample_count()
            .checked_mul(BYTES_PER_SAMPLE)
            .and_then(|n| n.checked_add(RIFF_OVERHEAD_BYTES));
        if riff_bytes.map_or(true, |n| n > u32::MAX as usize) {
            return Err(ToneError::InvalidSpec(format!(
                "{} samples do not fit in a WAV file",
                self.sample_count()
            )));
        }
        if self.frequency_hz >= self.nyquist() {
            warn!(
                frequency_hz = self.frequency_hz,
                nyquist_hz = self.nyquist(),
                "tone frequency is at or above Nyquist and will alias"
            );
        }
        Ok(())
    }

    /// Half the sample rate.
    pub fn nyquist(&self) -> f64 {
        f64::from(self.sample_rate) / 2.0
    }

    /// Number of sample frames in the tone.
    pub fn sample_count(&self) -> usize {
        (f64::from(self.sample_rate) * self.duration_secs).round() as usize
    }

    /// Sample value at frame `index`.
    pub fn sample_at(&self, index: usize) -> i16 {
        let t = index as f64 / f64::from(self.sample_rate);
        let value = f64::from(self.amplitude) * (2.0 * PI * self.frequency_hz * t).sin();
        // |sin| <= 1, so the rounded value never exceeds the amplitude.
        value.round() as i16
    }

    /// All samples of the tone, in order.
    pub fn samples(&self) -> impl Iterator<Item = i16> + '_ {
        (0..self.sample_count()).map(move |i| self.sample_at(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spec() {
        let spec = ToneSpec::default();
        assert_eq!(spec.sample_rate, 44_100);
        assert_eq!(spec.frequency_hz, 880.0);
        assert_eq!(spec.amplitude, 32_767);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_sample_count() {
        assert_eq!(ToneSpec::default().sample_count(), 8820);

        let spec = ToneSpec {
            sample_rate: 8000,
            duration_secs: 0.5,
            ..ToneSpec::default()
        };
        assert_eq!(spec.sample_count(), 4000);
    }

    #[test]
    fn test_first_samples() {
        let spec = ToneSpec::default();
        assert_eq!(spec.sample_at(0), 0);

        let expected = (32767.0 * (2.0 * PI * 880.0 / 44100.0).sin()).round() as i16;
        assert_eq!(spec.sample_at(1), expected);
        assert!(spec.sample_at(1) > 0);
    }

    #[test]
    fn test_samples_within_amplitude() {
        let spec = ToneSpec::default();
        let samples: Vec<i16> = spec.samples().collect();
        assert_eq!(samples.len(), 8820);
        assert!(samples.iter().all(|&s| (-32767..=32767).contains(&s)));
        assert_eq!(samples.iter().copied().max(), Some(32767));
    }

    #[test]
    fn test_quarter_period_peak() {
        // 11025 Hz at 44.1 kHz puts a crest exactly on frame 1.
        let spec = ToneSpec {
            frequency_hz: 11_025.0,
            amplitude: 1000,
            ..ToneSpec::default()
        };
        assert_eq!(spec.sample_at(1), 1000);
        assert_eq!(spec.sample_at(3), -1000);
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        let bad = [
            ToneSpec {
                sample_rate: 0,
                ..ToneSpec::default()
            },
            ToneSpec {
                duration_secs: 0.0,
                ..ToneSpec::default()
            },
            ToneSpec {
                duration_secs: f64::NAN,
                ..ToneSpec::default()
            },
            ToneSpec {
                frequency_hz: -1.0,
                ..ToneSpec::default()
            },
            ToneSpec {
                amplitude: -5,
                ..ToneSpec::default()
            },
        ];
        for spec in bad {
            assert!(
                matches!(spec.validate(), Err(ToneError::InvalidSpec(_))),
                "accepted {:?}",
                spec
            );
        }
    }

    #[test]
    fn test_validate_rejects_tone_too_long_for_wav() {
        let spec = ToneSpec {
            duration_secs: 50_000.0,
            ..ToneSpec::default()
        };
        assert!(matches!(spec.validate(), Err(ToneError::InvalidSpec(_))));

        let huge = ToneSpec {
            duration_secs: 1e30,
            ..ToneSpec::default()
        };
        assert!(matches!(huge.validate(), Err(ToneError::InvalidSpec(_))));
    }

    #[test]
    fn test_validate_accepts_longest_tone() {
        // (u32::MAX - 36) / 2 frames is the largest data chunk a WAV holds.
        let max_frames = (u32::MAX as usize - RIFF_OVERHEAD_BYTES) / BYTES_PER_SAMPLE;
        let fits = ToneSpec {
            sample_rate: 1,
            duration_secs: max_frames as f64,
            ..ToneSpec::default()
        };
        assert!(fits.validate().is_ok());

        let over = ToneSpec {
            duration_secs: (max_frames + 1) as f64,
            ..fits
        };
        assert!(matches!(over.validate(), Err(ToneError::InvalidSpec(_))));
    }

    #[test]
    fn test_validate_allows_aliasing_frequency() {
        let spec = ToneSpec {
            frequency_hz: 30_000.0,
            ..ToneSpec::default()
        };
        assert!(spec.validate().is_ok());
    }
}
