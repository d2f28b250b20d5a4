//! Tone subcommand implementation.
//!
//! Handles the `netchime tone` command.

use crate::config::ToneSettings;
use crate::error::CliResult;
use crate::output;
use crate::tone::{self, ToneSpec, ToneSummary};
use clap::Parser;
use std::io;
use std::path::PathBuf;

/// Generate the notification tone WAV file.
#[derive(Parser, Debug)]
pub struct ToneCommand {
    /// Output WAV file [default: notification.wav]
    #[arg(short, long, value_name = "PATH", env = "NETCHIME_TONE_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Sample rate in Hz [default: 44100]
    #[arg(long, value_name = "HZ")]
    pub sample_rate: Option<u32>,

    /// Tone length in seconds [default: 0.2]
    #[arg(long, value_name = "SECS")]
    pub duration: Option<f64>,

    /// Tone frequency in Hz [default: 880]
    #[arg(long, value_name = "HZ")]
    pub frequency: Option<f64>,

    /// Peak sample value, 0-32767 [default: 32767]
    #[arg(long, value_parser = clap::value_parser!(i16).range(0..))]
    pub amplitude: Option<i16>,
}

impl ToneCommand {
    /// Merge flags over settings.
    pub fn spec(&self, settings: &ToneSettings) -> ToneSpec {
        let base = settings.spec;
        ToneSpec {
            sample_rate: self.sample_rate.unwrap_or(base.sample_rate),
            duration_secs: self.duration.unwrap_or(base.duration_secs),
            frequency_hz: self.frequency.unwrap_or(base.frequency_hz),
            amplitude: self.amplitude.unwrap_or(base.amplitude),
        }
    }

    /// Execute the tone command.
    pub fn execute(&self, settings: &ToneSettings) -> CliResult<ToneSummary> {
        let spec = self.spec(settings);
        let path = self.output.as_ref().unwrap_or(&settings.output);

        let summary = tone::write_file(&spec, path)?;
        output::write_tone_written(&mut io::stdout().lock(), &summary)?;

        Ok(summary)
    }
}
