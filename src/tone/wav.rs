//! WAV export.
//!
//! Writes mono 16-bit integer PCM through `hound`. The container carries no
//! timestamps or metadata, so the same `ToneSpec` always encodes to the
//! same bytes.

use super::ToneSpec;
use crate::error::ToneResult;
use hound::{SampleFormat, WavSpec, WavWriter};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Channel count of the generated file.
pub const CHANNELS: u16 = 1;
/// Bits per sample of the generated file.
pub const BITS_PER_SAMPLE: u16 = 16;

/// What was written by `write_file`.
#[derive(Debug, Clone, Serialize)]
pub struct ToneSummary {
    pub path: PathBuf,
    pub frames: usize,
    pub data_bytes: usize,
}

fn wav_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}

/// Write all samples of `tone` to `writer` and finalize the header.
fn write_samples<W: Write + Seek>(writer: W, tone: &ToneSpec) -> ToneResult<usize> {
    let mut wav = WavWriter::new(writer, wav_spec(tone.sample_rate))?;
    let mut frames = 0;
    for sample in tone.samples() {
        wav.write_sample(sample)?;
        frames += 1;
    }
    wav.finalize()?;

    Ok(frames)
}

/// Encode `tone` as a complete WAV file in memory.
pub fn encode(tone: &ToneSpec) -> ToneResult<Vec<u8>> {
    tone.validate()?;

    let mut buf = Vec::new();
    write_samples(Cursor::new(&mut buf), tone)?;
    Ok(buf)
}

/// Create or overwrite `path` with `tone` as a WAV file.
///
/// The file is flushed and closed before this returns successfully.
pub fn write_file(tone: &ToneSpec, path: &Path) -> ToneResult<ToneSummary> {
    tone.validate()?;

    let file = BufWriter::new(File::create(path)?);
    let frames = write_samples(file, tone)?;

    let summary = ToneSummary {
        path: path.to_path_buf(),
        frames,
        data_bytes: frames * usize::from(BITS_PER_SAMPLE / 8),
    };
    info!(
        path = %summary.path.display(),
        frames = summary.frames,
        sample_rate = tone.sample_rate,
        "wrote tone"
    );

    Ok(summary)
}
