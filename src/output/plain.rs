//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use crate::probe::{ProbeResult, ProbeStatus};
use crate::tone::ToneSummary;
use crate::types::Host;
use console::{style, Style};
use std::io::{self, Write};

/// Write the banner that opens a host's block of results.
pub fn write_host_header<W: Write>(out: &mut W, host: &Host) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Testing {} ===", style(host).bold())
}

/// Write one status line, e.g. `+ Port 25: OPEN`.
pub fn write_result<W: Write>(out: &mut W, result: &ProbeResult) -> io::Result<()> {
    let status_style = match result.status {
        ProbeStatus::Open => Style::new().green().bold(),
        ProbeStatus::Blocked { .. } => Style::new().red(),
        ProbeStatus::Error { .. } => Style::new().yellow(),
    };

    writeln!(
        out,
        "{} Port {}: {}",
        status_style.apply_to(result.status.marker()),
        result.port,
        status_style.apply_to(&result.status)
    )
}

/// Write the completion message for a generated tone.
pub fn write_tone_written<W: Write>(out: &mut W, summary: &ToneSummary) -> io::Result<()> {
    writeln!(out, "Notification sound created!")?;
    writeln!(
        out,
        "{} {} ({} frames, {} bytes of audio)",
        style("•").dim(),
        style(summary.path.display()).white().bold(),
        summary.frames,
        summary.data_bytes
    )
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}
