//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV output of probe results.
//! Plain output is streamed as results arrive; JSON and CSV are written
//! once the whole report is known.

mod csv_format;
mod json_format;
mod plain;

pub use csv_format::write_csv;
pub use json_format::write_json;
pub use plain::{print_error, write_host_header, write_result, write_tone_written};

use crate::cli::OutputFormat;
use crate::probe::ProbeReport;
use std::io::{self, Write};

/// Write a finished report in a structured format.
///
/// Plain output has already been streamed, so nothing is written for it.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &ProbeReport,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Plain => Ok(()),
        OutputFormat::Json => write_json(out, report),
        OutputFormat::Csv => write_csv(out, report),
    }
}
