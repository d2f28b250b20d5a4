//! CSV output formatting.

use crate::probe::{ProbeReport, ProbeStatus};
use std::io::{self, Write};

/// Write one CSV row per probe result.
pub fn write_csv<W: Write>(out: W, report: &ProbeReport) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record([
        "host",
        "port",
        "service",
        "status",
        "code",
        "message",
        "response_time_ms",
    ])?;

    for result in &report.results {
        let (code, message) = match &result.status {
            ProbeStatus::Open => (String::new(), ""),
            ProbeStatus::Blocked { code } => (code.to_string(), ""),
            ProbeStatus::Error { message } => (String::new(), message.as_str()),
        };
        wtr.write_record([
            result.host.to_string().as_str(),
            result.port.to_string().as_str(),
            result.service.as_str(),
            result.status.label(),
            code.as_str(),
            message,
            result
                .response_time_ms
                .map_or(String::new(), |t| t.to_string())
                .as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
