//! # netchime - SMTP Port Probe and Notification Tone
//!
//! Two small, independent tools:
//!
//! - **Port probe**: tries a TCP connection to each port of each host, one
//!   attempt at a time with a bounded timeout, and reports OPEN, BLOCKED
//!   (with the OS error code) or ERROR (with a message) per pair.
//! - **Tone generator**: synthesizes a short sine beep as 16-bit mono PCM and
//!   writes it to a WAV file.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use netchime::probe::{run_probe, TcpProber};
//! use netchime::types::{Host, PortSpec};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let prober = TcpProber::new(Duration::from_secs(3));
//!     let hosts = vec![Host::parse("smtp.gmail.com").unwrap()];
//!     let ports = PortSpec::smtp().to_ports();
//!
//!     let report = run_probe(&prober, &hosts, &ports, |_| {}).await;
//!     for result in &report.results {
//!         println!("{}", result.line());
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Validated port and host types
//! - [`probe`] - The `Prober` trait, the TCP prober and the probe loop
//! - [`tone`] - Sine synthesis and WAV export
//! - [`config`] - Optional JSON settings
//! - [`output`] - Plain, JSON and CSV formatters
//! - [`error`] - Error types

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod probe;
pub mod services;
pub mod tone;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, ToneError};
pub use probe::{ProbeResult, ProbeStatus, Prober};
pub use tone::ToneSpec;
pub use types::{Host, Port, PortSpec};
