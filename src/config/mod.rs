//! Configuration management for netchime.
//!
//! Loads optional JSON settings from an explicit path or the XDG config
//! directory. Command-line flags and environment variables override them.

mod settings;

pub use settings::{AppSettings, Paths, ProbeSettings, ToneSettings};
