//! Error types for netchime.
//!
//! Uses `thiserror` for ergonomic error definitions. Probe failures are not
//! errors: they are reported as `ProbeStatus` values. Only setup problems
//! and tone generation failures surface through these types.

use crate::types::{HostError, PortError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while generating or writing a tone.
#[derive(Error, Debug)]
pub enum ToneError {
    #[error("invalid tone parameters: {0}")]
    InvalidSpec(String),

    #[error("WAV encoding failed: {0}")]
    Wav(#[from] hound::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for tone operations.
pub type ToneResult<T> = Result<T, ToneError>;

/// Errors raised while loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read settings from {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidFormat(err.to_string())
    }
}

/// Top-level error for subcommand execution.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Tone(#[from] ToneError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid port specification: {0}")]
    Port(#[from] PortError),

    #[error("invalid host: {0}")]
    Host(#[from] HostError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CliError::from(PortError::OutOfRange(0));
        assert_eq!(
            err.to_string(),
            "invalid port specification: port 0 is out of valid range (1-65535)"
        );

        let err = CliError::from(ToneError::InvalidSpec("sample rate must be positive".into()));
        assert_eq!(
            err.to_string(),
            "invalid tone parameters: sample rate must be positive"
        );
    }
}
