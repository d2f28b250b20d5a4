//! Prober trait abstraction and probe result types.

use crate::services::get_service_name;
use crate::types::{Host, Port};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Outcome of a single connection attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ProbeStatus {
    /// The TCP handshake completed.
    Open,
    /// The connect call failed with an OS error code (refused, unreachable,
    /// timed out).
    Blocked { code: i32 },
    /// Anything else, such as a failed name lookup.
    Error { message: String },
}

impl ProbeStatus {
    /// Short status label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Blocked { .. } => "BLOCKED",
            Self::Error { .. } => "ERROR",
        }
    }

    /// ASCII marker printed in front of the status line.
    pub fn marker(&self) -> char {
        match self {
            Self::Open => '+',
            Self::Blocked { .. } | Self::Error { .. } => 'x',
        }
    }

    /// Check if the port accepted the connection.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Blocked { code } => write!(f, "BLOCKED (error: {})", code),
            Self::Error { message } => write!(f, "ERROR - {}", message),
        }
    }
}

/// Result of probing one (host, port) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    /// The host as given by the user.
    pub host: Host,
    /// The port that was probed.
    pub port: Port,
    /// Well-known service name for the port.
    pub service: String,
    /// Outcome of the attempt.
    #[serde(flatten)]
    pub status: ProbeStatus,
    /// Time spent on the attempt, resolution included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
}

impl ProbeResult {
    /// Create a new probe result.
    pub fn new(host: Host, port: Port, status: ProbeStatus) -> Self {
        Self {
            service: get_service_name(port.as_u16()).to_string(),
            host,
            port,
            status,
            response_time_ms: None,
        }
    }

    /// Set the response time.
    pub fn with_response_time(mut self, time_ms: u64) -> Self {
        self.response_time_ms = Some(time_ms);
        self
    }

    /// Render the plain-text status line, e.g. `+ Port 25: OPEN`.
    pub fn line(&self) -> String {
        format!("{} Port {}: {}", self.status.marker(), self.port, self.status)
    }
}

/// Trait for connection probes.
///
/// The TCP implementation talks to the network; tests substitute their own
/// implementation to drive `run_probe` deterministically.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Probe a single (host, port) pair. Never fails: every outcome is a
    /// `ProbeStatus`.
    async fn probe(&self, host: &Host, port: Port) -> ProbeResult;

    /// Get the per-attempt timeout.
    fn timeout(&self) -> Duration;
}
