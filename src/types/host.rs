//! Probe host type with name resolution.
//!
//! A `Host` is kept exactly as the user typed it (an IP literal or a
//! domain name). Resolution happens at probe time so that a lookup failure
//! is reported against the pair being probed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use trust_dns_resolver::TokioAsyncResolver;

/// Error type for host parsing and resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("empty host")]
    Empty,
    #[error("failed to resolve host '{0}': {1}")]
    Resolution(String, String),
    #[error("no IP addresses found for host '{0}'")]
    NoAddresses(String),
}

/// A host to probe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Host {
    /// An IP literal, used as-is.
    Ip(IpAddr),
    /// A domain name, resolved before each connect.
    Name(String),
}

impl Host {
    /// Parse a host from user input.
    pub fn parse(s: &str) -> Result<Self, HostError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(HostError::Empty);
        }

        match s.parse::<IpAddr>() {
            Ok(ip) => Ok(Self::Ip(ip)),
            Err(_) => Ok(Self::Name(s.to_string())),
        }
    }

    /// Resolve to a single IP address.
    ///
    /// IPv4 results are preferred; otherwise the first address returned
    /// by the resolver is used.
    pub async fn resolve(&self, resolver: &TokioAsyncResolver) -> Result<IpAddr, HostError> {
        let name = match self {
            Self::Ip(ip) => return Ok(*ip),
            Self::Name(name) => name,
        };

        let response = resolver
            .lookup_ip(name.as_str())
            .await
            .map_err(|e| HostError::Resolution(name.clone(), e.to_string()))?;

        let ips: Vec<IpAddr> = response.iter().collect();
        pick_address(&ips).ok_or_else(|| HostError::NoAddresses(name.clone()))
    }
}

fn pick_address(ips: &[IpAddr]) -> Option<IpAddr> {
    ips.iter()
        .find(|ip| ip.is_ipv4())
        .or_else(|| ips.first())
        .copied()
}

impl FromStr for Host {
    type Err = HostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Host {
    type Error = HostError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Host> for String {
    fn from(host: Host) -> Self {
        host.to_string()
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ip(ip) => write!(f, "{}", ip),
            Self::Name(name) => write!(f, "{}", name),
        }
    }
}
