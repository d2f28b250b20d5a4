//! Port types with validation and parsing.
//!
//! The `Port` newtype ensures values are always valid port numbers (1-65535).
//! `PortSpec` handles lists such as "25,465,587,2525" or "2525-2530".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated network port number (1-65535).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Port(u16);

impl Port {
    /// Minimum valid port number.
    pub const MIN: u16 = 1;
    /// Maximum valid port number.
    pub const MAX: u16 = 65535;

    /// Create a new Port from a u16, returning None for port 0.
    #[inline]
    pub const fn new(port: u16) -> Option<Self> {
        if port >= Self::MIN {
            Some(Self(port))
        } else {
            None
        }
    }

    /// Get the raw port number.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for Port {
    type Error = PortError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(PortError::OutOfRange(value))
    }
}

impl From<Port> for u16 {
    fn from(port: Port) -> Self {
        port.0
    }
}

/// Error type for port parsing and validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    #[error("port {0} is out of valid range (1-65535)")]
    OutOfRange(u16),
    #[error("invalid port number: {0}")]
    InvalidFormat(String),
    #[error("invalid port range: start ({0}) > end ({1})")]
    InvalidRange(u16, u16),
    #[error("empty port specification")]
    Empty,
}

/// An inclusive range of ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PortRange {
    start: Port,
    end: Port,
}

impl PortRange {
    fn new(start: Port, end: Port) -> Result<Self, PortError> {
        if start > end {
            Err(PortError::InvalidRange(start.0, end.0))
        } else {
            Ok(Self { start, end })
        }
    }

    const fn single(port: Port) -> Self {
        Self {
            start: port,
            end: port,
        }
    }

    fn iter(&self) -> impl Iterator<Item = Port> {
        // Both bounds are >= 1, so every value in between is a valid port.
        (self.start.0..=self.end.0).map(Port)
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// A port specification made of single ports and ranges.
///
/// Supports formats like:
/// - Single port: "25"
/// - Comma-separated: "25,465,587"
/// - Range: "2525-2530"
/// - Mixed: "25,587,2525-2530"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortSpec {
    ranges: Vec<PortRange>,
}

impl PortSpec {
    /// The SMTP submission/relay ports probed by default.
    pub const SMTP: [u16; 4] = [25, 465, 587, 2525];

    /// The default SMTP port set.
    pub fn smtp() -> Self {
        Self {
            ranges: Self::SMTP
                .iter()
                .filter_map(|&p| Port::new(p))
                .map(PortRange::single)
                .collect(),
        }
    }

    /// Get all ports as a sorted, deduplicated vector.
    pub fn to_ports(&self) -> Vec<Port> {
        let mut ports: Vec<Port> = self.ranges.iter().flat_map(|r| r.iter()).collect();
        ports.sort_unstable();
        ports.dedup();
        ports
    }

    /// Get the total number of unique ports.
    pub fn count(&self) -> usize {
        self.to_ports().len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

fn parse_port(s: &str) -> Result<Port, PortError> {
    let s = s.trim();
    let value: u16 = s
        .parse()
        .map_err(|_| PortError::InvalidFormat(s.to_string()))?;
    Port::new(value).ok_or(PortError::OutOfRange(value))
}

impl FromStr for PortSpec {
    type Err = PortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PortError::Empty);
        }

        let mut ranges = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            let range = match part.split_once('-') {
                Some((start, end)) => PortRange::new(parse_port(start)?, parse_port(end)?)?,
                None => PortRange::single(parse_port(part)?),
            };
            ranges.push(range);
        }

        Ok(Self { ranges })
    }
}

impl fmt::Display for PortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.ranges.iter().map(|r| r.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_validation() {
        assert!(Port::new(0).is_none());
        assert!(Port::new(1).is_some());
        assert!(Port::new(25).is_some());
        assert!(Port::new(65535).is_some());
        assert_eq!(Port::try_from(0), Err(PortError::OutOfRange(0)));
    }

    #[test]
    fn test_smtp_defaults() {
        let ports: Vec<u16> = PortSpec::smtp().to_ports().into_iter().map(u16::from).collect();
        assert_eq!(ports, vec![25, 465, 587, 2525]);
        assert_eq!(PortSpec::smtp().to_string(), "25,465,587,2525");
    }

    #[test]
    fn test_port_spec_parsing() {
        let spec: PortSpec = "25".parse().unwrap();
        assert_eq!(spec.count(), 1);

        let spec: PortSpec = "25,465".parse().unwrap();
        assert_eq!(spec.count(), 2);

        let spec: PortSpec = "2525-2530".parse().unwrap();
        assert_eq!(spec.count(), 6);

        let spec: PortSpec = "25, 587, 2525-2527".parse().unwrap();
        assert_eq!(spec.count(), 5);
    }

    #[test]
    fn test_port_spec_sorted_and_dedup() {
        let spec: PortSpec = "587,25,587,25".parse().unwrap();
        let ports: Vec<u16> = spec.to_ports().into_iter().map(u16::from).collect();
        assert_eq!(ports, vec![25, 587]);
    }

    #[test]
    fn test_port_spec_errors() {
        assert_eq!("".parse::<PortSpec>(), Err(PortError::Empty));
        assert_eq!("0".parse::<PortSpec>(), Err(PortError::OutOfRange(0)));
        assert_eq!(
            "smtp".parse::<PortSpec>(),
            Err(PortError::InvalidFormat("smtp".to_string()))
        );
        assert_eq!(
            "600-500".parse::<PortSpec>(),
            Err(PortError::InvalidRange(600, 500))
        );
        assert!("70000".parse::<PortSpec>().is_err());
    }
}
