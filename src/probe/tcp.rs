//! TCP connect prober.
//!
//! Resolves the host, then performs a full TCP connect bounded by the
//! configured timeout. The stream is dropped as soon as the handshake
//! completes, so every attempt releases its socket before returning.

use crate::probe::traits::{ProbeResult, ProbeStatus, Prober};
use crate::types::{Host, Port};
use async_trait::async_trait;
use std::io;
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::TokioAsyncResolver;

/// TCP connect prober.
///
/// Does not require elevated privileges.
pub struct TcpProber {
    resolver: TokioAsyncResolver,
    timeout: Duration,
}

impl TcpProber {
    /// Create a prober using the system resolver configuration.
    ///
    /// Falls back to the resolver defaults when the system configuration
    /// cannot be read. Lookups share the connect timeout.
    pub fn new(timeout: Duration) -> Self {
        let (config, mut opts) = trust_dns_resolver::system_conf::read_system_conf()
            .unwrap_or_else(|e| {
                debug!(error = %e, "using default resolver configuration");
                (ResolverConfig::default(), ResolverOpts::default())
            });
        opts.timeout = timeout;

        Self {
            resolver: TokioAsyncResolver::tokio(config, opts),
            timeout,
        }
    }

    /// Attempt to connect to the target address.
    async fn attempt_connect(&self, addr: SocketAddr) -> ProbeStatus {
        match timeout(self.timeout, TcpStream::connect(addr)).await {
            Ok(Ok(stream)) => {
                drop(stream);
                ProbeStatus::Open
            }
            Ok(Err(e)) => classify_connect_error(&e),
            // A non-blocking connect that never completed: EWOULDBLOCK.
            Err(_) => ProbeStatus::Blocked {
                code: libc::EWOULDBLOCK,
            },
        }
    }
}

/// Map a failed connect to a status: OS-level failures carry their error
/// code, anything else is reported by message.
fn classify_connect_error(err: &io::Error) -> ProbeStatus {
    match err.raw_os_error() {
        Some(code) => ProbeStatus::Blocked { code },
        None => ProbeStatus::Error {
            message: err.to_string(),
        },
    }
}

#[async_trait]
impl Prober for TcpProber {
    async fn probe(&self, host: &Host, port: Port) -> ProbeResult {
        let start = Instant::now();

        let status = match host.resolve(&self.resolver).await {
            Ok(ip) => self.attempt_connect(SocketAddr::new(ip, port.as_u16())).await,
            Err(e) => ProbeStatus::Error {
                message: e.to_string(),
            },
        };

        let elapsed = start.elapsed().as_millis() as u64;
        debug!(%host, %port, status = %status, elapsed_ms = elapsed, "probe finished");

        ProbeResult::new(host.clone(), port, status).with_response_time(elapsed)
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}
