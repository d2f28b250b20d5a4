//! Port probe module.
//!
//! Walks every (host, port) pair strictly in order, one connection attempt
//! at a time, and collects the outcome of each attempt.

pub mod tcp;
pub mod traits;

pub use tcp::TcpProber;
pub use traits::{ProbeResult, ProbeStatus, Prober};

use crate::types::{Host, Port};
use serde::Serialize;
use std::time::Instant;
use tracing::info;

/// Progress notifications emitted while a probe run is in flight.
#[derive(Debug, Clone, Copy)]
pub enum ProbeEvent<'a> {
    /// About to probe the ports of this host.
    HostStarted(&'a Host),
    /// One attempt finished.
    Result(&'a ProbeResult),
}

/// All results of a probe run.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub hosts: usize,
    pub ports: Vec<Port>,
    pub timeout_ms: u64,
    pub open: usize,
    pub blocked: usize,
    pub errors: usize,
    pub duration_ms: u64,
    pub results: Vec<ProbeResult>,
}

impl ProbeReport {
    fn new(hosts: usize, ports: &[Port], timeout_ms: u64) -> Self {
        Self {
            hosts,
            ports: ports.to_vec(),
            timeout_ms,
            open: 0,
            blocked: 0,
            errors: 0,
            duration_ms: 0,
            results: Vec::with_capacity(hosts * ports.len()),
        }
    }

    fn record(&mut self, result: ProbeResult) {
        match result.status {
            ProbeStatus::Open => self.open += 1,
            ProbeStatus::Blocked { .. } => self.blocked += 1,
            ProbeStatus::Error { .. } => self.errors += 1,
        }
        self.results.push(result);
    }

    /// Results for a single host, in port order.
    pub fn for_host<'a>(&'a self, host: &'a Host) -> impl Iterator<Item = &'a ProbeResult> {
        self.results.iter().filter(move |r| &r.host == host)
    }
}

/// Probe every port of every host, sequentially.
///
/// Hosts are visited in the order given, ports in the order given within
/// each host. `on_event` sees each host before its first attempt and each
/// result as soon as it is known.
pub async fn run_probe<P, F>(
    prober: &P,
    hosts: &[Host],
    ports: &[Port],
    mut on_event: F,
) -> ProbeReport
where
    P: Prober + ?Sized,
    F: FnMut(ProbeEvent<'_>),
{
    let start_time = Instant::now();
    let mut report = ProbeReport::new(hosts.len(), ports, prober.timeout().as_millis() as u64);

    for host in hosts {
        on_event(ProbeEvent::HostStarted(host));

        for &port in ports {
            let result = prober.probe(host, port).await;
            on_event(ProbeEvent::Result(&result));
            report.record(result);
        }
    }

    report.duration_ms = start_time.elapsed().as_millis() as u64;

    info!(
        hosts = report.hosts,
        ports = ports.len(),
        open = report.open,
        blocked = report.blocked,
        errors = report.errors,
        duration_ms = report.duration_ms,
        "probe run complete"
    );

    report
}
