//! Every probe attempt must give its socket back, whatever the outcome.
//!
//! Kept in its own test binary so no other test opens descriptors while the
//! count is taken.

#![cfg(target_os = "linux")]

use netchime::probe::{run_probe, ProbeStatus, TcpProber};
use netchime::types::{Host, Port};
use std::fs;
use std::time::Duration;
use tokio::net::TcpListener;

fn open_fds() -> usize {
    fs::read_dir("/proc/self/fd").unwrap().count()
}

#[tokio::test]
async fn full_run_releases_every_socket() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let open_port = Port::new(listener.local_addr().unwrap().port()).unwrap();

    let closed = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let closed_port = Port::new(closed.local_addr().unwrap().port()).unwrap();
    drop(closed);

    let prober = TcpProber::new(Duration::from_millis(500));
    let hosts = vec![
        Host::parse("127.0.0.1").unwrap(),
        Host::parse("127.0.0.1").unwrap(),
    ];
    let ports = vec![open_port, closed_port];

    // Warm-up pass so lazily created runtime resources are not counted.
    run_probe(&prober, &hosts, &ports, |_| {}).await;

    let before = open_fds();
    let report = run_probe(&prober, &hosts, &ports, |_| {}).await;
    let after = open_fds();

    assert_eq!(report.results.len(), 4);
    assert_eq!(report.open, 2);
    assert!(report
        .results
        .iter()
        .filter(|r| r.port == closed_port)
        .all(|r| matches!(r.status, ProbeStatus::Blocked { .. })));
    assert_eq!(before, after);
}
