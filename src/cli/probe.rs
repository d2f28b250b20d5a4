//! Probe subcommand implementation.
//!
//! Handles the `netchime probe` command.

use crate::cli::OutputFormat;
use crate::config::ProbeSettings;
use crate::error::{CliError, CliResult};
use crate::output;
use crate::probe::{run_probe, ProbeEvent, TcpProber};
use crate::types::{Host, Port, PortSpec};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::time::Duration;

/// Probe TCP ports on a list of hosts.
#[derive(Parser, Debug)]
pub struct ProbeCommand {
    /// Host to probe, IP address or hostname (repeatable)
    ///
    /// Defaults to smtp.gmail.com and 8.8.8.8.
    #[arg(long = "host", value_name = "HOST", env = "NETCHIME_HOSTS", value_delimiter = ',')]
    pub hosts: Vec<String>,

    /// Ports to probe (e.g., "25", "25,587", "2525-2530") [default: 25,465,587,2525]
    #[arg(short, long, env = "NETCHIME_PORTS")]
    pub ports: Option<String>,

    /// Connection timeout per attempt in milliseconds [default: 3000]
    #[arg(short = 't', long, value_name = "MS", env = "NETCHIME_TIMEOUT_MS")]
    pub timeout: Option<u64>,

    /// Output format for results
    #[arg(short, long, value_enum, default_value = "plain")]
    pub output: OutputFormat,
}

/// Fully resolved probe parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProbePlan {
    pub hosts: Vec<Host>,
    pub ports: Vec<Port>,
    pub timeout: Duration,
}

impl ProbeCommand {
    /// Merge flags over settings and validate the result.
    pub(crate) fn plan(&self, settings: &ProbeSettings) -> CliResult<ProbePlan> {
        let host_strs = if self.hosts.is_empty() {
            &settings.hosts
        } else {
            &self.hosts
        };
        let hosts = host_strs
            .iter()
            .map(|h| Host::parse(h))
            .collect::<Result<Vec<_>, _>>()?;
        if hosts.is_empty() {
            return Err(CliError::Other("no hosts to probe".to_string()));
        }

        let spec: PortSpec = self.ports.as_deref().unwrap_or(&settings.ports).parse()?;
        let ports = spec.to_ports();

        let timeout_ms = self.timeout.unwrap_or(settings.timeout_ms);
        if timeout_ms == 0 {
            return Err(CliError::Other("timeout must be at least 1 ms".to_string()));
        }

        Ok(ProbePlan {
            hosts,
            ports,
            timeout: Duration::from_millis(timeout_ms),
        })
    }

    /// Execute the probe command.
    ///
    /// Connection failures are part of the report, not errors: this only
    /// fails on bad parameters or when stdout cannot be written.
    pub async fn execute(&self, settings: &ProbeSettings, verbose: bool) -> CliResult<()> {
        let plan = self.plan(settings)?;
        tracing::debug!(
            hosts = plan.hosts.len(),
            ports = %PortList(&plan.ports),
            timeout_ms = plan.timeout.as_millis() as u64,
            "starting probe"
        );

        let progress = if verbose {
            let pb = ProgressBar::new((plan.hosts.len() * plan.ports.len()) as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .map_err(|e| CliError::Other(e.to_string()))?
                    .progress_chars("=>-"),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        let prober = TcpProber::new(plan.timeout);
        let stream_plain = self.output == OutputFormat::Plain;
        let stdout = io::stdout();
        let mut write_error: Option<io::Error> = None;

        let report = run_probe(&prober, &plan.hosts, &plan.ports, |event| {
            if let ProbeEvent::Result(result) = event {
                progress.inc(1);
                progress.set_message(format!("{}:{}", result.host, result.port));
            }
            if !stream_plain || write_error.is_some() {
                return;
            }
            let written = progress.suspend(|| {
                let mut out = stdout.lock();
                match event {
                    ProbeEvent::HostStarted(host) => output::write_host_header(&mut out, host),
                    ProbeEvent::Result(result) => output::write_result(&mut out, result),
                }
            });
            if let Err(e) = written {
                write_error = Some(e);
            }
        })
        .await;

        progress.finish_and_clear();

        if let Some(e) = write_error {
            return Err(e.into());
        }
        output::write_report(&mut stdout.lock(), &report, self.output)?;

        Ok(())
    }
}

/// Comma-separated port list for log fields.
struct PortList<'a>(&'a [Port]);

impl std::fmt::Display for PortList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|p| p.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}
