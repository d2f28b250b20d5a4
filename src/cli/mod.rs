//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `netchime probe` - Check which SMTP ports are reachable
//! - `netchime tone` - Write the notification sound

mod probe;
mod tone;

pub use probe::ProbeCommand;
pub use tone::ToneCommand;

use crate::config::AppSettings;
use crate::error::CliResult;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// netchime - SMTP port probe and notification tone generator.
///
/// `probe` tries a TCP connection to each port of each host and reports
/// whether it is open, blocked, or failed. `tone` writes a short sine beep
/// as a WAV file.
#[derive(Parser, Debug)]
#[command(name = "netchime")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "SMTP port probe and notification tone generator", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug logs, progress bar)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to a JSON settings file
    #[arg(long, global = true, value_name = "PATH", env = "NETCHIME_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probe TCP ports on a list of hosts
    #[command(alias = "p")]
    Probe(ProbeCommand),

    /// Generate the notification tone WAV file
    #[command(alias = "t")]
    Tone(ToneCommand),
}

impl Cli {
    /// Default log filter for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }

    /// Load settings and run the selected subcommand.
    pub async fn execute(self) -> CliResult<()> {
        let settings = AppSettings::load(self.config.as_deref())?;

        match &self.command {
            Commands::Probe(cmd) => cmd.execute(&settings.probe, self.verbose).await,
            Commands::Tone(cmd) => cmd.execute(&settings.tone).map(|_| ()),
        }
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_probe_defaults() {
        let cli = Cli::try_parse_from(["netchime", "probe"]).unwrap();
        assert!(!cli.verbose);
        assert_eq!(cli.log_level(), "warn");
        match cli.command {
            Commands::Probe(cmd) => {
                assert_eq!(cmd.output, OutputFormat::Plain);
                assert!(cmd.hosts.is_empty());
                assert!(cmd.ports.is_none());
                assert!(cmd.timeout.is_none());
            }
            _ => panic!("expected probe"),
        }
    }

    #[test]
    fn test_parse_probe_flags() {
        let cli = Cli::try_parse_from([
            "netchime", "-v", "probe", "--host", "127.0.0.1", "--host", "example.com", "-p",
            "25,587", "-t", "500", "-o", "json",
        ])
        .unwrap();
        assert_eq!(cli.log_level(), "debug");
        match cli.command {
            Commands::Probe(cmd) => {
                assert_eq!(cmd.hosts, vec!["127.0.0.1", "example.com"]);
                assert_eq!(cmd.ports.as_deref(), Some("25,587"));
                assert_eq!(cmd.timeout, Some(500));
                assert_eq!(cmd.output, OutputFormat::Json);
            }
            _ => panic!("expected probe"),
        }
    }

    #[test]
    fn test_parse_tone_flags() {
        let cli = Cli::try_parse_from([
            "netchime",
            "tone",
            "--frequency",
            "440",
            "--duration",
            "0.5",
            "-o",
            "beep.wav",
            "--quiet",
        ])
        .unwrap();
        assert_eq!(cli.log_level(), "error");
        match cli.command {
            Commands::Tone(cmd) => {
                assert_eq!(cmd.frequency, Some(440.0));
                assert_eq!(cmd.duration, Some(0.5));
                assert_eq!(cmd.output, Some(PathBuf::from("beep.wav")));
                assert_eq!(cmd.sample_rate, None);
            }
            _ => panic!("expected tone"),
        }
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["netchime", "-v", "-q", "tone"]).is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["netchime"]).is_err());
    }
}
