//! Application settings and paths.
//!
//! Settings live in an optional JSON file. Every field has a default, so a
//! missing file or a partial file is fine.

use crate::error::{ConfigError, ConfigResult};
use crate::tone::ToneSpec;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application directory paths following XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/netchime)
    pub config_dir: PathBuf,
}

impl Paths {
    /// Locate the XDG directories, if the platform has a home directory.
    pub fn discover() -> Option<Self> {
        let project = ProjectDirs::from("com", "netchime", "netchime")?;
        Some(Self {
            config_dir: project.config_dir().to_path_buf(),
        })
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// Defaults for `netchime probe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeSettings {
    /// Hosts to probe, in order.
    pub hosts: Vec<String>,
    /// Port specification, e.g. "25,465,587,2525".
    pub ports: String,
    /// Per-attempt timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            hosts: vec!["smtp.gmail.com".to_string(), "8.8.8.8".to_string()],
            ports: "25,465,587,2525".to_string(),
            timeout_ms: 3000,
        }
    }
}

/// Defaults for `netchime tone`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneSettings {
    #[serde(flatten)]
    pub spec: ToneSpec,
    /// Output file.
    pub output: PathBuf,
}

impl Default for ToneSettings {
    fn default() -> Self {
        Self {
            spec: ToneSpec::default(),
            output: PathBuf::from("notification.wav"),
        }
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub probe: ProbeSettings,
    pub tone: ToneSettings,
}

impl AppSettings {
    /// Load settings.
    ///
    /// An explicit path must exist. Otherwise the XDG settings file is used
    /// when present, and the built-in defaults when not.
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Paths::discover().map(|p| p.settings_file()) {
            Some(file) if file.exists() => Self::load_from(&file),
            _ => {
                debug!("no settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let settings = serde_json::from_str(&content)?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }
}
