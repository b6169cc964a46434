//! Configuration for the helpdesk console.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::forms::Settings;

/// User configuration (`config.yml`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Delay before a submitted ticket sends the user back to the dashboard.
    pub redirect_delay_ms: u64,
    /// How long a toast stays on screen.
    pub toast_ttl_ms: u64,
    /// Maximum number of toasts shown at once.
    pub toast_limit: usize,
    /// Identifier quoted in the new-ticket confirmation.
    pub next_ticket_id: String,
    /// Recipient shown on the email intake tab.
    pub support_email: String,
    /// Colour badges and charts.
    pub colors: bool,
    /// Initial values of the settings page.
    pub settings: Settings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redirect_delay_ms: 1500,
            toast_ttl_ms: 5000,
            toast_limit: 3,
            next_ticket_id: "TKT-2024-006".to_string(),
            support_email: "support@powergrid.com".to_string(),
            colors: true,
            settings: Settings::default(),
        }
    }
}

impl Config {
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms)
    }

    /// Parse a config file. Errors when the file is unreadable or invalid.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Write the config as YAML, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let yaml = serde_yaml::to_string(self).context("Failed to serialize config")?;
        fs::write(path, yaml).context("Failed to write config file")?;
        Ok(())
    }
}

/// Default config location (`<config dir>/helpdesk/config.yml`).
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "helpdesk").map(|dirs| dirs.config_dir().join("config.yml"))
}

/// Load from `explicit` or the default location.
///
/// A missing file yields defaults. A broken file is reported and ignored.
pub fn load_config(explicit: Option<&Path>) -> Config {
    let path = match explicit.map(Path::to_path_buf).or_else(config_path) {
        Some(path) => path,
        None => {
            debug!("no config directory available, using defaults");
            return Config::default();
        }
    };

    if !path.exists() {
        debug!(path = %path.display(), "config not found, using defaults");
        return Config::default();
    }

    match Config::from_file(&path) {
        Ok(config) => {
            debug!(path = %path.display(), "loaded config");
            config
        }
        Err(e) => {
            warn!("{:#}", e);
            Config::default()
        }
    }
}
