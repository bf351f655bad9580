//! Upstream connection configuration.
//!
//! Resolved once at startup and injected into the transport; nothing below
//! the entry point reads the environment.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ReachyError;

/// Default robot hostname on the local network.
pub const DEFAULT_HOST: &str = "reachy-mini.home";

/// Default daemon port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Connection settings for the robot daemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReachyConfig {
    /// Daemon hostname or IP address
    pub host: String,
    /// Daemon HTTP port
    pub port: u16,
    /// Timeout applied to every upstream request
    pub timeout_ms: u64,
}

impl Default for ReachyConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ReachyConfig {
    /// Base URL of the daemon REST API.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Apply explicit overrides (CLI flags or their env fallbacks) on top of this config.
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        timeout_ms: Option<u64>,
    ) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(timeout_ms) = timeout_ms {
            self.timeout_ms = timeout_ms;
        }
        self
    }
}

/// Load configuration with priority:
/// 1. TOML file at `path`, when one is given
/// 2. Built-in defaults
///
/// A path that was asked for but cannot be read or parsed is an error.
pub fn load_config(path: Option<&Path>) -> Result<ReachyConfig, ReachyError> {
    let Some(path) = path else {
        return Ok(ReachyConfig::default());
    };

    let contents = std::fs::read_to_string(path).map_err(|e| {
        ReachyError::Config(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let config = toml::from_str::<ReachyConfig>(&contents)?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}
