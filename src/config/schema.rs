//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files, and
//! every field has a default so an empty file is a valid config.

use serde::{Deserialize, Serialize};

use crate::probe::target::{ProbeTarget, DEFAULT_HOST, DEFAULT_PORT};
use crate::probe::{ConnectionString, ProbeConfig, ProbeError};

/// Root configuration for the prober.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Targets to probe: `host:port` or `mongodb://` connection strings.
    /// When empty, `default_target` is probed.
    pub targets: Vec<String>,

    /// Target used when no explicit targets are given.
    pub default_target: DefaultTargetConfig,

    /// Timeout budget applied to every target.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Targets to probe, falling back to `default_target`.
    pub fn connection_strings(&self) -> Result<Vec<ConnectionString>, ProbeError> {
        if self.targets.is_empty() {
            let target = ProbeTarget::new(self.default_target.host.clone(), self.default_target.port)?;
            return Ok(vec![ConnectionString::from_target(target)]);
        }
        self.targets.iter().map(|t| t.parse()).collect()
    }

    /// Each target paired with its effective timeouts.
    pub fn probe_plan(&self) -> Result<Vec<(ConnectionString, ProbeConfig)>, ProbeError> {
        let base = self.timeouts.probe_config()?;
        self.connection_strings()?
            .into_iter()
            .map(|cs| {
                let config = cs.probe_config(&base)?;
                Ok((cs, config))
            })
            .collect()
    }
}

/// Default target, overridable through `MONGODB_HOST` / `MONGODB_PORT`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DefaultTargetConfig {
    pub host: String,
    pub port: u16,
}

impl Default for DefaultTargetConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Probe timeouts in milliseconds.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Bound on each connection attempt.
    pub connect_timeout_ms: u64,

    /// Bound on finding a reachable address for a target.
    pub selection_timeout_ms: u64,
}

impl TimeoutConfig {
    pub fn probe_config(&self) -> Result<ProbeConfig, ProbeError> {
        ProbeConfig::new(self.connect_timeout_ms, self.selection_timeout_ms)
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: ProbeConfig::DEFAULT_CONNECT_TIMEOUT_MS,
            selection_timeout_ms: ProbeConfig::DEFAULT_SELECTION_TIMEOUT_MS,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter (a level such as `info`, or full `EnvFilter` directives).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
