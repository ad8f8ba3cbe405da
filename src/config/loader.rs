//! Configuration loading.
//!
//! Layers, lowest precedence first: schema defaults, TOML file, environment
//! (`MONGODB_HOST`, `MONGODB_PORT`), command-line overrides.

use std::fs;
use std::path::Path;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

pub const ENV_HOST: &str = "MONGODB_HOST";
pub const ENV_PORT: &str = "MONGODB_PORT";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Env { key: &'static str, value: String },
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Env { key, value } => {
                write!(f, "Invalid value '{}' for environment variable {}", value, key)
            }
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Replaces the configured targets when non-empty.
    pub targets: Vec<String>,
    pub connect_timeout_ms: Option<u64>,
    pub selection_timeout_ms: Option<u64>,
}

impl Overrides {
    pub fn apply(&self, config: &mut AppConfig) {
        if !self.targets.is_empty() {
            config.targets = self.targets.clone();
        }
        if let Some(ms) = self.connect_timeout_ms {
            config.timeouts.connect_timeout_ms = ms;
        }
        if let Some(ms) = self.selection_timeout_ms {
            config.timeouts.selection_timeout_ms = ms;
        }
    }
}

/// Parse a TOML document without validating it.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    toml::from_str(content).map_err(ConfigError::Parse)
}

/// Read a TOML file without validating it.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_config(&content)
}

/// Apply `MONGODB_HOST` / `MONGODB_PORT` through `lookup`.
///
/// Empty values are treated as unset.
pub fn apply_env<F>(config: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = lookup(ENV_HOST).filter(|v| !v.trim().is_empty()) {
        config.default_target.host = host.trim().to_string();
    }
    if let Some(port) = lookup(ENV_PORT).filter(|v| !v.trim().is_empty()) {
        config.default_target.port = port.trim().parse().map_err(|_| ConfigError::Env {
            key: ENV_PORT,
            value: port.clone(),
        })?;
    }
    Ok(())
}

/// Build the effective configuration from every layer and validate it.
pub fn load_config<F>(
    path: Option<&Path>,
    env: F,
    overrides: &Overrides,
) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => AppConfig::default(),
    };

    apply_env(&mut config, env)?;
    overrides.apply(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
