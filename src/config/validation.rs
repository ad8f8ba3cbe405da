//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, ports valid, hosts non-empty)
//! - Check that every target parses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::AppConfig;
use crate::probe::{ConnectionString, ProbeError};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("default_target.host must not be empty")]
    EmptyDefaultHost,

    #[error("default_target.port must be between 1 and 65535")]
    ZeroDefaultPort,

    #[error("timeouts.{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("target '{target}': {source}")]
    InvalidTarget { target: String, source: ProbeError },

    #[error("observability.log_level '{0}' is not a valid filter")]
    InvalidLogLevel(String),
}

pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.targets.is_empty() {
        if config.default_target.host.trim().is_empty() {
            errors.push(ValidationError::EmptyDefaultHost);
        }
        if config.default_target.port == 0 {
            errors.push(ValidationError::ZeroDefaultPort);
        }
    }

    if config.timeouts.connect_timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout("connect_timeout_ms"));
    }
    if config.timeouts.selection_timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout("selection_timeout_ms"));
    }

    for target in &config.targets {
        if let Err(source) = target.parse::<ConnectionString>() {
            errors.push(ValidationError::InvalidTarget {
                target: target.clone(),
                source,
            });
        }
    }

    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(validate_config(&AppConfig::default()), Ok(()));
    }

    #[test]
    fn collects_every_error() {
        let mut config = AppConfig::default();
        config.default_target.host = String::new();
        config.default_target.port = 0;
        config.timeouts.connect_timeout_ms = 0;
        config.timeouts.selection_timeout_ms = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyDefaultHost,
                ValidationError::ZeroDefaultPort,
                ValidationError::ZeroTimeout("connect_timeout_ms"),
                ValidationError::ZeroTimeout("selection_timeout_ms"),
            ]
        );
    }

    #[test]
    fn default_target_ignored_when_targets_given() {
        let mut config = AppConfig::default();
        config.default_target.host = String::new();
        config.targets = vec!["localhost:27017".into()];
        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn reports_bad_targets() {
        let mut config = AppConfig::default();
        config.targets = vec![
            "localhost:27017".into(),
            "mongodb://a,b".into(),
            "localhost:0".into(),
        ];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].to_string().contains("mongodb://a,b"));
        assert!(matches!(
            &errors[1],
            ValidationError::InvalidTarget { source: ProbeError::ZeroPort, .. }
        ));
    }

    #[test]
    fn rejects_bad_log_filter() {
        let mut config = AppConfig::default();
        config.observability.log_level = "reachability_probe=loud".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidLogLevel(_)));
    }
}
