//! Errors raised while building probe inputs.

use thiserror::Error;

/// Invalid probe target, timeout, or connection string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// Target host is empty.
    #[error("host must not be empty")]
    EmptyHost,

    /// Port 0 is not a connectable port.
    #[error("port must be between 1 and 65535")]
    ZeroPort,

    /// Port is not a number in range.
    #[error("invalid port '{0}'")]
    MalformedPort(String),

    /// Address could not be split into host and port.
    #[error("invalid address '{0}'")]
    MalformedAddress(String),

    /// Timeouts must be strictly positive.
    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    /// Connection string could not be parsed.
    #[error("invalid connection string: {0}")]
    InvalidUri(String),

    #[error("unsupported scheme '{0}', expected 'mongodb'")]
    UnsupportedScheme(String),

    /// Seed lists require topology discovery, which is not performed.
    #[error("connection string names more than one host")]
    MultipleHosts,

    #[error("invalid value '{value}' for option '{key}'")]
    InvalidOption { key: String, value: String },
}
