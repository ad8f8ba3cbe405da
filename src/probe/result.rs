//! Probe outcomes.

use std::io;

use serde::Serialize;

/// Why a target could not be reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum UnreachableReason {
    /// No connection completed within the budget.
    Timeout,
    /// The remote end actively refused the connection.
    Refused,
    /// Any other transport or name resolution error.
    Other(String),
}

impl UnreachableReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnreachableReason::Timeout => "timeout",
            UnreachableReason::Refused => "refused",
            UnreachableReason::Other(_) => "other",
        }
    }
}

impl From<&io::Error> for UnreachableReason {
    fn from(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::ConnectionRefused => UnreachableReason::Refused,
            io::ErrorKind::TimedOut => UnreachableReason::Timeout,
            _ => UnreachableReason::Other(err.to_string()),
        }
    }
}

impl std::fmt::Display for UnreachableReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnreachableReason::Timeout => write!(f, "timed out"),
            UnreachableReason::Refused => write!(f, "connection refused"),
            UnreachableReason::Other(detail) => write!(f, "{}", detail),
        }
    }
}

/// Outcome of a single probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum ProbeResult {
    Reached,
    Unreachable(UnreachableReason),
}

impl ProbeResult {
    pub fn is_reached(&self) -> bool {
        matches!(self, ProbeResult::Reached)
    }

    pub fn reason(&self) -> Option<&UnreachableReason> {
        match self {
            ProbeResult::Reached => None,
            ProbeResult::Unreachable(reason) => Some(reason),
        }
    }

    /// Low-cardinality label for metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            ProbeResult::Reached => "reached",
            ProbeResult::Unreachable(reason) => reason.as_str(),
        }
    }
}

impl std::fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeResult::Reached => write!(f, "reached"),
            ProbeResult::Unreachable(reason) => write!(f, "unreachable ({})", reason),
        }
    }
}
