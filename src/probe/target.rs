//! Probe target addresses.

use std::str::FromStr;

use serde::Serialize;

use crate::probe::error::ProbeError;

/// Host used when no target is configured.
pub const DEFAULT_HOST: &str = "localhost";

/// Port used when a target omits one (MongoDB's default).
pub const DEFAULT_PORT: u16 = 27017;

/// A validated `host:port` endpoint.
///
/// IPv6 literals are stored without brackets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProbeTarget {
    host: String,
    port: u16,
}

impl ProbeTarget {
    /// Create a target, rejecting an empty host or port 0.
    ///
    /// Surrounding whitespace is stripped from the host.
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self, ProbeError> {
        let host = host.into();
        let trimmed = host.trim();
        if trimmed.is_empty() {
            return Err(ProbeError::EmptyHost);
        }
        if port == 0 {
            return Err(ProbeError::ZeroPort);
        }
        Ok(Self {
            host: trimmed.to_string(),
            port,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl std::fmt::Display for ProbeTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

/// Parses `host`, `host:port`, `[v6]` or `[v6]:port`.
impl FromStr for ProbeTarget {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(rest) = s.strip_prefix('[') {
            let (host, tail) = rest
                .split_once(']')
                .ok_or_else(|| ProbeError::MalformedAddress(s.to_string()))?;
            let port = match tail {
                "" => DEFAULT_PORT,
                tail => {
                    let port = tail
                        .strip_prefix(':')
                        .ok_or_else(|| ProbeError::MalformedAddress(s.to_string()))?;
                    parse_port(port)?
                }
            };
            return Self::new(host, port);
        }

        match s.rsplit_once(':') {
            Some((host, port)) if !host.contains(':') => Self::new(host, parse_port(port)?),
            // Unbracketed IPv6 literal: no port can be told apart.
            Some(_) => Self::new(s, DEFAULT_PORT),
            None => Self::new(s, DEFAULT_PORT),
        }
    }
}

pub(crate) fn parse_port(s: &str) -> Result<u16, ProbeError> {
    s.parse::<u16>()
        .map_err(|_| ProbeError::MalformedPort(s.to_string()))
}
