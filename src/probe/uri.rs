//! Target parsing: plain addresses or single-host connection strings.
//!
//! # Accepted forms
//! - `host`, `host:port`, `[v6]:port`
//! - `mongodb://[user:pass@]host[:port][/db][?options]`
//!
//! Only `connectTimeoutMS` and `serverSelectionTimeoutMS` carry meaning;
//! every other option (e.g. `useNewUrlParser`) is accepted and ignored.

use std::str::FromStr;

use percent_encoding::percent_decode_str;
use url::{Host, Url};

use crate::probe::error::ProbeError;
use crate::probe::options::ProbeConfig;
use crate::probe::target::{ProbeTarget, DEFAULT_PORT};

const SCHEME: &str = "mongodb";

/// A probe target plus any per-target timeout overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionString {
    target: ProbeTarget,
    connect_timeout_ms: Option<u64>,
    selection_timeout_ms: Option<u64>,
    redacted: String,
}

impl ConnectionString {
    /// Wrap a bare target, rendered as a connection string for logging.
    pub fn from_target(target: ProbeTarget) -> Self {
        Self {
            redacted: format!("{}://{}", SCHEME, target),
            target,
            connect_timeout_ms: None,
            selection_timeout_ms: None,
        }
    }

    pub fn target(&self) -> &ProbeTarget {
        &self.target
    }

    /// The input with any password masked.
    pub fn redacted(&self) -> &str {
        &self.redacted
    }

    /// Apply this target's overrides on top of `base`.
    pub fn probe_config(&self, base: &ProbeConfig) -> Result<ProbeConfig, ProbeError> {
        let connect = self
            .connect_timeout_ms
            .unwrap_or(base.connect_timeout().as_millis() as u64);
        let selection = self
            .selection_timeout_ms
            .unwrap_or(base.selection_timeout().as_millis() as u64);
        ProbeConfig::new(connect, selection)
    }

    fn parse_uri(s: &str) -> Result<Self, ProbeError> {
        let (scheme, rest) = s
            .split_once("://")
            .ok_or_else(|| ProbeError::InvalidUri(s.to_string()))?;
        if !scheme.eq_ignore_ascii_case(SCHEME) {
            return Err(ProbeError::UnsupportedScheme(scheme.to_string()));
        }

        // The url crate has no notion of seed lists; catch them before it
        // misreads "a:1,b:2" as a bad port.
        let authority = rest.split(['/', '?']).next().unwrap_or_default();
        let hosts = authority.rsplit_once('@').map_or(authority, |(_, hosts)| hosts);
        if hosts.contains(',') {
            return Err(ProbeError::MultipleHosts);
        }

        let mut url = Url::parse(s).map_err(|e| ProbeError::InvalidUri(e.to_string()))?;

        let host = match url.host() {
            // Opaque hosts of non-special schemes stay percent-encoded.
            Some(Host::Domain(domain)) => percent_decode_str(domain)
                .decode_utf8()
                .map_err(|e| ProbeError::InvalidUri(e.to_string()))?
                .into_owned(),
            Some(Host::Ipv4(addr)) => addr.to_string(),
            Some(Host::Ipv6(addr)) => addr.to_string(),
            None => return Err(ProbeError::EmptyHost),
        };
        let target = ProbeTarget::new(host, url.port().unwrap_or(DEFAULT_PORT))?;

        let mut connect_timeout_ms = None;
        let mut selection_timeout_ms = None;
        for (key, value) in url.query_pairs() {
            match key.to_ascii_lowercase().as_str() {
                "connecttimeoutms" => connect_timeout_ms = Some(parse_timeout(&key, &value)?),
                "serverselectiontimeoutms" => {
                    selection_timeout_ms = Some(parse_timeout(&key, &value)?)
                }
                _ => tracing::trace!(option = %key, "Ignoring connection string option"),
            }
        }

        let has_password = url.password().is_some();
        let redacted = if has_password && url.set_password(Some("****")).is_err() {
            // Unmaskable credentials: log only the target.
            format!("{}://{}", SCHEME, target)
        } else {
            url.to_string()
        };

        Ok(Self {
            target,
            connect_timeout_ms,
            selection_timeout_ms,
            redacted,
        })
    }
}

fn parse_timeout(key: &str, value: &str) -> Result<u64, ProbeError> {
    match value.parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(ProbeError::InvalidOption {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

impl FromStr for ConnectionString {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.contains("://") {
            return Self::parse_uri(s);
        }
        let target: ProbeTarget = s.parse()?;
        Ok(Self {
            redacted: target.to_string(),
            target,
            connect_timeout_ms: None,
            selection_timeout_ms: None,
        })
    }
}

impl std::fmt::Display for ConnectionString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.redacted)
    }
}
