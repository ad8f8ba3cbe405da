//! Probe timeout budget.

use std::time::Duration;

use crate::probe::error::ProbeError;

/// Timeouts for a single probe.
///
/// `connect_timeout` bounds each connection attempt. `selection_timeout`
/// bounds finding a reachable address (resolution plus attempts). A probe
/// never runs longer than the larger of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeConfig {
    connect_timeout: Duration,
    selection_timeout: Duration,
}

impl ProbeConfig {
    pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;
    pub const DEFAULT_SELECTION_TIMEOUT_MS: u64 = 30_000;

    /// Create a config from millisecond values; both must be positive.
    pub fn new(connect_timeout_ms: u64, selection_timeout_ms: u64) -> Result<Self, ProbeError> {
        if connect_timeout_ms == 0 {
            return Err(ProbeError::ZeroTimeout("connect timeout"));
        }
        if selection_timeout_ms == 0 {
            return Err(ProbeError::ZeroTimeout("selection timeout"));
        }
        Ok(Self {
            connect_timeout: Duration::from_millis(connect_timeout_ms),
            selection_timeout: Duration::from_millis(selection_timeout_ms),
        })
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn selection_timeout(&self) -> Duration {
        self.selection_timeout
    }

    /// Upper bound on the duration of one probe call.
    pub fn deadline(&self) -> Duration {
        self.connect_timeout.max(self.selection_timeout)
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_millis(Self::DEFAULT_CONNECT_TIMEOUT_MS),
            selection_timeout: Duration::from_millis(Self::DEFAULT_SELECTION_TIMEOUT_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_timeouts() {
        assert_eq!(ProbeConfig::new(0, 1000), Err(ProbeError::ZeroTimeout("connect timeout")));
        assert_eq!(ProbeConfig::new(1000, 0), Err(ProbeError::ZeroTimeout("selection timeout")));
    }

    #[test]
    fn deadline_is_larger_timeout() {
        let config = ProbeConfig::new(1000, 250).unwrap();
        assert_eq!(config.deadline(), Duration::from_millis(1000));

        let config = ProbeConfig::new(1, 30_000).unwrap();
        assert_eq!(config.connect_timeout(), Duration::from_millis(1));
        assert_eq!(config.deadline(), Duration::from_secs(30));
    }
}
