//! Probe identifiers for log correlation.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Serialize, Serializer};

/// Only uniqueness is needed, so relaxed ordering is enough.
static PROBE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier of a single probe call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProbeId(u64);

impl ProbeId {
    /// Generate a new unique probe ID.
    pub fn new() -> Self {
        Self(PROBE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Default for ProbeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProbeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "probe-{}", self.0)
    }
}

impl Serialize for ProbeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_id_unique() {
        let id1 = ProbeId::new();
        let id2 = ProbeId::new();
        assert_ne!(id1, id2);
        assert!(id2.as_u64() > id1.as_u64());
    }

    #[test]
    fn probe_id_display() {
        let id = ProbeId(7);
        assert_eq!(id.to_string(), "probe-7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"probe-7\"");
    }
}
