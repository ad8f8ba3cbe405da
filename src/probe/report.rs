//! Per-call probe records.

use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::probe::id::ProbeId;
use crate::probe::result::ProbeResult;
use crate::probe::target::ProbeTarget;

/// What one probe call observed.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub id: ProbeId,
    pub target: ProbeTarget,
    pub result: ProbeResult,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

fn serialize_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(elapsed.as_millis() as u64)
}

impl std::fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} in {} ms",
            self.id,
            self.target,
            self.result,
            self.elapsed.as_millis()
        )
    }
}
