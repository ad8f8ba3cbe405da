//! Probe metrics.
//!
//! # Metrics
//! - `probe_attempts_total` (counter): probes by outcome
//! - `probe_duration_seconds` (histogram): probe latency by outcome
//!
//! Outcome label values: `reached`, `timeout`, `refused`, `other`.

use std::time::Duration;

use crate::probe::ProbeResult;

pub const PROBE_ATTEMPTS_TOTAL: &str = "probe_attempts_total";
pub const PROBE_DURATION_SECONDS: &str = "probe_duration_seconds";

/// Record the outcome and latency of one probe.
pub fn record_probe(result: &ProbeResult, elapsed: Duration) {
    let outcome = result.outcome();
    ::metrics::counter!(PROBE_ATTEMPTS_TOTAL, "outcome" => outcome).increment(1);
    ::metrics::histogram!(PROBE_DURATION_SECONDS, "outcome" => outcome)
        .record(elapsed.as_secs_f64());
}
