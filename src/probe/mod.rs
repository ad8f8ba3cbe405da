//! Reachability probing.
//!
//! # Data Flow
//! ```text
//! "host:port" | "mongodb://host:port/db?opts"
//!     → uri.rs (ConnectionString: target + timeout overrides)
//!     → target.rs (ProbeTarget, validated)
//!     → options.rs (ProbeConfig, validated)
//!     → prober.rs (resolve, connect under deadline, release socket)
//!     → result.rs (Reached | Unreachable(reason))
//!     → report.rs (id, target, result, elapsed)
//! ```
//!
//! # Design Decisions
//! - Invalid targets and timeouts are rejected at construction, so a probe
//!   itself never fails: every outcome is a `ProbeResult`
//! - No retries; one connection attempt per resolved address
//! - Dropping a probe future closes any socket it holds

pub mod error;
pub mod id;
pub mod options;
pub mod prober;
pub mod report;
pub mod result;
pub mod target;
pub mod uri;

pub use error::ProbeError;
pub use id::ProbeId;
pub use options::ProbeConfig;
pub use prober::{Connector, Prober, TcpConnector};
pub use report::ProbeReport;
pub use result::{ProbeResult, UnreachableReason};
pub use target::ProbeTarget;
pub use uri::ConnectionString;

/// Probe `target` once with the default TCP connector.
pub async fn probe(target: &ProbeTarget, config: &ProbeConfig) -> ProbeResult {
    Prober::new().probe(target, config).await
}
