//! TCP reachability probing with bounded timeouts.

pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod probe;

pub use config::AppConfig;
pub use probe::{probe, ProbeConfig, ProbeResult, ProbeTarget, Prober, UnreachableReason};
