//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Every probe produces:
//!     → logging.rs (structured log events inside a per-probe span)
//!     → metrics.rs (attempt counter, duration histogram)
//!
//! Consumers:
//!     → stderr (fmt layer; stdout is reserved for probe output)
//!     → whatever metrics recorder the embedding application installs
//! ```
//!
//! # Design Decisions
//! - Probe id flows through every event of that probe via the span
//! - Metrics go through the `metrics` facade and are no-ops until a
//!   recorder is installed

pub mod logging;
pub mod metrics;
