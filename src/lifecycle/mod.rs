//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → resolve shutdown_signal()
//!     → caller drops in-flight probe futures
//!     → sockets close with them
//! ```

pub mod signals;

pub use signals::shutdown_signal;
