//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (MONGODB_HOST / MONGODB_PORT, then CLI overrides)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → probe plan: (ConnectionString, ProbeConfig) per target
//! ```
//!
//! # Design Decisions
//! - Config is built once at startup; the environment is read only there
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError, Overrides};
pub use schema::AppConfig;
pub use schema::ObservabilityConfig;
pub use schema::TimeoutConfig;
