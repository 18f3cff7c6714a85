//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults or config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (PORT / APP_ENV / LOG_LEVEL overrides)
//!     → validation.rs (semantic checks)
//!     → ApiConfig (validated, immutable)
//!     → shared via Arc with the router state
//! ```
//!
//! # Design Decisions
//! - Built once at startup; handlers never read the environment
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ApiConfig, Environment, LimitsConfig, ListenerConfig, ObservabilityConfig, TimeoutConfig};
