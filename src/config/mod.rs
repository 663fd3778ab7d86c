//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → API_MONITOR_* environment overrides
//!     → command-line overrides
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → AppConfig::monitor_config() for the engine
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError, ConfigOverrides};
pub use schema::AppConfig;
pub use schema::LogFormat;
pub use schema::NotifierConfig;
pub use schema::NotifierKind;
pub use schema::ObservabilityConfig;
pub use schema::ProbeConfig;
