//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ExplorerConfig (validated, immutable)
//!     → CLI flags override selected fields
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, read_config, resolve_config, ConfigError, ConfigOverrides};
pub use schema::{ArtifactConfig, EnvironmentSetting, ExplorerConfig, LoggingConfig};
pub use validation::{validate_config, ValidationError};
