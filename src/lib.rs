//! Explorer bootstrap library.
//!
//! Selects the module set for the host environment, loads the `Chart`
//! capability together with its orchestration module, and runs the
//! two-phase `setup` / `main` handoff.

pub mod capability;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod loader;
pub mod observability;
pub mod orchestration;

pub use capability::{Chart, Point};
pub use config::ExplorerConfig;
pub use error::{BootstrapError, BootstrapResult};
pub use lifecycle::{Bootstrap, Environment};
