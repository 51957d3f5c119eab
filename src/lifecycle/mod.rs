//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Environment (environment.rs):
//!     EXPLORER_BUNDLE present → Bundled, otherwise Standalone
//!
//! Startup (startup.rs):
//!     Select strategy → Load (joined) → setup(Chart) → main()
//!
//! Phase (phase.rs):
//!     Loading → Running
//! ```
//!
//! # Design Decisions
//! - Exactly one strategy is loaded per bootstrap; the other is dropped untouched
//! - Fail fast: any startup error is fatal and propagates unchanged
//! - The phase never moves backwards

pub mod environment;
pub mod phase;
pub mod startup;

pub use environment::{Environment, BUNDLE_DESCRIPTOR_VAR};
pub use phase::{BootPhase, PhaseHandle};
pub use startup::Bootstrap;
