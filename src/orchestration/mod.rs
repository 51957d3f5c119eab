//! Orchestration modules and the two-phase startup contract.
//!
//! # Data Flow
//! ```text
//! OrchestrationModule::load()
//!     → Orchestration
//!     → setup(Chart) → Configured
//!     → main()
//! ```
//!
//! # Design Decisions
//! - `main` only exists on the value `setup` returns, so it cannot run first
//! - Both phases consume their receiver: each runs at most once

pub mod console;

use futures_util::future::BoxFuture;

use crate::capability::Chart;
use crate::error::BootstrapResult;

pub use console::{ConsoleApp, ConsoleModule, ConsoleOrchestration};

/// A loadable orchestration module exporting `setup` and `main`.
pub trait OrchestrationModule: Send + 'static {
    type Orchestration: Orchestration + Send + 'static;

    fn load(self) -> BoxFuture<'static, BootstrapResult<Self::Orchestration>>;
}

/// First phase: register the capability.
pub trait Orchestration {
    type Configured: Configured;

    fn setup(self, chart: Chart) -> BootstrapResult<Self::Configured>;
}

/// Second phase: start the application's primary behavior.
pub trait Configured {
    fn main(self) -> BoxFuture<'static, BootstrapResult<()>>;
}
