//! Loader strategies: one per host environment.
//!
//! # Data Flow
//! ```text
//! BundledStrategy (bundled.rs):
//!     try_join(capability.load(), orchestration.load())
//!     → Loaded
//!
//! StandaloneStrategy (standalone.rs):
//!     try_join(artifact.load(), orchestration.load())
//!     → artifact.instantiate()
//!     → Loaded
//! ```
//!
//! # Design Decisions
//! - The two acquisitions are joined, not chained; either failure fails the join
//! - A strategy yields both halves, so a chart and an orchestration from
//!   different environments can never be paired
//! - No retry and no timeout: an acquisition that never resolves stalls startup

pub mod bundled;
pub mod standalone;

use futures_util::future::BoxFuture;

use crate::capability::Chart;
use crate::error::BootstrapResult;
use crate::lifecycle::Environment;
use crate::orchestration::Orchestration;

pub use bundled::BundledStrategy;
pub use standalone::StandaloneStrategy;

/// Capability and orchestration acquired by one strategy.
#[derive(Debug)]
pub struct Loaded<O> {
    pub chart: Chart,
    pub orchestration: O,
}

/// Loads a capability and its orchestration pair for one environment.
pub trait LoadStrategy: Send + 'static {
    type Orchestration: Orchestration + Send + 'static;

    /// Environment this strategy serves.
    const ENVIRONMENT: Environment;

    fn load(self) -> BoxFuture<'static, BootstrapResult<Loaded<Self::Orchestration>>>;
}
