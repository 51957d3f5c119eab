//! Computational capability modules.
//!
//! # Data Flow
//! ```text
//! Bundled variant (bundled.rs):
//!     load() → Chart (usable immediately)
//!
//! Standalone variant (artifact.rs):
//!     load() → Artifact { Chart, init }
//!     → instantiate(): await init → Chart
//! ```
//!
//! # Design Decisions
//! - Both variants hand out the same opaque `Chart` handle
//! - The standalone `Chart` stays sealed inside `Artifact` until init completes
//! - Loading consumes the module: each module is loaded at most once

pub mod artifact;
pub mod bundled;
pub mod chart;

use futures_util::future::BoxFuture;

use crate::error::BootstrapResult;

pub use artifact::ArtifactFile;
pub use bundled::BundledChartModule;
pub use chart::{AxisRange, Chart, ChartFrame, Point};

/// Bundled computational module: the `Chart` is available once loading resolves.
pub trait CapabilityModule: Send + 'static {
    fn load(self) -> BoxFuture<'static, BootstrapResult<Chart>>;
}

/// Standalone computational module: loading yields an artifact that must be
/// instantiated before its `Chart` can be used.
pub trait ArtifactModule: Send + 'static {
    fn load(self) -> BoxFuture<'static, BootstrapResult<Artifact>>;
}

/// Deferred initialization of a loaded binary artifact.
pub type InitEntry = Box<dyn FnOnce() -> BoxFuture<'static, BootstrapResult<()>> + Send>;

/// A loaded but not yet initialized standalone module.
pub struct Artifact {
    chart: Chart,
    init: InitEntry,
}

impl Artifact {
    pub fn new(chart: Chart, init: InitEntry) -> Self {
        Self { chart, init }
    }

    /// Run the init entry point and release the `Chart` once it completes.
    pub async fn instantiate(self) -> BootstrapResult<Chart> {
        (self.init)().await?;
        Ok(self.chart)
    }
}

impl std::fmt::Debug for Artifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Artifact")
            .field("chart", &self.chart)
            .finish_non_exhaustive()
    }
}
