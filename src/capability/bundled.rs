//! Bundled (in-process) computational module.

use futures_util::future::BoxFuture;

use crate::capability::{CapabilityModule, Chart, ChartFrame};
use crate::error::BootstrapResult;

/// Computational module linked into the binary.
#[derive(Debug, Clone)]
pub struct BundledChartModule {
    frame: ChartFrame,
}

impl BundledChartModule {
    pub fn new(frame: ChartFrame) -> Self {
        Self { frame }
    }
}

impl CapabilityModule for BundledChartModule {
    fn load(self) -> BoxFuture<'static, BootstrapResult<Chart>> {
        Box::pin(async move {
            tracing::debug!(
                width = self.frame.width,
                height = self.frame.height,
                "Bundled chart module loaded"
            );
            Ok(Chart::from_frame(&self.frame))
        })
    }
}
