//! Loader for the bundler-managed environment.

use futures_util::future::BoxFuture;

use crate::capability::CapabilityModule;
use crate::error::BootstrapResult;
use crate::lifecycle::Environment;
use crate::loader::{LoadStrategy, Loaded};
use crate::orchestration::OrchestrationModule;

/// Loads a pre-bundled capability alongside the orchestration module.
#[derive(Debug)]
pub struct BundledStrategy<C, M> {
    capability: C,
    orchestration: M,
}

impl<C, M> BundledStrategy<C, M> {
    pub fn new(capability: C, orchestration: M) -> Self {
        Self {
            capability,
            orchestration,
        }
    }
}

impl<C, M> LoadStrategy for BundledStrategy<C, M>
where
    C: CapabilityModule,
    M: OrchestrationModule,
{
    type Orchestration = M::Orchestration;

    const ENVIRONMENT: Environment = Environment::Bundled;

    fn load(self) -> BoxFuture<'static, BootstrapResult<Loaded<Self::Orchestration>>> {
        Box::pin(async move {
            let (chart, orchestration) =
                tokio::try_join!(self.capability.load(), self.orchestration.load())?;
            tracing::debug!("Bundled modules loaded");
            Ok(Loaded {
                chart,
                orchestration,
            })
        })
    }
}
