//! Loader for the standalone binary-loading environment.

use futures_util::future::BoxFuture;

use crate::capability::ArtifactModule;
use crate::error::BootstrapResult;
use crate::lifecycle::Environment;
use crate::loader::{LoadStrategy, Loaded};
use crate::orchestration::OrchestrationModule;

/// Loads a binary artifact alongside the orchestration module, then runs the
/// artifact's init entry point.
#[derive(Debug)]
pub struct StandaloneStrategy<A, M> {
    artifact: A,
    orchestration: M,
}

impl<A, M> StandaloneStrategy<A, M> {
    pub fn new(artifact: A, orchestration: M) -> Self {
        Self {
            artifact,
            orchestration,
        }
    }
}

impl<A, M> LoadStrategy for StandaloneStrategy<A, M>
where
    A: ArtifactModule,
    M: OrchestrationModule,
{
    type Orchestration = M::Orchestration;

    const ENVIRONMENT: Environment = Environment::Standalone;

    fn load(self) -> BoxFuture<'static, BootstrapResult<Loaded<Self::Orchestration>>> {
        Box::pin(async move {
            let (artifact, orchestration) =
                tokio::try_join!(self.artifact.load(), self.orchestration.load())?;
            tracing::debug!("Standalone modules loaded, instantiating artifact");

            let chart = artifact.instantiate().await?;
            Ok(Loaded {
                chart,
                orchestration,
            })
        })
    }
}
