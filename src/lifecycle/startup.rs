//! Startup orchestration.
//!
//! # Responsibilities
//! - Pick the loader strategy for the host environment
//! - Load the capability and orchestration pair
//! - Run `setup(Chart)` then `main()`
//!
//! # Design Decisions
//! - Fail fast: errors propagate unchanged, nothing is retried
//! - `init` consumes the bootstrap, so it runs once per value
//! - Every run carries a boot ID on its tracing span

use tracing::Instrument;
use uuid::Uuid;

use crate::error::BootstrapResult;
use crate::lifecycle::{Environment, PhaseHandle};
use crate::loader::{LoadStrategy, Loaded};
use crate::orchestration::{Configured, Orchestration};

/// One-shot bootstrap holding a strategy for each environment.
#[derive(Debug)]
pub struct Bootstrap<B, S> {
    environment: Environment,
    bundled: B,
    standalone: S,
    phase: PhaseHandle,
    boot_id: Uuid,
}

impl<B, S> Bootstrap<B, S>
where
    B: LoadStrategy,
    S: LoadStrategy,
{
    pub fn new(environment: Environment, bundled: B, standalone: S) -> Self {
        Self {
            environment,
            bundled,
            standalone,
            phase: PhaseHandle::new(),
            boot_id: Uuid::new_v4(),
        }
    }

    /// Build a bootstrap for the environment detected from the process.
    pub fn detect(bundled: B, standalone: S) -> Self {
        Self::new(Environment::detect(), bundled, standalone)
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Handle observing this bootstrap's phase, usable after `init` consumes it.
    pub fn phase(&self) -> PhaseHandle {
        self.phase.clone()
    }

    pub fn boot_id(&self) -> Uuid {
        self.boot_id
    }

    /// Load the selected module pair, then run `setup` and `main`.
    pub async fn init(self) -> BootstrapResult<()> {
        let span = tracing::info_span!(
            "bootstrap",
            boot_id = %self.boot_id,
            environment = %self.environment,
        );

        let Self {
            environment,
            bundled,
            standalone,
            phase,
            ..
        } = self;

        async move {
            tracing::info!("Loading modules");
            match environment {
                Environment::Bundled => {
                    drop(standalone);
                    launch(bundled, &phase).await
                }
                Environment::Standalone => {
                    drop(bundled);
                    launch(standalone, &phase).await
                }
            }
        }
        .instrument(span)
        .await
    }
}

async fn launch<L: LoadStrategy>(strategy: L, phase: &PhaseHandle) -> BootstrapResult<()> {
    let Loaded {
        chart,
        orchestration,
    } = strategy.load().await?;
    tracing::info!(strategy = %L::ENVIRONMENT, "Modules loaded");

    let configured = orchestration.setup(chart)?;
    tracing::info!("Setup complete, starting main");

    phase.enter_running();
    configured.main().await
}
