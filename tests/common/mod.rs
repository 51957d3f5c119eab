//! Shared fakes for bootstrap integration tests.

#![allow(dead_code)]

use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use tokio::io::AsyncWrite;
use tokio::sync::Barrier;

use explorer_bootstrap::capability::{Artifact, ArtifactModule, CapabilityModule, Chart};
use explorer_bootstrap::error::{BootstrapError, BootstrapResult};
use explorer_bootstrap::lifecycle::{Bootstrap, Environment};
use explorer_bootstrap::loader::{BundledStrategy, StandaloneStrategy};
use explorer_bootstrap::orchestration::{Configured, Orchestration, OrchestrationModule};

/// Ordered record of everything the fakes did.
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: impl Into<String>) {
        self.0.lock().unwrap().push(event.into());
    }

    pub fn events(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn position(&self, event: &str) -> Option<usize> {
        self.events().iter().position(|e| e == event)
    }

    pub fn contains(&self, event: &str) -> bool {
        self.position(event).is_some()
    }

    /// True if any event starts with `prefix`.
    pub fn touched(&self, prefix: &str) -> bool {
        self.events().iter().any(|e| e.starts_with(prefix))
    }
}

/// How a fake acquisition behaves.
#[derive(Clone, Default)]
pub struct Behavior {
    pub fail: bool,
    pub hang: bool,
    pub barrier: Option<Arc<Barrier>>,
}

impl Behavior {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn hanging() -> Self {
        Self {
            hang: true,
            ..Self::default()
        }
    }

    pub fn meeting(barrier: &Arc<Barrier>) -> Self {
        Self {
            barrier: Some(barrier.clone()),
            ..Self::default()
        }
    }

    async fn run(&self) -> bool {
        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        if self.hang {
            std::future::pending::<()>().await;
        }
        !self.fail
    }
}

fn identity_chart() -> Chart {
    Chart::new(|(x, y)| Some((f64::from(x), f64::from(y))))
}

pub struct FakeCapability {
    pub tag: &'static str,
    pub log: EventLog,
    pub behavior: Behavior,
}

impl CapabilityModule for FakeCapability {
    fn load(self) -> BoxFuture<'static, BootstrapResult<Chart>> {
        async move {
            self.log.push(format!("{}:capability:start", self.tag));
            if !self.behavior.run().await {
                return Err(BootstrapError::CapabilityLoad(format!("{} capability", self.tag)));
            }
            self.log.push(format!("{}:capability:done", self.tag));
            Ok(identity_chart())
        }
        .boxed()
    }
}

pub struct FakeArtifact {
    pub log: EventLog,
    pub behavior: Behavior,
    pub init_fails: bool,
}

impl ArtifactModule for FakeArtifact {
    fn load(self) -> BoxFuture<'static, BootstrapResult<Artifact>> {
        async move {
            self.log.push("standalone:artifact:start");
            if !self.behavior.run().await {
                return Err(BootstrapError::CapabilityLoad("artifact".into()));
            }
            self.log.push("standalone:artifact:done");

            let log = self.log.clone();
            let init_fails = self.init_fails;
            Ok(Artifact::new(
                identity_chart(),
                Box::new(move || {
                    async move {
                        tokio::task::yield_now().await;
                        if init_fails {
                            log.push("standalone:init:failed");
                            return Err(BootstrapError::ArtifactInit("init".into()));
                        }
                        log.push("standalone:init");
                        Ok(())
                    }
                    .boxed()
                }),
            ))
        }
        .boxed()
    }
}

pub struct FakeOrchestrationModule {
    pub tag: &'static str,
    pub log: EventLog,
    pub behavior: Behavior,
    pub setup_fails: bool,
}

impl OrchestrationModule for FakeOrchestrationModule {
    type Orchestration = FakeOrchestration;

    fn load(self) -> BoxFuture<'static, BootstrapResult<FakeOrchestration>> {
        async move {
            self.log.push(format!("{}:orchestration:start", self.tag));
            if !self.behavior.run().await {
                return Err(BootstrapError::OrchestrationLoad(format!(
                    "{} orchestration",
                    self.tag
                )));
            }
            self.log.push(format!("{}:orchestration:done", self.tag));
            Ok(FakeOrchestration {
                tag: self.tag,
                log: self.log,
                setup_fails: self.setup_fails,
            })
        }
        .boxed()
    }
}

pub struct FakeOrchestration {
    tag: &'static str,
    log: EventLog,
    setup_fails: bool,
}

impl Orchestration for FakeOrchestration {
    type Configured = FakeApp;

    fn setup(self, chart: Chart) -> BootstrapResult<FakeApp> {
        if self.setup_fails {
            self.log.push(format!("{}:setup:failed", self.tag));
            return Err(BootstrapError::Setup("rejected chart".into()));
        }
        self.log.push(format!("{}:setup", self.tag));
        Ok(FakeApp {
            tag: self.tag,
            log: self.log,
            chart,
        })
    }
}

pub struct FakeApp {
    tag: &'static str,
    log: EventLog,
    chart: Chart,
}

impl Configured for FakeApp {
    fn main(self) -> BoxFuture<'static, BootstrapResult<()>> {
        async move {
            assert!(self.chart.coord(1, 1).is_some());
            self.log.push(format!("{}:main", self.tag));
            Ok(())
        }
        .boxed()
    }
}

/// Writer whose contents stay readable after it is moved into a module.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl AsyncWrite for SharedBuf {
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<std::io::Result<usize>> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Poll::Ready(Ok(buf.len()))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

pub type FakeBootstrap = Bootstrap<
    BundledStrategy<FakeCapability, FakeOrchestrationModule>,
    StandaloneStrategy<FakeArtifact, FakeOrchestrationModule>,
>;

/// Knobs for every collaborator of a fake bootstrap.
#[derive(Clone, Default)]
pub struct Fixture {
    pub log: EventLog,
    pub capability: Behavior,
    pub artifact: Behavior,
    pub orchestration: Behavior,
    pub init_fails: bool,
    pub setup_fails: bool,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bootstrap(&self, environment: Environment) -> FakeBootstrap {
        let (bundled, standalone) = self.strategies();
        Bootstrap::new(environment, bundled, standalone)
    }

    /// Bootstrap whose environment comes from the process, as in production.
    pub fn detected_bootstrap(&self) -> FakeBootstrap {
        let (bundled, standalone) = self.strategies();
        Bootstrap::detect(bundled, standalone)
    }

    fn strategies(
        &self,
    ) -> (
        BundledStrategy<FakeCapability, FakeOrchestrationModule>,
        StandaloneStrategy<FakeArtifact, FakeOrchestrationModule>,
    ) {
        let bundled = BundledStrategy::new(
            FakeCapability {
                tag: "bundled",
                log: self.log.clone(),
                behavior: self.capability.clone(),
            },
            FakeOrchestrationModule {
                tag: "bundled",
                log: self.log.clone(),
                behavior: self.orchestration.clone(),
                setup_fails: self.setup_fails,
            },
        );
        let standalone = StandaloneStrategy::new(
            FakeArtifact {
                log: self.log.clone(),
                behavior: self.artifact.clone(),
                init_fails: self.init_fails,
            },
            FakeOrchestrationModule {
                tag: "standalone",
                log: self.log.clone(),
                behavior: self.orchestration.clone(),
                setup_fails: self.setup_fails,
            },
        );
        (bundled, standalone)
    }
}
