//! Error definitions for the bootstrap.

use thiserror::Error;

/// Failures raised while loading or starting collaborator modules.
///
/// Collaborators construct these themselves; the bootstrap only
/// propagates them.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The computational module (bundled or standalone) could not be loaded.
    #[error("capability module failed to load: {0}")]
    CapabilityLoad(String),

    /// The orchestration module could not be loaded.
    #[error("orchestration module failed to load: {0}")]
    OrchestrationLoad(String),

    /// The standalone artifact's init entry point failed.
    #[error("artifact initialization failed: {0}")]
    ArtifactInit(String),

    /// `setup` rejected the capability.
    #[error("setup failed: {0}")]
    Setup(String),

    /// `main` failed while running.
    #[error("main failed: {0}")]
    Main(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for bootstrap operations.
pub type BootstrapResult<T> = Result<T, BootstrapError>;
