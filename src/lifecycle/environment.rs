//! Host environment classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Process variable set by the build tooling when it manages the module set.
pub const BUNDLE_DESCRIPTOR_VAR: &str = "EXPLORER_BUNDLE";

/// The host runtime the bootstrap is running in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Modules were assembled ahead of time by the build tool.
    Bundled,
    /// A compiled artifact is loaded and instantiated at runtime.
    Standalone,
}

impl Environment {
    /// Classify the current process.
    pub fn detect() -> Self {
        Self::classify(std::env::var_os(BUNDLE_DESCRIPTOR_VAR).is_some())
    }

    pub fn classify(bundle_descriptor_present: bool) -> Self {
        if bundle_descriptor_present {
            Environment::Bundled
        } else {
            Environment::Standalone
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Bundled => write!(f, "bundled"),
            Environment::Standalone => write!(f, "standalone"),
        }
    }
}
