//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::capability::ChartFrame;
use crate::lifecycle::Environment;

/// Root configuration for the explorer bootstrap.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Which loader strategy to use.
    pub environment: EnvironmentSetting,

    /// Canvas layout the chart capability is built for.
    pub chart: ChartFrame,

    /// Standalone artifact settings.
    pub artifact: ArtifactConfig,

    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Environment selection: detected at startup or pinned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentSetting {
    #[default]
    Auto,
    Bundled,
    Standalone,
}

impl EnvironmentSetting {
    pub fn resolve(self) -> Environment {
        match self {
            EnvironmentSetting::Auto => Environment::detect(),
            EnvironmentSetting::Bundled => Environment::Bundled,
            EnvironmentSetting::Standalone => Environment::Standalone,
        }
    }
}

/// Standalone artifact configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtifactConfig {
    /// Path to the compiled module.
    pub path: String,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            path: "pkg/explorer.wasm".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "explorer_bootstrap=info".to_string(),
        }
    }
}
