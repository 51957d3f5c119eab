//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{EnvironmentSetting, ExplorerConfig};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(std::io::Error),

    #[error("Parse error: {0}")]
    Parse(toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Command-line values that replace fields from the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub environment: Option<EnvironmentSetting>,
    pub artifact: Option<String>,
}

impl ConfigOverrides {
    fn apply(self, config: &mut ExplorerConfig) {
        if let Some(environment) = self.environment {
            config.environment = environment;
        }
        if let Some(artifact) = self.artifact {
            config.artifact.path = artifact;
        }
    }
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ExplorerConfig, ConfigError> {
    let config = read_config(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Read a TOML file without semantic validation.
pub fn read_config(path: &Path) -> Result<ExplorerConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<ExplorerConfig, ConfigError> {
    let config: ExplorerConfig = toml::from_str(content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Read the optional file, merge overrides, then validate the result once.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<ExplorerConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => ExplorerConfig::default(),
    };
    overrides.apply(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
