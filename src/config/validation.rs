//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the chart frame leaves a plotting area
//! - Check axis ranges and the artifact path
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ExplorerConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::ExplorerConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("chart {width}x{height} leaves no plotting area")]
    NoPlotArea { width: u32, height: u32 },

    #[error("chart {axis} range must be finite with min < max")]
    InvalidRange { axis: &'static str },

    #[error("artifact path is empty")]
    EmptyArtifactPath,
}

pub fn validate_config(config: &ExplorerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let chart = &config.chart;

    if chart.plot_area().is_none() {
        errors.push(ValidationError::NoPlotArea {
            width: chart.width,
            height: chart.height,
        });
    }
    if !chart.x_range.is_valid() {
        errors.push(ValidationError::InvalidRange { axis: "x" });
    }
    if !chart.y_range.is_valid() {
        errors.push(ValidationError::InvalidRange { axis: "y" });
    }
    if config.artifact.path.trim().is_empty() {
        errors.push(ValidationError::EmptyArtifactPath);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
