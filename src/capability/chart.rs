//! The `Chart` capability handle.
//!
//! # Responsibilities
//! - Convert screen coordinates to chart coordinates
//! - Describe the canvas layout a chart was built for
//!
//! # Design Decisions
//! - The conversion is an opaque boxed function; callers never see the layout
//! - Points outside the plotting area have no chart coordinate

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of screen to chart coordinates conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

type Convert = Box<dyn Fn((i32, i32)) -> Option<(f64, f64)> + Send + Sync>;

/// Opaque capability handle produced by the computational module.
pub struct Chart {
    convert: Convert,
}

impl Chart {
    /// Wrap an arbitrary screen-to-chart conversion.
    pub fn new<F>(convert: F) -> Self
    where
        F: Fn((i32, i32)) -> Option<(f64, f64)> + Send + Sync + 'static,
    {
        Self {
            convert: Box::new(convert),
        }
    }

    /// Build the linear conversion for a chart laid out on `frame`.
    pub fn from_frame(frame: &ChartFrame) -> Self {
        let area = frame.plot_area();
        let x_range = frame.x_range;
        let y_range = frame.y_range;

        Self::new(move |(x, y)| {
            let area = area?;
            if !area.contains(x, y) {
                return None;
            }
            let fx = f64::from(x - area.left) / f64::from(area.right - area.left);
            let fy = f64::from(y - area.top) / f64::from(area.bottom - area.top);
            // Screen y grows downwards, chart y grows upwards.
            Some((x_range.lerp(fx), y_range.max - fy * y_range.span()))
        })
    }

    /// Convert screen coordinates to chart coordinates.
    pub fn coord(&self, x: i32, y: i32) -> Option<Point> {
        (self.convert)((x, y)).map(|(x, y)| Point { x, y })
    }
}

impl fmt::Debug for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chart").finish_non_exhaustive()
    }
}

/// Value range of one chart axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True when both bounds are finite and `min < max`.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }

    fn lerp(&self, t: f64) -> f64 {
        self.min + t * self.span()
    }
}

/// Canvas layout of a chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartFrame {
    /// Canvas width in pixels.
    pub width: u32,

    /// Canvas height in pixels.
    pub height: u32,

    /// Blank border around the chart.
    pub margin: u32,

    /// Height of the x label band below the plotting area.
    pub x_label_area: u32,

    /// Width of the y label band left of the plotting area.
    pub y_label_area: u32,

    pub x_range: AxisRange,
    pub y_range: AxisRange,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            margin: 20,
            x_label_area: 10,
            y_label_area: 10,
            x_range: AxisRange::new(0.0, 1.0),
            y_range: AxisRange::new(0.0, 1.0),
        }
    }
}

impl ChartFrame {
    /// Pixel rectangle that holds plotted values, if the canvas leaves room for one.
    pub fn plot_area(&self) -> Option<PlotArea> {
        let left = i64::from(self.margin) + i64::from(self.y_label_area);
        let top = i64::from(self.margin);
        let right = i64::from(self.width) - i64::from(self.margin);
        let bottom =
            i64::from(self.height) - i64::from(self.margin) - i64::from(self.x_label_area);

        if right <= left || bottom <= top {
            return None;
        }

        Some(PlotArea {
            left: i32::try_from(left).ok()?,
            top: i32::try_from(top).ok()?,
            right: i32::try_from(right).ok()?,
            bottom: i32::try_from(bottom).ok()?,
        })
    }
}

/// Plotting rectangle in screen pixels. `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotArea {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PlotArea {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (self.left..self.right).contains(&x) && (self.top..self.bottom).contains(&y)
    }
}
