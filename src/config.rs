//! Run constants for the Z-score chart.

use serde::{Deserialize, Serialize};

use crate::core::Color;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub mean: f64,
    pub std_dev: f64,
    /// Right edge of the shaded region
    pub z_score: f64,
    /// Half-width of the plotted domain in standard deviations
    pub span_sigmas: f64,
    /// Points per curve (full curve and shaded region alike)
    pub sample_count: usize,
    pub window_width: u32,
    pub window_height: u32,
    pub background: Color,
    pub curve_color: Color,
    pub fill_color: Color,
    pub fill_opacity: f32,
    pub threshold_color: Color,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
            z_score: 1.25,
            span_sigmas: 4.0,
            sample_count: 1000,
            window_width: 1000,
            window_height: 600,
            background: Color::WHITE,
            curve_color: Color::TAB_BLUE,
            fill_color: Color::SKY_BLUE,
            fill_opacity: 0.4,
            threshold_color: Color::RED,
        }
    }
}

impl ChartConfig {
    pub fn z_score(mut self, z: f64) -> Self {
        self.z_score = z;
        self
    }

    pub fn distribution(mut self, mean: f64, std_dev: f64) -> Self {
        self.mean = mean;
        self.std_dev = std_dev;
        self
    }

    pub fn span_sigmas(mut self, span: f64) -> Self {
        self.span_sigmas = span;
        self
    }

    pub fn sample_count(mut self, n: usize) -> Self {
        self.sample_count = n;
        self
    }
}
