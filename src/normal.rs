//! Normal distribution numerics: evenly spaced samples, density, cumulative
//! probability and trapezoidal integration.

use error_stack::Report;
use statrs::distribution::{Continuous, ContinuousCDF, Normal};

use crate::{Result, ZPlotError};

/// `n` evenly spaced values over the closed interval `[start, end]`.
///
/// Both endpoints are hit exactly. `n == 1` yields `[start]`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        end
                    } else {
                        start + i as f64 * step
                    }
                })
                .collect()
        }
    }
}

/// Area under `ys` over `xs` using the trapezoidal rule.
pub fn trapezoid(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return 0.0;
    }

    (1..n)
        .map(|i| (xs[i] - xs[i - 1]) * (ys[i] + ys[i - 1]) * 0.5)
        .sum()
}

/// Parameters of a normal distribution `N(mean, std_dev²)`.
///
/// Density and cumulative probability are evaluated by `statrs`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalParams {
    mean: f64,
    std_dev: f64,
    dist: Normal,
}

impl Default for NormalParams {
    fn default() -> Self {
        Self::standard()
    }
}

impl NormalParams {
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(Report::new(ZPlotError)
                .attach("mean must be finite")
                .attach(format!("mean: {}", mean)));
        }
        if !std_dev.is_finite() {
            return Err(Report::new(ZPlotError)
                .attach("standard deviation must be finite")
                .attach(format!("std_dev: {}", std_dev)));
        }
        let dist = Normal::new(mean, std_dev).map_err(|e| {
            Report::new(e)
                .change_context(ZPlotError)
                .attach(format!("std_dev: {}", std_dev))
        })?;
        Ok(Self {
            mean,
            std_dev,
            dist,
        })
    }

    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
            dist: Normal::standard(),
        }
    }

    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Z-score of `x`.
    #[inline]
    pub fn standardize(&self, x: f64) -> f64 {
        (x - self.mean) / self.std_dev
    }

    /// `[mean - span·σ, mean + span·σ]`
    pub fn domain(&self, span_sigmas: f64) -> (f64, f64) {
        let half = span_sigmas * self.std_dev;
        (self.mean - half, self.mean + half)
    }

    #[inline]
    pub fn pdf(&self, x: f64) -> f64 {
        self.dist.pdf(x)
    }

    pub fn pdf_all(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.pdf(x)).collect()
    }

    pub fn cdf(&self, x: f64) -> f64 {
        self.dist.cdf(x)
    }
}
