//! Scales: one-axis mappings from data space to screen space.
//!
//! A scale is stateless once built. Shapes look scales up through
//! [`crate::coordinates::XyScales`] and only ever ask for the forward mapping.

#[cfg(test)]
#[path = "scale_test.rs"]
mod scale_test;

use serde::{Deserialize, Serialize};

/// Maps a data-space scalar to a screen-space scalar.
pub trait Scale {
    /// Map one value.
    fn compute(&self, value: f64) -> f64;

    /// Scalar variant used for span-edge queries.
    ///
    /// Identical to [`Scale::compute`] unless a scale batches work in `compute`.
    fn s_compute(&self, value: f64) -> f64 {
        self.compute(value)
    }
}

/// A closed interval on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range1d {
    pub start: f64,
    pub end: f64,
}

impl Range1d {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Signed length `end - start`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

/// Maps screen values to themselves. Used by overlays drawn in screen units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityScale;

impl Scale for IdentityScale {
    fn compute(&self, value: f64) -> f64 {
        value
    }
}

/// Affine mapping of `source` onto `target`.
///
/// A zero-length source range produces non-finite output, which shapes treat
/// as degenerate geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    pub source: Range1d,
    pub target: Range1d,
}

impl LinearScale {
    #[must_use]
    pub fn new(source: Range1d, target: Range1d) -> Self {
        Self { source, target }
    }

    fn factor(&self) -> f64 {
        self.target.span() / self.source.span()
    }
}

impl Scale for LinearScale {
    fn compute(&self, value: f64) -> f64 {
        self.target.start + (value - self.source.start) * self.factor()
    }
}

/// Base-10 logarithmic mapping of `source` onto `target`.
///
/// Non-positive inputs (and non-positive source bounds) have no logarithm and
/// map to NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogScale {
    pub source: Range1d,
    pub target: Range1d,
}

impl LogScale {
    #[must_use]
    pub fn new(source: Range1d, target: Range1d) -> Self {
        Self { source, target }
    }
}

impl Scale for LogScale {
    fn compute(&self, value: f64) -> f64 {
        if value <= 0.0 || self.source.start <= 0.0 || self.source.end <= 0.0 {
            return f64::NAN;
        }
        let log_start = self.source.start.log10();
        let log_span = self.source.end.log10() - log_start;
        self.target.start + (value.log10() - log_start) * (self.target.span() / log_span)
    }
}
