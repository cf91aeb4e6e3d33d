//! Point markers placed at a coordinate.

#[cfg(test)]
#[path = "marker_test.rs"]
mod marker_test;

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use super::{Shape, ViewStorage, all_finite};
use crate::context::Context2d;
use crate::coordinates::{Coordinate, Sxy, XyScales};
use crate::error::{ContextError, ShapeError, non_negative};
use crate::visuals::{Visual, Visuals};

/// Marker glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerType {
    #[default]
    Circle,
    Square,
    /// `+`, stroked only.
    Cross,
    /// `×`, stroked only.
    X,
}

/// A fixed-size glyph centered on `at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub at: Coordinate,
    pub marker: MarkerType,
    /// Screen-space diameter in pixels.
    pub size: f64,
    pub visuals: Visuals,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerGeometry {
    pub center: Sxy,
    pub size: f64,
}

impl Marker {
    /// # Errors
    ///
    /// Returns [`ShapeError::Negative`] for a negative `size`.
    pub fn new(at: Coordinate, marker: MarkerType, size: f64) -> Result<Self, ShapeError> {
        Ok(Self { at, marker, size: non_negative("size", size)?, visuals: Visuals::default() })
    }

    #[must_use]
    pub fn with_visuals(mut self, visuals: Visuals) -> Self {
        self.visuals = visuals;
        self
    }
}

impl Shape for Marker {
    type Geometry = MarkerGeometry;

    fn geometry(&self, scales: &XyScales<'_>) -> MarkerGeometry {
        MarkerGeometry { center: scales.compute_coord(&self.at), size: self.size }
    }

    fn paint(&self, ctx: &mut dyn Context2d, scales: &XyScales<'_>, _views: &ViewStorage) -> Result<(), ContextError> {
        let MarkerGeometry { center: Sxy { sx, sy }, size } = self.geometry(scales);
        if !all_finite(&[sx, sy, size]) {
            return Ok(());
        }
        let r = size / 2.0;

        ctx.begin_path();
        match self.marker {
            MarkerType::Circle => {
                ctx.arc(sx, sy, r, 0.0, TAU, false)?;
                self.visuals.apply(ctx)?;
            }
            MarkerType::Square => {
                ctx.rect(sx - r, sy - r, size, size);
                self.visuals.apply(ctx)?;
            }
            MarkerType::Cross => {
                ctx.move_to(sx - r, sy);
                ctx.line_to(sx + r, sy);
                ctx.move_to(sx, sy - r);
                ctx.line_to(sx, sy + r);
                self.visuals.line.apply(ctx)?;
            }
            MarkerType::X => {
                ctx.move_to(sx - r, sy - r);
                ctx.line_to(sx + r, sy + r);
                ctx.move_to(sx - r, sy + r);
                ctx.line_to(sx + r, sy - r);
                self.visuals.line.apply(ctx)?;
            }
        }
        Ok(())
    }
}
