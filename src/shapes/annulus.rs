//! Ring between two concentric circles.

#[cfg(test)]
#[path = "annulus_test.rs"]
mod annulus_test;

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use super::{RadiusDimension, Shape, ViewStorage, all_finite, sradius};
use crate::context::Context2d;
use crate::coordinates::XyScales;
use crate::error::{ContextError, ShapeError, non_negative};
use crate::visuals::Visuals;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annulus {
    pub x: f64,
    pub y: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub radius_dimension: RadiusDimension,
    pub visuals: Visuals,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnulusGeometry {
    pub sx: f64,
    pub sy: f64,
    pub sinner_radius: f64,
    pub souter_radius: f64,
}

impl Annulus {
    /// # Errors
    ///
    /// Returns [`ShapeError::Negative`] if either radius is negative.
    pub fn new(x: f64, y: f64, inner_radius: f64, outer_radius: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            x,
            y,
            inner_radius: non_negative("inner_radius", inner_radius)?,
            outer_radius: non_negative("outer_radius", outer_radius)?,
            radius_dimension: RadiusDimension::default(),
            visuals: Visuals::default(),
        })
    }

    #[must_use]
    pub fn with_visuals(mut self, visuals: Visuals) -> Self {
        self.visuals = visuals;
        self
    }
}

impl Shape for Annulus {
    type Geometry = AnnulusGeometry;

    fn geometry(&self, scales: &XyScales<'_>) -> AnnulusGeometry {
        AnnulusGeometry {
            sx: scales.x_scale.compute(self.x),
            sy: scales.y_scale.compute(self.y),
            sinner_radius: sradius(scales, self.x, self.y, self.inner_radius, self.radius_dimension),
            souter_radius: sradius(scales, self.x, self.y, self.outer_radius, self.radius_dimension),
        }
    }

    fn paint(&self, ctx: &mut dyn Context2d, scales: &XyScales<'_>, _views: &ViewStorage) -> Result<(), ContextError> {
        let AnnulusGeometry { sx, sy, sinner_radius, souter_radius } = self.geometry(scales);
        if !all_finite(&[sx, sy, sinner_radius, souter_radius]) {
            return Ok(());
        }

        // Opposite windings so the nonzero fill rule leaves the hole empty.
        ctx.begin_path();
        ctx.arc(sx, sy, sinner_radius, 0.0, TAU, true)?;
        ctx.move_to(sx + souter_radius, sy);
        ctx.arc(sx, sy, souter_radius, TAU, 0.0, false)?;

        self.visuals.apply(ctx)
    }
}
