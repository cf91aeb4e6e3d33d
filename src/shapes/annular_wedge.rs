//! Sector of a ring.

#[cfg(test)]
#[path = "annular_wedge_test.rs"]
mod annular_wedge_test;

use serde::{Deserialize, Serialize};

use super::{RadiusDimension, Shape, ViewStorage, all_finite, sradius};
use crate::context::Context2d;
use crate::coordinates::XyScales;
use crate::error::{ContextError, ShapeError, non_negative};
use crate::math::{AngleUnits, Direction, compute_angle};
use crate::visuals::Visuals;

/// The region between two radii, swept from `start_angle` to `end_angle`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnularWedge {
    pub x: f64,
    pub y: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub radius_dimension: RadiusDimension,
    pub start_angle: f64,
    pub end_angle: f64,
    pub angle_units: AngleUnits,
    pub direction: Direction,
    pub visuals: Visuals,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnularWedgeGeometry {
    pub sx: f64,
    pub sy: f64,
    pub sinner_radius: f64,
    pub souter_radius: f64,
    pub start_angle: f64,
    /// Sweep `end - start` in screen radians.
    pub angle: f64,
    pub anticlock: bool,
}

impl AnnularWedge {
    /// # Errors
    ///
    /// Returns [`ShapeError::Negative`] if either radius is negative.
    pub fn new(
        x: f64,
        y: f64,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self, ShapeError> {
        Ok(Self {
            x,
            y,
            inner_radius: non_negative("inner_radius", inner_radius)?,
            outer_radius: non_negative("outer_radius", outer_radius)?,
            radius_dimension: RadiusDimension::default(),
            start_angle,
            end_angle,
            angle_units: AngleUnits::Rad,
            direction: Direction::Anticlock,
            visuals: Visuals::default(),
        })
    }

    #[must_use]
    pub fn with_units(mut self, angle_units: AngleUnits) -> Self {
        self.angle_units = angle_units;
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn with_visuals(mut self, visuals: Visuals) -> Self {
        self.visuals = visuals;
        self
    }
}

impl Shape for AnnularWedge {
    type Geometry = AnnularWedgeGeometry;

    fn geometry(&self, scales: &XyScales<'_>) -> AnnularWedgeGeometry {
        let start_angle = compute_angle(self.start_angle, self.angle_units, Direction::Anticlock);
        let end_angle = compute_angle(self.end_angle, self.angle_units, Direction::Anticlock);
        AnnularWedgeGeometry {
            sx: scales.x_scale.compute(self.x),
            sy: scales.y_scale.compute(self.y),
            sinner_radius: sradius(scales, self.x, self.y, self.inner_radius, self.radius_dimension),
            souter_radius: sradius(scales, self.x, self.y, self.outer_radius, self.radius_dimension),
            start_angle,
            angle: end_angle - start_angle,
            anticlock: self.direction == Direction::Anticlock,
        }
    }

    fn paint(&self, ctx: &mut dyn Context2d, scales: &XyScales<'_>, _views: &ViewStorage) -> Result<(), ContextError> {
        let AnnularWedgeGeometry { sx, sy, sinner_radius, souter_radius, start_angle, angle, anticlock } =
            self.geometry(scales);
        if !all_finite(&[sx, sy, sinner_radius, souter_radius, start_angle, angle]) {
            return Ok(());
        }

        // Built in a frame rotated to the start angle, then unwound before
        // the visuals so fills and strokes see the caller's transform.
        ctx.translate(sx, sy)?;
        ctx.rotate(start_angle)?;

        ctx.begin_path();
        ctx.move_to(souter_radius, 0.0);
        ctx.arc(0.0, 0.0, souter_radius, 0.0, angle, anticlock)?;
        ctx.rotate(angle)?;
        ctx.line_to(sinner_radius, 0.0);
        ctx.arc(0.0, 0.0, sinner_radius, 0.0, -angle, !anticlock)?;
        ctx.close_path();

        ctx.rotate(-angle - start_angle)?;
        ctx.translate(-sx, -sy)?;

        self.visuals.apply(ctx)
    }
}
