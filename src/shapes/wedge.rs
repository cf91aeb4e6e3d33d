//! Filled circular sector.

#[cfg(test)]
#[path = "wedge_test.rs"]
mod wedge_test;

use serde::{Deserialize, Serialize};

use super::arc::ArcGeometry;
use super::{RadiusDimension, Shape, ViewStorage, all_finite, sradius};
use crate::context::Context2d;
use crate::coordinates::XyScales;
use crate::error::{ContextError, ShapeError, non_negative};
use crate::math::{AngleUnits, Direction, compute_angle};
use crate::visuals::Visuals;

/// A pie slice centered at `(x, y)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wedge {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub radius_dimension: RadiusDimension,
    pub start_angle: f64,
    pub end_angle: f64,
    pub angle_units: AngleUnits,
    pub direction: Direction,
    pub visuals: Visuals,
}

impl Wedge {
    /// # Errors
    ///
    /// Returns [`ShapeError::Negative`] for a negative `radius`.
    pub fn new(x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            x,
            y,
            radius: non_negative("radius", radius)?,
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

impl Shape for Wedge {
    type Geometry = ArcGeometry;

    fn geometry(&self, scales: &XyScales<'_>) -> ArcGeometry {
        ArcGeometry {
            sx: scales.x_scale.compute(self.x),
            sy: scales.y_scale.compute(self.y),
            sradius: sradius(scales, self.x, self.y, self.radius, self.radius_dimension),
            start_angle: compute_angle(self.start_angle, self.angle_units, Direction::Anticlock),
            end_angle: compute_angle(self.end_angle, self.angle_units, Direction::Anticlock),
            anticlock: self.direction == Direction::Anticlock,
        }
    }

    fn paint(&self, ctx: &mut dyn Context2d, scales: &XyScales<'_>, _views: &ViewStorage) -> Result<(), ContextError> {
        let ArcGeometry { sx, sy, sradius, start_angle, end_angle, anticlock } = self.geometry(scales);
        if !all_finite(&[sx, sy, sradius, start_angle, end_angle]) {
            return Ok(());
        }

        ctx.begin_path();
        ctx.arc(sx, sy, sradius, start_angle, end_angle, anticlock)?;
        ctx.line_to(sx, sy);
        ctx.close_path();

        self.visuals.apply(ctx)
    }
}
