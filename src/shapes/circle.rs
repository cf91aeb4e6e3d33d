//! Filled circle.

#[cfg(test)]
#[path = "circle_test.rs"]
mod circle_test;

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use super::{RadiusDimension, Shape, ViewStorage, all_finite, sradius};
use crate::context::Context2d;
use crate::coordinates::XyScales;
use crate::error::{ContextError, ShapeError, non_negative};
use crate::visuals::Visuals;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub radius_dimension: RadiusDimension,
    pub visuals: Visuals,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleGeometry {
    pub sx: f64,
    pub sy: f64,
    pub sradius: f64,
}

impl Circle {
    /// # Errors
    ///
    /// Returns [`ShapeError::Negative`] for a negative `radius`.
    pub fn new(x: f64, y: f64, radius: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            x,
            y,
            radius: non_negative("radius", radius)?,
            radius_dimension: RadiusDimension::default(),
            visuals: Visuals::default(),
        })
    }

    #[must_use]
    pub fn with_radius_dimension(mut self, radius_dimension: RadiusDimension) -> Self {
        self.radius_dimension = radius_dimension;
        self
    }

    #[must_use]
    pub fn with_visuals(mut self, visuals: Visuals) -> Self {
        self.visuals = visuals;
        self
    }
}

impl Shape for Circle {
    type Geometry = CircleGeometry;

    fn geometry(&self, scales: &XyScales<'_>) -> CircleGeometry {
        CircleGeometry {
            sx: scales.x_scale.compute(self.x),
            sy: scales.y_scale.compute(self.y),
            sradius: sradius(scales, self.x, self.y, self.radius, self.radius_dimension),
        }
    }

    fn paint(&self, ctx: &mut dyn Context2d, scales: &XyScales<'_>, _views: &ViewStorage) -> Result<(), ContextError> {
        let CircleGeometry { sx, sy, sradius } = self.geometry(scales);
        if !all_finite(&[sx, sy, sradius]) {
            return Ok(());
        }

        ctx.begin_path();
        ctx.arc(sx, sy, sradius, 0.0, TAU, false)?;

        self.visuals.apply(ctx)
    }
}
