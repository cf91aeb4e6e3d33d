//! Axis-aligned box positioned by an anchor.

#[cfg(test)]
#[path = "rect_test.rs"]
mod rect_test;

use serde::{Deserialize, Serialize};

use super::{Shape, ViewStorage, all_finite};
use crate::anchor::Anchor;
use crate::context::Context2d;
use crate::coordinates::XyScales;
use crate::error::{ContextError, ShapeError, non_negative};
use crate::visuals::Visuals;

/// A `width` x `height` box whose `anchor` point sits at `(x, y)`.
///
/// The position is in data space; the extent is in screen pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub anchor: Anchor,
    pub visuals: Visuals,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectGeometry {
    /// Top-left corner.
    pub sx0: f64,
    pub sy0: f64,
    /// Anchor point.
    pub sx: f64,
    pub sy: f64,
    pub swidth: f64,
    pub sheight: f64,
}

impl Rect {
    /// # Errors
    ///
    /// Returns [`ShapeError::Negative`] for a negative `width` or `height`.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            x,
            y,
            width: non_negative("width", width)?,
            height: non_negative("height", height)?,
            anchor: Anchor::Center,
            visuals: Visuals::default(),
        })
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub fn with_visuals(mut self, visuals: Visuals) -> Self {
        self.visuals = visuals;
        self
    }
}

impl Shape for Rect {
    type Geometry = RectGeometry;

    fn geometry(&self, scales: &XyScales<'_>) -> RectGeometry {
        let sx = scales.x_scale.compute(self.x);
        let sy = scales.y_scale.compute(self.y);
        let (swidth, sheight) = (self.width, self.height);
        let (ax, ay) = self.anchor.fraction();
        RectGeometry { sx0: sx - ax * swidth, sy0: sy - ay * sheight, sx, sy, swidth, sheight }
    }

    fn paint(&self, ctx: &mut dyn Context2d, scales: &XyScales<'_>, _views: &ViewStorage) -> Result<(), ContextError> {
        let RectGeometry { sx0, sy0, swidth, sheight, .. } = self.geometry(scales);
        if !all_finite(&[sx0, sy0, swidth, sheight]) {
            return Ok(());
        }

        ctx.begin_path();
        ctx.rect(sx0, sy0, swidth, sheight);

        self.visuals.apply(ctx)
    }
}
