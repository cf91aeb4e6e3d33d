//! Quadratic or cubic Bézier curve.

#[cfg(test)]
#[path = "bezier_test.rs"]
mod bezier_test;

use serde::{Deserialize, Serialize};

use super::{Shape, ViewStorage, all_finite};
use crate::context::Context2d;
use crate::coordinates::XyScales;
use crate::error::ContextError;
use crate::visuals::{LineVisual, Visual};

/// A curve from `(x0, y0)` to `(x1, y1)`.
///
/// With only the first control point the curve is quadratic; setting both
/// `cx1` and `cy1` makes it cubic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bezier {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub cx0: f64,
    pub cy0: f64,
    pub cx1: Option<f64>,
    pub cy1: Option<f64>,
    pub line: LineVisual,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierGeometry {
    pub sx0: f64,
    pub sy0: f64,
    pub sx1: f64,
    pub sy1: f64,
    pub scx0: f64,
    pub scy0: f64,
    pub scx1: Option<f64>,
    pub scy1: Option<f64>,
}

impl Bezier {
    /// A quadratic curve with control point `(cx0, cy0)`.
    #[must_use]
    pub fn quadratic(x0: f64, y0: f64, x1: f64, y1: f64, cx0: f64, cy0: f64) -> Self {
        Self { x0, y0, x1, y1, cx0, cy0, cx1: None, cy1: None, line: LineVisual::default() }
    }

    /// A cubic curve with control points `(cx0, cy0)` and `(cx1, cy1)`.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn cubic(x0: f64, y0: f64, x1: f64, y1: f64, cx0: f64, cy0: f64, cx1: f64, cy1: f64) -> Self {
        Self { cx1: Some(cx1), cy1: Some(cy1), ..Self::quadratic(x0, y0, x1, y1, cx0, cy0) }
    }

    #[must_use]
    pub fn with_line(mut self, line: LineVisual) -> Self {
        self.line = line;
        self
    }
}

impl Shape for Bezier {
    type Geometry = BezierGeometry;

    fn geometry(&self, scales: &XyScales<'_>) -> BezierGeometry {
        let (xs, ys) = (scales.x_scale, scales.y_scale);
        BezierGeometry {
            sx0: xs.compute(self.x0),
            sy0: ys.compute(self.y0),
            sx1: xs.compute(self.x1),
            sy1: ys.compute(self.y1),
            scx0: xs.compute(self.cx0),
            scy0: ys.compute(self.cy0),
            scx1: self.cx1.map(|v| xs.compute(v)),
            scy1: self.cy1.map(|v| ys.compute(v)),
        }
    }

    fn paint(&self, ctx: &mut dyn Context2d, scales: &XyScales<'_>, _views: &ViewStorage) -> Result<(), ContextError> {
        let BezierGeometry { sx0, sy0, sx1, sy1, scx0, scy0, scx1, scy1 } = self.geometry(scales);
        let second = [scx1.unwrap_or(0.0), scy1.unwrap_or(0.0)];
        if !all_finite(&[sx0, sy0, sx1, sy1, scx0, scy0]) || !all_finite(&second) {
            return Ok(());
        }

        ctx.begin_path();
        ctx.move_to(sx0, sy0);
        match (scx1, scy1) {
            (Some(scx1), Some(scy1)) => ctx.bezier_curve_to(scx0, scy0, scx1, scy1, sx1, sy1),
            _ => ctx.quadratic_curve_to(scx0, scy0, sx1, sy1),
        }

        self.line.apply(ctx)?;
        Ok(())
    }
}
