//! Straight line between two points.

#[cfg(test)]
#[path = "segment_test.rs"]
mod segment_test;

use serde::{Deserialize, Serialize};

use super::{Shape, ViewStorage, all_finite};
use crate::context::Context2d;
use crate::coordinates::XyScales;
use crate::error::ContextError;
use crate::visuals::{LineVisual, Visual};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub line: LineVisual,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentGeometry {
    pub sx0: f64,
    pub sy0: f64,
    pub sx1: f64,
    pub sy1: f64,
}

impl Segment {
    #[must_use]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1, line: LineVisual::default() }
    }

    /// A segment with no endpoints yet; paints nothing until set.
    #[must_use]
    pub fn unset() -> Self {
        Self::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN)
    }

    #[must_use]
    pub fn with_line(mut self, line: LineVisual) -> Self {
        self.line = line;
        self
    }
}

impl Shape for Segment {
    type Geometry = SegmentGeometry;

    fn geometry(&self, scales: &XyScales<'_>) -> SegmentGeometry {
        SegmentGeometry {
            sx0: scales.x_scale.compute(self.x0),
            sy0: scales.y_scale.compute(self.y0),
            sx1: scales.x_scale.compute(self.x1),
            sy1: scales.y_scale.compute(self.y1),
        }
    }

    fn paint(&self, ctx: &mut dyn Context2d, scales: &XyScales<'_>, _views: &ViewStorage) -> Result<(), ContextError> {
        let SegmentGeometry { sx0, sy0, sx1, sy1 } = self.geometry(scales);
        if !all_finite(&[sx0, sy0, sx1, sy1]) {
            return Ok(());
        }

        ctx.begin_path();
        ctx.move_to(sx0, sy0);
        ctx.line_to(sx1, sy1);

        self.line.apply(ctx)?;
        Ok(())
    }
}
