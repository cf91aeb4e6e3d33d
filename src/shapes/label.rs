//! Single-line text label with an optional background box.
//!
//! The box is sized from the measured text plus padding, then positioned so
//! that its `anchor` point lands on `(x, y)`. Text is drawn left/top aligned
//! inside the padding.

#[cfg(test)]
#[path = "label_test.rs"]
mod label_test;

use serde::{Deserialize, Serialize};

use super::{Shape, ViewStorage, all_finite};
use crate::anchor::{Anchor, Padding};
use crate::consts::{DEFAULT_FONT_SIZE_PX, LINE_HEIGHT_FACTOR};
use crate::context::Context2d;
use crate::coordinates::XyScales;
use crate::error::ContextError;
use crate::visuals::{FillVisual, LineVisual, Visual};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: Anchor,
    pub padding: Padding,
    pub font_size: f64,
    pub text_color: String,
    pub background_fill: FillVisual,
    pub border_line: LineVisual,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelGeometry {
    pub sx: f64,
    pub sy: f64,
}

impl Label {
    #[must_use]
    pub fn new(x: f64, y: f64, text: &str) -> Self {
        Self {
            x,
            y,
            text: text.to_owned(),
            anchor: Anchor::default(),
            padding: Padding::default(),
            font_size: DEFAULT_FONT_SIZE_PX,
            text_color: "black".to_owned(),
            background_fill: FillVisual::none(),
            border_line: LineVisual::none(),
        }
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_background(mut self, fill: FillVisual, border: LineVisual) -> Self {
        self.background_fill = fill;
        self.border_line = border;
        self
    }

    fn font(&self) -> String {
        format!("{}px sans-serif", self.font_size)
    }

    fn paint_box(&self, ctx: &mut dyn Context2d, sx: f64, sy: f64) -> Result<(), ContextError> {
        ctx.set_font(&self.font());
        let text_width = ctx.measure_text(&self.text)?;
        let width = text_width + self.padding.horizontal();
        let height = self.font_size * LINE_HEIGHT_FACTOR + self.padding.vertical();

        let (ax, ay) = self.anchor.fraction();
        ctx.translate(sx - ax * width, sy - ay * height)?;

        ctx.begin_path();
        ctx.rect(0.0, 0.0, width, height);
        self.background_fill.apply(ctx)?;
        self.border_line.apply(ctx)?;

        ctx.set_fill_style(&self.text_color);
        ctx.set_global_alpha(1.0);
        ctx.set_text_align("left");
        ctx.set_text_baseline("top");
        ctx.fill_text(&self.text, self.padding.left, self.padding.top)
    }
}

impl Shape for Label {
    type Geometry = LabelGeometry;

    fn geometry(&self, scales: &XyScales<'_>) -> LabelGeometry {
        LabelGeometry { sx: scales.x_scale.compute(self.x), sy: scales.y_scale.compute(self.y) }
    }

    fn paint(&self, ctx: &mut dyn Context2d, scales: &XyScales<'_>, _views: &ViewStorage) -> Result<(), ContextError> {
        let LabelGeometry { sx, sy } = self.geometry(scales);
        if self.text.is_empty() || !all_finite(&[sx, sy, self.font_size]) {
            return Ok(());
        }

        ctx.save();
        let result = self.paint_box(ctx, sx, sy);
        ctx.restore();
        result
    }
}
