//! Drawing contexts: the only seam between shapes and a rendering backend.
//!
//! [`Context2d`] mirrors the subset of the HTML canvas 2D API that shapes need.
//! [`CanvasContext`] forwards to a browser [`CanvasRenderingContext2d`];
//! [`RecordingContext`] logs every call as a [`Command`] for headless hosts
//! and tests.
//!
//! Calls that can fail in the browser (`arc`, `translate`, `rotate`, text and
//! dash calls) return `Result<(), ContextError>`; shapes propagate them with
//! `?`.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use serde::{Deserialize, Serialize};
use tracing::debug;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, Path2d};

use crate::error::ContextError;

/// A 2D immediate-mode drawing surface.
pub trait Context2d {
    fn save(&mut self);
    fn restore(&mut self);

    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64);
    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64);

    /// Append a circular arc. `anticlockwise` follows the canvas convention.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend rejects the arc (e.g. negative radius).
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool)
    -> Result<(), ContextError>;

    /// # Errors
    ///
    /// Returns `Err` if the backend rejects the transform.
    fn translate(&mut self, x: f64, y: f64) -> Result<(), ContextError>;

    /// # Errors
    ///
    /// Returns `Err` if the backend rejects the transform.
    fn rotate(&mut self, angle: f64) -> Result<(), ContextError>;

    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_global_alpha(&mut self, alpha: f64);

    /// # Errors
    ///
    /// Returns `Err` if the backend rejects the dash pattern.
    fn set_line_dash(&mut self, segments: &[f64]) -> Result<(), ContextError>;

    fn fill(&mut self);
    fn stroke(&mut self);

    /// Fill the current path with a hatch pattern, leaving the path intact so
    /// it can still be stroked. Returns whether any pattern was drawn.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend fails to build or stroke the pattern.
    fn fill_hatch(&mut self, pattern: HatchPattern, color: &str, spacing: f64, weight: f64)
    -> Result<bool, ContextError>;

    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: &str);
    fn set_text_baseline(&mut self, baseline: &str);

    /// # Errors
    ///
    /// Returns `Err` if the backend fails to draw the text.
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), ContextError>;

    /// Advance width of `text` in the current font.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend cannot measure text.
    fn measure_text(&mut self, text: &str) -> Result<f64, ContextError>;
}

// =============================================================
// Hatch patterns
// =============================================================

/// Line patterns used to hatch a filled region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HatchPattern {
    HorizontalLine,
    VerticalLine,
    Cross,
    DiagonalLine,
    LeftDiagonalLine,
    DiagonalCross,
}

impl HatchPattern {
    /// Line segments `(x0, y0, x1, y1)` covering a `width` x `height` area,
    /// `spacing` pixels apart.
    ///
    /// Returns nothing for a non-positive or non-finite spacing or extent.
    #[must_use]
    pub fn lines(self, width: f64, height: f64, spacing: f64) -> Vec<(f64, f64, f64, f64)> {
        if !(spacing > 0.0 && spacing.is_finite() && width.is_finite() && height.is_finite()) {
            return Vec::new();
        }
        let mut out = Vec::new();
        let horizontal = matches!(self, Self::HorizontalLine | Self::Cross);
        let vertical = matches!(self, Self::VerticalLine | Self::Cross);
        let diagonal = matches!(self, Self::DiagonalLine | Self::DiagonalCross);
        let left_diagonal = matches!(self, Self::LeftDiagonalLine | Self::DiagonalCross);

        if horizontal {
            let mut y = 0.0;
            while y <= height {
                out.push((0.0, y, width, y));
                y += spacing;
            }
        }
        if vertical {
            let mut x = 0.0;
            while x <= width {
                out.push((x, 0.0, x, height));
                x += spacing;
            }
        }
        if diagonal {
            // x + y = c, from the top edge down-left to the bottom edge.
            let mut c = 0.0;
            while c <= width + height {
                out.push((c, 0.0, c - height, height));
                c += spacing;
            }
        }
        if left_diagonal {
            // x - y = c, from the top edge down-right to the bottom edge.
            let mut c = -height;
            while c <= width {
                out.push((c, 0.0, c + height, height));
                c += spacing;
            }
        }
        out
    }
}

// =============================================================
// Browser backend
// =============================================================

/// [`Context2d`] backed by a browser canvas.
pub struct CanvasContext {
    ctx: CanvasRenderingContext2d,
}

impl CanvasContext {
    #[must_use]
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

fn js_err(err: JsValue) -> ContextError {
    ContextError(format!("{err:?}"))
}

impl Context2d for CanvasContext {
    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.rect(x, y, width, height);
    }

    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        self.ctx.quadratic_curve_to(cpx, cpy, x, y);
    }

    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64) {
        self.ctx.bezier_curve_to(cp1x, cp1y, cp2x, cp2y, x, y);
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start: f64,
        end: f64,
        anticlockwise: bool,
    ) -> Result<(), ContextError> {
        self.ctx
            .arc_with_anticlockwise(x, y, radius, start, end, anticlockwise)
            .map_err(js_err)
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), ContextError> {
        self.ctx.translate(x, y).map_err(js_err)
    }

    fn rotate(&mut self, angle: f64) -> Result<(), ContextError> {
        self.ctx.rotate(angle).map_err(js_err)
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn set_line_dash(&mut self, segments: &[f64]) -> Result<(), ContextError> {
        let dash_array = js_sys::Array::new();
        for segment in segments {
            dash_array.push(&JsValue::from_f64(*segment));
        }
        self.ctx.set_line_dash(&dash_array).map_err(js_err)
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill_hatch(&mut self, pattern: HatchPattern, color: &str, spacing: f64, weight: f64) -> Result<bool, ContextError> {
        let Some(canvas) = self.ctx.canvas() else {
            debug!(?pattern, "hatch skipped: context has no canvas element");
            return Ok(false);
        };
        let width = f64::from(canvas.width());
        let height = f64::from(canvas.height());

        let lines = pattern.lines(width, height, spacing);
        if lines.is_empty() {
            return Ok(false);
        }

        // Stroke the pattern through a separate path so the current path
        // survives for the line visual.
        let path = Path2d::new().map_err(js_err)?;
        for (x0, y0, x1, y1) in lines {
            path.move_to(x0, y0);
            path.line_to(x1, y1);
        }

        self.ctx.save();
        self.ctx.clip();
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(weight);
        let solid = self.ctx.set_line_dash(&js_sys::Array::new());
        if solid.is_ok() {
            self.ctx.stroke_with_path(&path);
        }
        self.ctx.restore();
        solid.map(|()| true).map_err(js_err)
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn set_text_align(&mut self, align: &str) {
        self.ctx.set_text_align(align);
    }

    fn set_text_baseline(&mut self, baseline: &str) {
        self.ctx.set_text_baseline(baseline);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), ContextError> {
        self.ctx.fill_text(text, x, y).map_err(js_err)
    }

    fn measure_text(&mut self, text: &str) -> Result<f64, ContextError> {
        self.ctx.measure_text(text).map(|metrics| metrics.width()).map_err(js_err)
    }
}

// =============================================================
// Recording backend
// =============================================================

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    Save,
    Restore,
    BeginPath,
    ClosePath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64 },
    QuadraticCurveTo { cpx: f64, cpy: f64, x: f64, y: f64 },
    BezierCurveTo { cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64 },
    Arc { x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool },
    Translate { x: f64, y: f64 },
    Rotate { angle: f64 },
    SetFillStyle { color: String },
    SetStrokeStyle { color: String },
    SetLineWidth { width: f64 },
    SetGlobalAlpha { alpha: f64 },
    SetLineDash { segments: Vec<f64> },
    Fill,
    Stroke,
    FillHatch { pattern: HatchPattern, color: String, spacing: f64, weight: f64 },
    SetFont { font: String },
    SetTextAlign { align: String },
    SetTextBaseline { baseline: String },
    FillText { text: String, x: f64, y: f64 },
}

/// A [`Context2d`] that records calls instead of drawing.
///
/// Text is measured as `char_width` pixels per character. A `detached`
/// context behaves like one with no backing canvas: hatches draw nothing.
#[derive(Debug, Clone)]
pub struct RecordingContext {
    pub commands: Vec<Command>,
    pub char_width: f64,
    pub detached: bool,
}

impl Default for RecordingContext {
    fn default() -> Self {
        Self { commands: Vec::new(), char_width: 7.0, detached: false }
    }
}

impl RecordingContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing at all was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of recorded commands matching `pred`.
    pub fn count<F>(&self, pred: F) -> usize
    where
        F: Fn(&Command) -> bool,
    {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    fn push(&mut self, command: Command) {
        self.commands.push(command);
    }
}

impl Context2d for RecordingContext {
    fn save(&mut self) {
        self.push(Command::Save);
    }

    fn restore(&mut self) {
        self.push(Command::Restore);
    }

    fn begin_path(&mut self) {
        self.push(Command::BeginPath);
    }

    fn close_path(&mut self) {
        self.push(Command::ClosePath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push(Command::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(Command::LineTo { x, y });
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.push(Command::Rect { x, y, width, height });
    }

    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        self.push(Command::QuadraticCurveTo { cpx, cpy, x, y });
    }

    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64) {
        self.push(Command::BezierCurveTo { cp1x, cp1y, cp2x, cp2y, x, y });
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start: f64,
        end: f64,
        anticlockwise: bool,
    ) -> Result<(), ContextError> {
        if radius < 0.0 {
            return Err(ContextError(format!("negative arc radius {radius}")));
        }
        self.push(Command::Arc { x, y, radius, start, end, anticlockwise });
        Ok(())
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), ContextError> {
        self.push(Command::Translate { x, y });
        Ok(())
    }

    fn rotate(&mut self, angle: f64) -> Result<(), ContextError> {
        self.push(Command::Rotate { angle });
        Ok(())
    }

    fn set_fill_style(&mut self, color: &str) {
        self.push(Command::SetFillStyle { color: color.to_owned() });
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.push(Command::SetStrokeStyle { color: color.to_owned() });
    }

    fn set_line_width(&mut self, width: f64) {
        self.push(Command::SetLineWidth { width });
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.push(Command::SetGlobalAlpha { alpha });
    }

    fn set_line_dash(&mut self, segments: &[f64]) -> Result<(), ContextError> {
        self.push(Command::SetLineDash { segments: segments.to_vec() });
        Ok(())
    }

    fn fill(&mut self) {
        self.push(Command::Fill);
    }

    fn stroke(&mut self) {
        self.push(Command::Stroke);
    }

    fn fill_hatch(&mut self, pattern: HatchPattern, color: &str, spacing: f64, weight: f64) -> Result<bool, ContextError> {
        if self.detached {
            return Ok(false);
        }
        self.push(Command::FillHatch { pattern, color: color.to_owned(), spacing, weight });
        Ok(true)
    }

    fn set_font(&mut self, font: &str) {
        self.push(Command::SetFont { font: font.to_owned() });
    }

    fn set_text_align(&mut self, align: &str) {
        self.push(Command::SetTextAlign { align: align.to_owned() });
    }

    fn set_text_baseline(&mut self, baseline: &str) {
        self.push(Command::SetTextBaseline { baseline: baseline.to_owned() });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), ContextError> {
        self.push(Command::FillText { text: text.to_owned(), x, y });
        Ok(())
    }

    #[allow(clippy::cast_precision_loss)]
    fn measure_text(&mut self, text: &str) -> Result<f64, ContextError> {
        Ok(text.chars().count() as f64 * self.char_width)
    }
}
