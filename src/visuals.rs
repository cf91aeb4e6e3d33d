//! Styling applied to a constructed path: fill, hatch and line.
//!
//! Each visual decides for itself whether it draws anything. A shape applies
//! them in the fixed order fill, hatch, line so the stroke sits on top.

#[cfg(test)]
#[path = "visuals_test.rs"]
mod visuals_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_HATCH_SCALE_PX, DEFAULT_HATCH_WEIGHT_PX};
use crate::context::{Context2d, HatchPattern};
use crate::error::ContextError;

/// Something that paints the current path.
pub trait Visual {
    /// Paint the current path. Returns whether anything was drawn.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a backend call fails.
    fn apply(&self, ctx: &mut dyn Context2d) -> Result<bool, ContextError>;
}

/// Solid fill. `color: None` disables it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillVisual {
    pub color: Option<String>,
    pub alpha: f64,
}

impl FillVisual {
    #[must_use]
    pub fn new(color: &str) -> Self {
        Self { color: Some(color.to_owned()), alpha: 1.0 }
    }

    #[must_use]
    pub fn none() -> Self {
        Self { color: None, alpha: 1.0 }
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

impl Default for FillVisual {
    fn default() -> Self {
        Self::new("gray")
    }
}

impl Visual for FillVisual {
    fn apply(&self, ctx: &mut dyn Context2d) -> Result<bool, ContextError> {
        let Some(color) = self.color.as_deref() else {
            return Ok(false);
        };
        if self.alpha <= 0.0 {
            return Ok(false);
        }
        ctx.set_fill_style(color);
        ctx.set_global_alpha(self.alpha);
        ctx.fill();
        Ok(true)
    }
}

/// Pattern fill drawn over the solid fill. `pattern: None` disables it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HatchVisual {
    pub pattern: Option<HatchPattern>,
    pub color: String,
    pub alpha: f64,
    /// Distance between pattern lines in pixels.
    pub scale: f64,
    /// Pattern line width in pixels.
    pub weight: f64,
}

impl HatchVisual {
    #[must_use]
    pub fn new(pattern: HatchPattern, color: &str) -> Self {
        Self {
            pattern: Some(pattern),
            color: color.to_owned(),
            alpha: 1.0,
            scale: DEFAULT_HATCH_SCALE_PX,
            weight: DEFAULT_HATCH_WEIGHT_PX,
        }
    }

    #[must_use]
    pub fn none() -> Self {
        Self {
            pattern: None,
            color: "black".to_owned(),
            alpha: 1.0,
            scale: DEFAULT_HATCH_SCALE_PX,
            weight: DEFAULT_HATCH_WEIGHT_PX,
        }
    }
}

impl Default for HatchVisual {
    fn default() -> Self {
        Self::none()
    }
}

impl Visual for HatchVisual {
    fn apply(&self, ctx: &mut dyn Context2d) -> Result<bool, ContextError> {
        let Some(pattern) = self.pattern else {
            return Ok(false);
        };
        if self.alpha <= 0.0 || self.weight <= 0.0 {
            return Ok(false);
        }
        ctx.set_global_alpha(self.alpha);
        ctx.fill_hatch(pattern, &self.color, self.scale, self.weight)
    }
}

/// Stroke. `color: None` or a zero width disables it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineVisual {
    pub color: Option<String>,
    pub alpha: f64,
    pub width: f64,
    /// Dash pattern in pixels; empty means solid.
    pub dash: Vec<f64>,
}

impl LineVisual {
    #[must_use]
    pub fn new(color: &str, width: f64) -> Self {
        Self { color: Some(color.to_owned()), alpha: 1.0, width, dash: Vec::new() }
    }

    #[must_use]
    pub fn none() -> Self {
        Self { color: None, alpha: 1.0, width: 1.0, dash: Vec::new() }
    }

    #[must_use]
    pub fn with_dash(mut self, dash: &[f64]) -> Self {
        self.dash = dash.to_vec();
        self
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

impl Default for LineVisual {
    fn default() -> Self {
        Self::new("black", 1.0)
    }
}

impl Visual for LineVisual {
    fn apply(&self, ctx: &mut dyn Context2d) -> Result<bool, ContextError> {
        let Some(color) = self.color.as_deref() else {
            return Ok(false);
        };
        if self.alpha <= 0.0 || self.width <= 0.0 {
            return Ok(false);
        }
        ctx.set_stroke_style(color);
        ctx.set_line_width(self.width);
        ctx.set_global_alpha(self.alpha);
        ctx.set_line_dash(&self.dash)?;
        ctx.stroke();
        Ok(true)
    }
}

/// The fill, hatch and line of a closed shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Visuals {
    pub fill: FillVisual,
    pub hatch: HatchVisual,
    pub line: LineVisual,
}

impl Visuals {
    #[must_use]
    pub fn new(fill: FillVisual, hatch: HatchVisual, line: LineVisual) -> Self {
        Self { fill, hatch, line }
    }

    /// Apply fill, then hatch, then line.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a backend call fails.
    pub fn apply(&self, ctx: &mut dyn Context2d) -> Result<(), ContextError> {
        self.fill.apply(ctx)?;
        self.hatch.apply(ctx)?;
        self.line.apply(ctx)?;
        Ok(())
    }
}
