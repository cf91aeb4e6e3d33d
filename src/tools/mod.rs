//! Interactive gesture tools that draw overlays on top of a plot.
//!
//! A tool view receives pan events from the host's gesture dispatch and
//! answers each with an [`Action`] telling the host whether to repaint.

pub mod angle_tool;

/// Actions returned from gesture handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    /// Overlay state changed; repaint the owning view.
    RenderNeeded,
}

/// A pan gesture event in screen pixels.
///
/// `dx`/`dy` are cumulative from the gesture's start point, not from the
/// previous event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanEvent {
    pub sx: f64,
    pub sy: f64,
    pub dx: f64,
    pub dy: f64,
}

impl PanEvent {
    #[must_use]
    pub fn new(sx: f64, sy: f64, dx: f64, dy: f64) -> Self {
        Self { sx, sy, dx, dy }
    }

    /// A start or end event at `(sx, sy)` with no delta.
    #[must_use]
    pub fn at(sx: f64, sy: f64) -> Self {
        Self::new(sx, sy, 0.0, 0.0)
    }
}
